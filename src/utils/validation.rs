use crate::utils::error::{Result, TimetableError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TimetableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TimetableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects durations that would stall the slot loop (`<= 0`).
pub fn validate_positive_duration(field_name: &str, minutes: i64) -> Result<()> {
    if minutes <= 0 {
        return Err(TimetableError::InvalidDuration {
            field: field_name.to_string(),
            value: minutes,
        });
    }
    Ok(())
}

pub fn validate_non_negative_duration(field_name: &str, minutes: i64) -> Result<()> {
    if minutes < 0 {
        return Err(TimetableError::InvalidDuration {
            field: field_name.to_string(),
            value: minutes,
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TimetableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(TimetableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
