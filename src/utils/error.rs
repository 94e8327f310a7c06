use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Invalid duration for {field}: {value} (must be greater than zero)")]
    InvalidDuration { field: String, value: i64 },

    #[error("Malformed time for {field}: '{value}' (expected HH:MM)")]
    MalformedTimeInput { field: String, value: String },

    #[error(
        "Break {break_start}-{break_end} does not fit inside the day {day_start}-{day_end}"
    )]
    InconsistentBreakWindow {
        day_start: String,
        day_end: String,
        break_start: String,
        break_end: String,
    },

    #[error("Department not found: {name}")]
    DepartmentNotFound { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TimetableError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TimetableError::InvalidDuration { .. }
            | TimetableError::MalformedTimeInput { .. }
            | TimetableError::InconsistentBreakWindow { .. }
            | TimetableError::DepartmentNotFound { .. } => ErrorCategory::Input,
            TimetableError::ConfigError { .. }
            | TimetableError::ConfigValidationError { .. }
            | TimetableError::InvalidConfigValueError { .. }
            | TimetableError::MissingConfigError { .. } => ErrorCategory::Configuration,
            TimetableError::IoError(_) | TimetableError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the binaries.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TimetableError::InvalidDuration { field, .. } => {
                format!("Set {} to a positive number of minutes", field)
            }
            TimetableError::MalformedTimeInput { field, .. } => {
                format!("Write {} as a 24-hour HH:MM time, e.g. 09:15", field)
            }
            TimetableError::InconsistentBreakWindow { .. } => {
                "Move the break so it starts after the day starts and ends before the day ends"
                    .to_string()
            }
            TimetableError::DepartmentNotFound { .. } => {
                "Check the department name against the configured departments".to_string()
            }
            TimetableError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            TimetableError::SerializationError(_) => {
                "Report this as a bug; the schedule could not be serialized".to_string()
            }
            TimetableError::ConfigError { .. }
            | TimetableError::ConfigValidationError { .. } => {
                "Make sure the configuration file is valid TOML with a [[departments]] table"
                    .to_string()
            }
            TimetableError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of {} in the configuration", field)
            }
            TimetableError::MissingConfigError { field } => {
                format!("Add {} to the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid timetable input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TimetableError>;
