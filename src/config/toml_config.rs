use crate::core::partitioner::PartitionOptions;
use crate::domain::department::DepartmentTimings;
use crate::domain::model::TimePolicy;
use crate::domain::ports::{OutputFormat, TimingsProvider};
use crate::utils::error::{Result, TimetableError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub timetable: Option<TimetableInfo>,
    pub options: Option<OptionsConfig>,
    pub output: Option<OutputConfig>,
    #[serde(default)]
    pub departments: Vec<DepartmentTimings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    pub strict_times: Option<bool>,
    pub validate_break_window: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TimetableError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TimetableError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DAY_START})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TimetableError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                tracing::warn!("Environment variable {} is not set, leaving it unresolved", var_name);
                format!("${{{}}}", var_name)
            })
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.departments.is_empty() {
            return Err(TimetableError::MissingConfigError {
                field: "departments".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for (index, department) in self.departments.iter().enumerate() {
            let field = format!("departments[{}]", index);
            validation::validate_non_empty_string(&format!("{}.name", field), &department.name)?;
            validation::validate_positive_duration(
                &format!("{}.lecture_duration", field),
                department.lecture_duration,
            )?;
            validation::validate_non_negative_duration(
                &format!("{}.break.duration", field),
                department.break_info.duration_minutes,
            )?;

            if !seen.insert(department.name.trim()) {
                return Err(TimetableError::InvalidConfigValueError {
                    field: format!("{}.name", field),
                    value: department.name.clone(),
                    reason: "Department listed more than once".to_string(),
                });
            }
        }

        if let Some(output) = &self.output {
            if let Some(format) = &output.format {
                validation::validate_one_of("output.format", format, &["json", "text"])?;
            }
            if let Some(path) = &output.path {
                validation::validate_path("output.path", path)?;
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        self.timetable
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or("timetable")
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn strict_times(&self) -> bool {
        self.options
            .as_ref()
            .and_then(|o| o.strict_times)
            .unwrap_or(false)
    }

    pub fn validate_break_window(&self) -> bool {
        self.options
            .as_ref()
            .and_then(|o| o.validate_break_window)
            .unwrap_or(true)
    }

    /// Keeps only the named department. Fails when it is not configured.
    pub fn retain_department(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        self.departments.retain(|d| d.name.trim() == name);
        if self.departments.is_empty() {
            return Err(TimetableError::DepartmentNotFound {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

impl TimingsProvider for TomlConfig {
    fn departments(&self) -> Result<Vec<DepartmentTimings>> {
        Ok(self.departments.clone())
    }

    fn partition_options(&self) -> PartitionOptions {
        PartitionOptions {
            time_policy: if self.strict_times() {
                TimePolicy::Strict
            } else {
                TimePolicy::Lenient
            },
            validate_break_window: self.validate_break_window(),
        }
    }

    fn output_format(&self) -> OutputFormat {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            Some("text") => OutputFormat::Text,
            _ => OutputFormat::Json,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
