pub mod cli;
pub mod toml_config;

use crate::core::partitioner::PartitionOptions;
use crate::domain::department::DepartmentTimings;
use crate::domain::model::{BreakSpec, TimePolicy};
use crate::domain::ports::{OutputFormat, TimingsProvider};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "timetable-slots"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Split a department's working day into lecture and break slots")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "Department"))]
    pub department: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "09:15"))]
    pub start: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "17:20"))]
    pub end: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "60", allow_negative_numbers = true))]
    pub lecture_duration: i64,

    #[cfg_attr(feature = "cli", arg(long, default_value = "Lunch"))]
    pub break_name: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "12:15"))]
    pub break_start: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "65", allow_negative_numbers = true))]
    pub break_duration: i64,

    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value = "json"))]
    pub format: OutputFormat,

    /// Write the output to this file instead of stdout
    #[cfg_attr(feature = "cli", arg(long))]
    pub output: Option<String>,

    /// Reject times that are not HH:MM instead of reading them as 00:00
    #[cfg_attr(feature = "cli", arg(long))]
    pub strict_times: bool,

    /// Allow a break that starts before or ends after the working day
    #[cfg_attr(feature = "cli", arg(long))]
    pub no_break_validation: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub log_json: bool,
}

impl CliConfig {
    pub fn timings(&self) -> DepartmentTimings {
        DepartmentTimings {
            name: self.department.clone(),
            start_time: self.start.clone(),
            end_time: self.end.clone(),
            lecture_duration: self.lecture_duration,
            break_info: BreakSpec::new(
                self.break_name.clone(),
                self.break_start.clone(),
                self.break_duration,
            ),
        }
    }
}

impl TimingsProvider for CliConfig {
    fn departments(&self) -> Result<Vec<DepartmentTimings>> {
        Ok(vec![self.timings()])
    }

    fn partition_options(&self) -> PartitionOptions {
        PartitionOptions {
            time_policy: if self.strict_times {
                TimePolicy::Strict
            } else {
                TimePolicy::Lenient
            },
            validate_break_window: !self.no_break_validation,
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("department", &self.department)?;
        validation::validate_positive_duration("lecture_duration", self.lecture_duration)?;
        validation::validate_non_negative_duration("break_duration", self.break_duration)?;
        if let Some(path) = &self.output {
            validation::validate_path("output", path)?;
        }
        Ok(())
    }
}
