use crate::core::partitioner::PartitionOptions;
use crate::domain::department::DepartmentTimings;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Anything that can describe which departments to generate slots for.
pub trait TimingsProvider {
    fn departments(&self) -> Result<Vec<DepartmentTimings>>;
    fn partition_options(&self) -> PartitionOptions;
    fn output_format(&self) -> OutputFormat;
}
