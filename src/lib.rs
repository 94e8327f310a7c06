pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalOutput, toml_config::TomlConfig, CliConfig};

pub use self::core::{
    engine::TimetableEngine,
    partitioner::{generate_time_slots, PartitionOptions, TimeSlotPartitioner},
};
pub use domain::department::{Department, DepartmentRegistry, DepartmentTimings};
pub use domain::model::{BreakSpec, Slot, TimeOfDay, TimePolicy, WeekSchedule, Weekday};
pub use domain::ports::{OutputFormat, TimingsProvider};
pub use utils::error::{Result, TimetableError};
