pub mod engine;
pub mod partitioner;
pub mod report;

pub use crate::domain::department::{Department, DepartmentRegistry, DepartmentTimings};
pub use crate::domain::model::{BreakSpec, DaySchedule, Slot, TimeOfDay, WeekSchedule, Weekday};
pub use crate::domain::ports::{OutputFormat, TimingsProvider};
pub use crate::utils::error::Result;
