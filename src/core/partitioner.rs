//! Splits a working day into fixed-length lectures around a single break.

use crate::domain::model::{BreakSpec, DaySchedule, Slot, TimeOfDay, TimePolicy, WeekSchedule};
use crate::utils::error::{Result, TimetableError};
use crate::utils::validation::{validate_non_negative_duration, validate_positive_duration};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionOptions {
    pub time_policy: TimePolicy,
    /// Reject breaks that start before the day starts or end after it ends.
    pub validate_break_window: bool,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            time_policy: TimePolicy::Lenient,
            validate_break_window: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeSlotPartitioner {
    options: PartitionOptions,
}

impl TimeSlotPartitioner {
    pub fn new(options: PartitionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> PartitionOptions {
        self.options
    }

    /// Builds the week schedule for one department's timings.
    ///
    /// Lectures are packed from `day_start` up to the break and from the end of
    /// the break up to `day_end`. A leftover shorter than one lecture before
    /// either boundary is dropped. Every weekday gets the same slots.
    pub fn partition(
        &self,
        day_start: &str,
        day_end: &str,
        lecture_duration_minutes: i64,
        break_spec: &BreakSpec,
    ) -> Result<WeekSchedule> {
        validate_positive_duration("lecture_duration", lecture_duration_minutes)?;
        validate_non_negative_duration("break.duration", break_spec.duration_minutes)?;

        let policy = self.options.time_policy;
        let start = TimeOfDay::parse("start_time", day_start, policy)?;
        let end = TimeOfDay::parse("end_time", day_end, policy)?;
        let break_start = TimeOfDay::parse("break.start_time", &break_spec.start_time, policy)?;

        let lecture = to_minutes("lecture_duration", lecture_duration_minutes)?;
        let break_len = to_minutes("break.duration", break_spec.duration_minutes)?;
        let break_end = break_start
            .plus(break_len)
            .ok_or_else(|| TimetableError::InvalidDuration {
                field: "break.duration".to_string(),
                value: break_spec.duration_minutes,
            })?;

        if self.options.validate_break_window && (break_start < start || break_end > end) {
            return Err(TimetableError::InconsistentBreakWindow {
                day_start: start.to_string(),
                day_end: end.to_string(),
                break_start: break_start.to_string(),
                break_end: break_end.to_string(),
            });
        }

        let mut day = DaySchedule::new();
        pack_lectures(&mut day, start, break_start, lecture);
        day.push(Slot::Break {
            start: break_start,
            end: break_end,
            name: break_spec.name.clone(),
        });
        pack_lectures(&mut day, break_end, end, lecture);

        tracing::debug!(
            "Generated {} lecture slots and 1 break ({} - {}, {} min lectures)",
            day.len() - 1,
            start,
            end,
            lecture
        );

        Ok(WeekSchedule::uniform(day))
    }
}

/// Entry point with the default options: lenient times, validated break window.
pub fn generate_time_slots(
    day_start: &str,
    day_end: &str,
    lecture_duration_minutes: i64,
    break_spec: &BreakSpec,
) -> Result<WeekSchedule> {
    TimeSlotPartitioner::default().partition(day_start, day_end, lecture_duration_minutes, break_spec)
}

fn pack_lectures(day: &mut DaySchedule, from: TimeOfDay, until: TimeOfDay, lecture: u32) {
    let mut current = from;
    while let Some(next) = current.plus(lecture).filter(|next| *next <= until) {
        day.push(Slot::Lecture {
            start: current,
            end: next,
        });
        current = next;
    }

    if current < until {
        tracing::debug!(
            "Dropping {} unused minutes before {}",
            until.minutes() - current.minutes(),
            until
        );
    }
}

fn to_minutes(field: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| TimetableError::InvalidDuration {
        field: field.to_string(),
        value,
    })
}
