use crate::domain::department::{Department, DepartmentRegistry};
use crate::domain::model::Weekday;
use std::fmt;

/// Plain-text summary of one department's timings and its daily slot strip.
///
/// Only Monday is printed since every weekday carries the same slots.
pub struct DepartmentReport<'a>(pub &'a Department);

impl fmt::Display for DepartmentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timings = &self.0.timings;

        writeln!(f, "{}", timings.name)?;
        writeln!(
            f,
            "Timings: {} – {} | Lecture Duration: {} mins",
            timings.start_time, timings.end_time, timings.lecture_duration
        )?;
        writeln!(
            f,
            "Break: {} at {} ({} mins)",
            timings.break_info.name, timings.break_info.start_time, timings.break_info.duration_minutes
        )?;

        if let Some(day) = self.0.time_slots.day(Weekday::Monday) {
            for slot in day {
                writeln!(f, "{}-{} {}", slot.start(), slot.end(), slot.label())?;
            }
        }

        Ok(())
    }
}

pub fn render_department(department: &Department) -> String {
    DepartmentReport(department).to_string()
}

pub fn render_registry(registry: &DepartmentRegistry) -> String {
    registry
        .iter()
        .map(render_department)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::partitioner::TimeSlotPartitioner;
    use crate::domain::department::DepartmentTimings;
    use crate::domain::model::BreakSpec;

    fn registry() -> DepartmentRegistry {
        let mut registry = DepartmentRegistry::new();
        registry
            .set_timings(
                &TimeSlotPartitioner::default(),
                DepartmentTimings {
                    name: "CSE".to_string(),
                    start_time: "09:15".to_string(),
                    end_time: "17:20".to_string(),
                    lecture_duration: 60,
                    break_info: BreakSpec::new("Lunch", "12:15", 65),
                },
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_render_department() {
        let registry = registry();
        let text = render_department(registry.get("CSE").unwrap());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "CSE");
        assert_eq!(lines[1], "Timings: 09:15 – 17:20 | Lecture Duration: 60 mins");
        assert_eq!(lines[2], "Break: Lunch at 12:15 (65 mins)");
        assert_eq!(lines[3], "09:15-10:15 Lecture");
        assert_eq!(lines[6], "12:15-13:20 Lunch");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_render_empty_registry() {
        assert_eq!(render_registry(&DepartmentRegistry::new()), "");
    }
}
