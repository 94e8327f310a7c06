use crate::core::partitioner::TimeSlotPartitioner;
use crate::domain::model::{BreakSpec, WeekSchedule};
use crate::utils::error::{Result, TimetableError};
use crate::utils::validation::validate_non_empty_string;
use serde::{Deserialize, Serialize};

/// A department's daily timing profile as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentTimings {
    pub name: String,
    #[serde(alias = "start_time")]
    pub start_time: String,
    #[serde(alias = "end_time")]
    pub end_time: String,
    #[serde(alias = "lecture_duration")]
    pub lecture_duration: i64,
    #[serde(rename = "breakInfo", alias = "break")]
    pub break_info: BreakSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(flatten)]
    pub timings: DepartmentTimings,
    pub time_slots: WeekSchedule,
}

impl Department {
    pub fn name(&self) -> &str {
        &self.timings.name
    }
}

/// Departments in the order their timings were first set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentRegistry {
    departments: Vec<Department>,
}

impl DepartmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates slots for `timings` and stores them under the department name.
    ///
    /// An existing department keeps its position and has its timings and slots
    /// replaced. Nothing changes when generation fails.
    pub fn set_timings(
        &mut self,
        partitioner: &TimeSlotPartitioner,
        mut timings: DepartmentTimings,
    ) -> Result<&Department> {
        validate_non_empty_string("department.name", &timings.name)?;
        timings.name = timings.name.trim().to_string();

        let time_slots = partitioner.partition(
            &timings.start_time,
            &timings.end_time,
            timings.lecture_duration,
            &timings.break_info,
        )?;

        let department = Department {
            timings,
            time_slots,
        };

        let index = match self.position(department.name()) {
            Some(index) => {
                tracing::info!("Updated timings for {}", department.name());
                self.departments[index] = department;
                index
            }
            None => {
                tracing::info!("Set timings for {}", department.name());
                self.departments.push(department);
                self.departments.len() - 1
            }
        };

        Ok(&self.departments[index])
    }

    pub fn get(&self, name: &str) -> Option<&Department> {
        self.position(name).map(|index| &self.departments[index])
    }

    /// Like [`get`](Self::get) but reports a missing department as an error.
    pub fn require(&self, name: &str) -> Result<&Department> {
        self.get(name).ok_or_else(|| TimetableError::DepartmentNotFound {
            name: name.to_string(),
        })
    }

    pub fn remove(&mut self, name: &str) -> Option<Department> {
        self.position(name).map(|index| self.departments.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Department> {
        self.departments.iter()
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.departments.iter().position(|d| d.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Weekday;

    fn timings(name: &str, lecture_duration: i64) -> DepartmentTimings {
        DepartmentTimings {
            name: name.to_string(),
            start_time: "09:15".to_string(),
            end_time: "17:20".to_string(),
            lecture_duration,
            break_info: BreakSpec::new("Lunch", "12:15", 65),
        }
    }

    #[test]
    fn test_set_timings_appends_then_replaces() {
        let partitioner = TimeSlotPartitioner::default();
        let mut registry = DepartmentRegistry::new();

        registry.set_timings(&partitioner, timings("CSE", 60)).unwrap();
        registry.set_timings(&partitioner, timings("IT", 60)).unwrap();
        let updated = registry.set_timings(&partitioner, timings(" CSE ", 50)).unwrap();
        assert_eq!(updated.timings.lecture_duration, 50);

        let names: Vec<&str> = registry.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["CSE", "IT"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_failed_set_leaves_registry_unchanged() {
        let partitioner = TimeSlotPartitioner::default();
        let mut registry = DepartmentRegistry::new();
        registry.set_timings(&partitioner, timings("CSE", 60)).unwrap();
        let before = registry.get("CSE").unwrap().clone();

        assert!(registry.set_timings(&partitioner, timings("CSE", 0)).is_err());
        assert_eq!(registry.get("CSE").unwrap(), &before);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut registry = DepartmentRegistry::new();
        let result = registry.set_timings(&TimeSlotPartitioner::default(), timings("  ", 60));
        assert!(result.is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_require_and_remove() {
        let partitioner = TimeSlotPartitioner::default();
        let mut registry = DepartmentRegistry::new();
        registry.set_timings(&partitioner, timings("ENTC", 60)).unwrap();

        assert!(matches!(
            registry.require("MECH"),
            Err(TimetableError::DepartmentNotFound { .. })
        ));
        let removed = registry.remove("ENTC").unwrap();
        assert_eq!(removed.time_slots.day(Weekday::Monday).unwrap().len(), 8);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_department_json_uses_form_field_names() {
        let partitioner = TimeSlotPartitioner::default();
        let mut registry = DepartmentRegistry::new();
        let department = registry.set_timings(&partitioner, timings("CSE", 60)).unwrap();

        let json = serde_json::to_value(department).unwrap();
        assert_eq!(json["startTime"], "09:15");
        assert_eq!(json["lectureDuration"], 60);
        assert_eq!(json["breakInfo"]["duration"], 65);
        assert_eq!(json["timeSlots"]["Monday"][3]["type"], "break");
        assert_eq!(json["timeSlots"].as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_registry_round_trips_through_json() {
        let partitioner = TimeSlotPartitioner::default();
        let mut registry = DepartmentRegistry::new();
        registry
            .set_timings(
                &partitioner,
                DepartmentTimings {
                    name: "Evening".to_string(),
                    start_time: "20:00".to_string(),
                    end_time: "26:00".to_string(),
                    lecture_duration: 60,
                    break_info: BreakSpec::new("Tea", "22:00", 30),
                },
            )
            .unwrap();

        let json = serde_json::to_string(&registry).unwrap();
        let restored: DepartmentRegistry = serde_json::from_str(&json).unwrap();

        let before: Vec<&Department> = registry.iter().collect();
        let after: Vec<&Department> = restored.iter().collect();
        assert_eq!(before, after);
        let last = after[0].time_slots.day(Weekday::Monday).unwrap().last().unwrap();
        assert_eq!(last.end().to_string(), "25:30");
    }
}
