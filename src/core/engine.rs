use crate::core::partitioner::TimeSlotPartitioner;
use crate::core::report::render_registry;
use crate::domain::department::{Department, DepartmentRegistry};
use crate::domain::ports::{OutputFormat, TimingsProvider};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableOutput<'a> {
    pub departments: Vec<&'a Department>,
    pub generated_at: DateTime<Utc>,
}

pub struct TimetableEngine<P: TimingsProvider> {
    provider: P,
}

impl<P: TimingsProvider> TimetableEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generates slots for every department the provider lists.
    ///
    /// Stops at the first department whose timings are rejected.
    pub fn run(&self) -> Result<DepartmentRegistry> {
        let partitioner = TimeSlotPartitioner::new(self.provider.partition_options());
        let mut registry = DepartmentRegistry::new();

        let timings = self.provider.departments()?;
        tracing::info!("Generating time slots for {} department(s)", timings.len());

        for entry in timings {
            let name = entry.name.clone();
            if let Err(e) = registry.set_timings(&partitioner, entry) {
                tracing::error!("Department {} rejected: {}", name, e);
                return Err(e);
            }
        }

        Ok(registry)
    }

    /// Runs and renders the result in the provider's output format.
    pub fn run_to_string(&self) -> Result<String> {
        let registry = self.run()?;
        render(&registry, self.provider.output_format())
    }
}

pub fn render(registry: &DepartmentRegistry, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let output = TimetableOutput {
                departments: registry.iter().collect(),
                generated_at: Utc::now(),
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Text => Ok(render_registry(registry)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::partitioner::PartitionOptions;
    use crate::domain::department::DepartmentTimings;
    use crate::domain::model::BreakSpec;
    use crate::utils::error::TimetableError;

    struct FixedProvider {
        departments: Vec<DepartmentTimings>,
        format: OutputFormat,
    }

    impl TimingsProvider for FixedProvider {
        fn departments(&self) -> Result<Vec<DepartmentTimings>> {
            Ok(self.departments.clone())
        }

        fn partition_options(&self) -> PartitionOptions {
            PartitionOptions::default()
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }
    }

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
    fn test_run_builds_registry() {
        let engine = TimetableEngine::new(FixedProvider {
            departments: vec![timings("CSE", 60), timings("IT", 55)],
            format: OutputFormat::Json,
        });
        let registry = engine.run().unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_run_stops_on_invalid_department() {
        let engine = TimetableEngine::new(FixedProvider {
            departments: vec![timings("CSE", 60), timings("IT", 0)],
            format: OutputFormat::Json,
        });
        assert!(matches!(
            engine.run(),
            Err(TimetableError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_json_output_shape() {
        let engine = TimetableEngine::new(FixedProvider {
            departments: vec![timings("CSE", 60)],
            format: OutputFormat::Json,
        });
        let json: serde_json::Value = serde_json::from_str(&engine.run_to_string().unwrap()).unwrap();
        assert_eq!(json["departments"][0]["name"], "CSE");
        assert!(json["generatedAt"].is_string());
    }

    #[test]
    fn test_text_output() {
        let engine = TimetableEngine::new(FixedProvider {
            departments: vec![timings("CSE", 60)],
            format: OutputFormat::Text,
        });
        let text = engine.run_to_string().unwrap();
        assert!(text.starts_with("CSE\nTimings: 09:15 – 17:20"));
    }
}
