use crate::utils::error::{Result, TimetableError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Wall-clock time on a single day, stored as minutes since midnight.
///
/// Displays and serializes as zero-padded `HH:MM`. The lenient parser does not
/// enforce an upper bound, so values past `23:59` are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u32);

/// How `"HH:MM"` strings are turned into [`TimeOfDay`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePolicy {
    /// A string without `:` is read as midnight.
    #[default]
    Lenient,
    /// Only `H:MM`/`HH:MM` with hour 0-23 and minute 0-59 is accepted.
    Strict,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Adds a number of minutes. Returns `None` on overflow.
    pub fn plus(self, minutes: u32) -> Option<Self> {
        self.0.checked_add(minutes).map(Self)
    }

    /// Parses `value` for the given `field`, following `policy`.
    pub fn parse(field: &str, value: &str, policy: TimePolicy) -> Result<Self> {
        let malformed = || TimetableError::MalformedTimeInput {
            field: field.to_string(),
            value: value.to_string(),
        };

        let Some((hours, rest)) = value.split_once(':') else {
            return match policy {
                TimePolicy::Lenient => {
                    tracing::debug!("{} '{}' has no ':', reading it as 00:00", field, value);
                    Ok(Self::MIDNIGHT)
                }
                TimePolicy::Strict => Err(malformed()),
            };
        };

        // "HH:MM:SS" keeps only hour and minute, like the form inputs did.
        let minutes = rest.split(':').next().unwrap_or_default();

        let hours = parse_component(hours, policy).ok_or_else(malformed)?;
        let minutes = parse_component(minutes, policy).ok_or_else(malformed)?;

        if policy == TimePolicy::Strict && (hours > 23 || minutes > 59) {
            return Err(malformed());
        }

        Self::from_parts(hours, minutes).ok_or_else(malformed)
    }

    /// Reads back what `Display` writes, including hours past 23.
    fn parse_stored(value: &str) -> Option<Self> {
        let (hours, minutes) = value.split_once(':')?;
        let hours = hours.trim().parse().ok()?;
        let minutes = minutes.trim().parse().ok()?;
        Self::from_parts(hours, minutes)
    }

    fn from_parts(hours: u32, minutes: u32) -> Option<Self> {
        hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .map(Self)
    }
}

/// An empty hour or minute counts as zero under the lenient policy (`"9:"` is 09:00).
fn parse_component(part: &str, policy: TimePolicy) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() && policy == TimePolicy::Lenient {
        return Some(0);
    }
    part.parse().ok()
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TimeOfDay::parse_stored(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("malformed time '{}' (expected H:MM)", raw)))
    }
}

/// The single break of a department's day, as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakSpec {
    pub name: String,
    #[serde(alias = "start_time")]
    pub start_time: String,
    #[serde(rename = "duration", alias = "durationMinutes")]
    pub duration_minutes: i64,
}

impl BreakSpec {
    pub fn new(name: impl Into<String>, start_time: impl Into<String>, duration_minutes: i64) -> Self {
        Self {
            name: name.into(),
            start_time: start_time.into(),
            duration_minutes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Slot {
    Lecture {
        start: TimeOfDay,
        end: TimeOfDay,
    },
    Break {
        start: TimeOfDay,
        end: TimeOfDay,
        name: String,
    },
}

impl Slot {
    pub fn start(&self) -> TimeOfDay {
        match self {
            Slot::Lecture { start, .. } | Slot::Break { start, .. } => *start,
        }
    }

    pub fn end(&self) -> TimeOfDay {
        match self {
            Slot::Lecture { end, .. } | Slot::Break { end, .. } => *end,
        }
    }

    /// Zero when `end` lies before `start`.
    pub fn duration_minutes(&self) -> u32 {
        self.end().minutes().saturating_sub(self.start().minutes())
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Slot::Break { .. })
    }

    /// `Lecture`, or the break's name.
    pub fn label(&self) -> &str {
        match self {
            Slot::Lecture { .. } => "Lecture",
            Slot::Break { name, .. } => name,
        }
    }
}

pub type DaySchedule = Vec<Slot>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        };
        f.write_str(name)
    }
}

/// Monday to Friday, each mapped to the same day schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekSchedule {
    days: BTreeMap<Weekday, DaySchedule>,
}

impl WeekSchedule {
    /// Applies one day schedule to every weekday.
    pub fn uniform(day: DaySchedule) -> Self {
        let days = Weekday::ALL
            .iter()
            .map(|weekday| (*weekday, day.clone()))
            .collect();
        Self { days }
    }

    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.days.get(&weekday)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Weekday, &DaySchedule)> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let t = TimeOfDay::parse("start_time", "09:15", TimePolicy::Strict).unwrap();
        assert_eq!(t.minutes(), 555);
        assert_eq!(t.to_string(), "09:15");
        assert_eq!(TimeOfDay::from_minutes(5).to_string(), "00:05");
    }

    #[test]
    fn test_lenient_missing_colon_is_midnight() {
        let t = TimeOfDay::parse("start_time", "0915", TimePolicy::Lenient).unwrap();
        assert_eq!(t, TimeOfDay::MIDNIGHT);
        let t = TimeOfDay::parse("start_time", "", TimePolicy::Lenient).unwrap();
        assert_eq!(t, TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn test_strict_rejects_missing_colon() {
        let err = TimeOfDay::parse("start_time", "0915", TimePolicy::Strict).unwrap_err();
        assert!(matches!(err, TimetableError::MalformedTimeInput { .. }));
    }

    #[test]
    fn test_non_numeric_components_rejected_by_both_policies() {
        for policy in [TimePolicy::Lenient, TimePolicy::Strict] {
            assert!(TimeOfDay::parse("end_time", "ab:cd", policy).is_err());
            assert!(TimeOfDay::parse("end_time", "9:x5", policy).is_err());
        }
    }

    #[test]
    fn test_empty_component_follows_policy() {
        let t = TimeOfDay::parse("end_time", "9:", TimePolicy::Lenient).unwrap();
        assert_eq!(t.minutes(), 540);
        let t = TimeOfDay::parse("end_time", ":30", TimePolicy::Lenient).unwrap();
        assert_eq!(t.to_string(), "00:30");
        assert!(TimeOfDay::parse("end_time", "9:", TimePolicy::Strict).is_err());
    }

    #[test]
    fn test_strict_range_and_lenient_overflow() {
        assert!(TimeOfDay::parse("end_time", "24:00", TimePolicy::Strict).is_err());
        assert!(TimeOfDay::parse("end_time", "10:75", TimePolicy::Strict).is_err());
        let late = TimeOfDay::parse("end_time", "25:00", TimePolicy::Lenient).unwrap();
        assert_eq!(late.to_string(), "25:00");
    }

    #[test]
    fn test_seconds_are_ignored() {
        let t = TimeOfDay::parse("start_time", "12:30:45", TimePolicy::Strict).unwrap();
        assert_eq!(t.to_string(), "12:30");
    }

    #[test]
    fn test_slot_serializes_with_type_tag() {
        let slot = Slot::Break {
            start: TimeOfDay::from_minutes(735),
            end: TimeOfDay::from_minutes(800),
            name: "Lunch".to_string(),
        };
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "break", "start": "12:15", "end": "13:20", "name": "Lunch"})
        );
        assert_eq!(slot.duration_minutes(), 65);
        assert_eq!(slot.label(), "Lunch");
    }

    #[test]
    fn test_week_schedule_keys_in_weekday_order() {
        let week = WeekSchedule::uniform(vec![]);
        let days: Vec<String> = week.iter().map(|(d, _)| d.to_string()).collect();
        assert_eq!(days, ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]);
    }

    #[test]
    fn test_times_past_midnight_deserialize() {
        let late: TimeOfDay = serde_json::from_str("\"24:30\"").unwrap();
        assert_eq!(late.minutes(), 1470);
        assert!(serde_json::from_str::<TimeOfDay>("\"0915\"").is_err());
        assert!(serde_json::from_str::<TimeOfDay>("\"ab:cd\"").is_err());
    }

    #[test]
    fn test_inverted_slot_has_zero_duration() {
        let slot: Slot =
            serde_json::from_str(r#"{"type":"lecture","start":"10:00","end":"09:00"}"#).unwrap();
        assert_eq!(slot.duration_minutes(), 0);
    }
}
