use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Weekday names accepted in a doctor's schedule. Serialized exactly as the
/// English day name; matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const NAMES: [&'static str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Monday" => Some(Self::Monday),
            "Tuesday" => Some(Self::Tuesday),
            "Wednesday" => Some(Self::Wednesday),
            "Thursday" => Some(Self::Thursday),
            "Friday" => Some(Self::Friday),
            "Saturday" => Some(Self::Saturday),
            "Sunday" => Some(Self::Sunday),
            _ => None,
        }
    }
}

/// One entry of a doctor's weekly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: Weekday,
    pub time_range: String,
}

/// A doctor record as stored in the `doctors` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub image: Option<String>,
    pub schedule: Option<Vec<ScheduleEntry>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Canonical payload produced by the normalizer. Supplies every mutable
/// field on both create and full-replace update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorPayload {
    pub name: String,
    pub category: String,
    pub image: Option<String>,
    pub schedule: Option<Vec<ScheduleEntry>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn weekday_matching_is_case_sensitive() {
        assert_eq!(Weekday::from_name("Monday"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_name("monday"), None);
        assert_eq!(Weekday::from_name("MONDAY"), None);
    }

    #[test]
    fn schedule_entry_serializes_day_as_name() {
        let entry = ScheduleEntry {
            day: Weekday::Friday,
            time_range: "09:00 - 17:00".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({ "day": "Friday", "time_range": "09:00 - 17:00" })
        );
    }
}
