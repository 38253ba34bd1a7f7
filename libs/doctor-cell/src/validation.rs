use serde_json::Value;

use shared_models::error::AppError;
use shared_models::validation::{optional_string, required_string, FieldErrors};

use crate::models::{DoctorPayload, ScheduleEntry, Weekday};

const NAME_MAX: usize = 255;
const CATEGORY_MAX: usize = 255;
const IMAGE_MAX: usize = 2048;
const TIME_RANGE_MAX: usize = 255;

/// Validates a raw doctor payload and reshapes it into the canonical form.
/// Absent and empty `image` values canonicalize to `None`; schedule entries
/// report failures scoped to their index (`schedule.0.day`).
pub fn normalize_doctor(payload: &Value) -> Result<DoctorPayload, AppError> {
    let mut errors = FieldErrors::new();

    let name = required_string(payload.get("name"), "name", NAME_MAX, &mut errors);
    let category = required_string(payload.get("category"), "category", CATEGORY_MAX, &mut errors);
    let image = optional_string(payload.get("image"), "image", IMAGE_MAX, &mut errors);
    let schedule = normalize_schedule(payload.get("schedule"), &mut errors);

    match (name, category) {
        (Some(name), Some(category)) if errors.is_empty() => Ok(DoctorPayload {
            name,
            category,
            image,
            schedule,
        }),
        _ => Err(errors.into_error()),
    }
}

fn normalize_schedule(value: Option<&Value>, errors: &mut FieldErrors) -> Option<Vec<ScheduleEntry>> {
    let entries = match value {
        None | Some(Value::Null) => return None,
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            errors.add("schedule", "The schedule field must be an array");
            return None;
        }
    };

    let mut normalized = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let day = normalize_day(entry.get("day"), index, errors);
        let time_range = required_string(
            entry.get("time_range"),
            &format!("schedule.{index}.time_range"),
            TIME_RANGE_MAX,
            errors,
        );

        if let (Some(day), Some(time_range)) = (day, time_range) {
            normalized.push(ScheduleEntry { day, time_range });
        }
    }

    Some(normalized)
}

fn normalize_day(value: Option<&Value>, index: usize, errors: &mut FieldErrors) -> Option<Weekday> {
    let key = format!("schedule.{index}.day");
    match value {
        None | Some(Value::Null) => {
            errors.add(key, "The day field is required");
            None
        }
        Some(Value::String(name)) => match Weekday::from_name(name) {
            Some(day) => Some(day),
            None => {
                errors.add(
                    key,
                    format!("The day must be one of {}", Weekday::NAMES.join(", ")),
                );
                None
            }
        },
        Some(_) => {
            errors.add(key, "The day must be a string");
            None
        }
    }
}
