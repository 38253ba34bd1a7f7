use serde_json::Value;

use crate::error::{AppError, FieldErrorMap};

/// Accumulates per-field messages while a raw payload is normalized.
/// The report is all-or-nothing: one failing field fails the whole payload.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: FieldErrorMap,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_error(self) -> AppError {
        AppError::Validation(self.errors)
    }
}

/// Required string field: present, a JSON string, non-empty, at most `max`
/// characters. Returns `None` after recording the failure under `key`.
pub fn required_string(
    value: Option<&Value>,
    key: &str,
    max: usize,
    errors: &mut FieldErrors,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => {
            errors.add(key, format!("The {key} field is required"));
            None
        }
        Some(Value::String(text)) if text.is_empty() => {
            errors.add(key, format!("The {key} field is required"));
            None
        }
        Some(Value::String(text)) => {
            if text.chars().count() > max {
                errors.add(key, format!("The {key} field must not exceed {max} characters"));
                None
            } else {
                Some(text.clone())
            }
        }
        Some(_) => {
            errors.add(key, format!("The {key} field must be a string"));
            None
        }
    }
}

/// Optional string field: absent, null, and empty all canonicalize to `None`
/// (an explicit absence marker, never the empty string).
pub fn optional_string(
    value: Option<&Value>,
    key: &str,
    max: usize,
    errors: &mut FieldErrors,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) if text.is_empty() => None,
        Some(Value::String(text)) => {
            if text.chars().count() > max {
                errors.add(key, format!("The {key} field must not exceed {max} characters"));
                None
            } else {
                Some(text.clone())
            }
        }
        Some(_) => {
            errors.add(key, format!("The {key} field must be a string"));
            None
        }
    }
}
