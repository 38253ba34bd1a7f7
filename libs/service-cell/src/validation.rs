use serde_json::Value;

use shared_models::error::AppError;
use shared_models::validation::{optional_string, required_string, FieldErrors};

use crate::models::ServicePayload;

const NAME_MAX: usize = 255;
const CATEGORY_MAX: usize = 255;
const DESCRIPTION_MAX: usize = 1000;
const IMAGE_MAX: usize = 2048;
const GALLERY_URL_MAX: usize = 2048;

/// Validates a raw service payload and reshapes it into the canonical form.
/// An absent, null, or empty `gallery` canonicalizes to the empty sequence;
/// a present entry that is not a usable URL string reports an error keyed by
/// its index (`gallery.0`) instead of being dropped silently.
pub fn normalize_service(payload: &Value) -> Result<ServicePayload, AppError> {
    let mut errors = FieldErrors::new();

    let name = required_string(payload.get("name"), "name", NAME_MAX, &mut errors);
    let category = required_string(payload.get("category"), "category", CATEGORY_MAX, &mut errors);
    let description = required_string(
        payload.get("description"),
        "description",
        DESCRIPTION_MAX,
        &mut errors,
    );
    let image = optional_string(payload.get("image"), "image", IMAGE_MAX, &mut errors);
    let gallery = normalize_gallery(payload.get("gallery"), &mut errors);

    match (name, category, description) {
        (Some(name), Some(category), Some(description)) if errors.is_empty() => Ok(ServicePayload {
            name,
            category,
            description,
            image,
            gallery,
        }),
        _ => Err(errors.into_error()),
    }
}

fn normalize_gallery(value: Option<&Value>, errors: &mut FieldErrors) -> Vec<String> {
    let items = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.add("gallery", "The gallery field must be an array");
            return Vec::new();
        }
    };

    let mut gallery = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(url) if url.is_empty() => {
                errors.add(format!("gallery.{index}"), "The gallery entry must not be empty");
            }
            Value::String(url) => {
                if url.chars().count() > GALLERY_URL_MAX {
                    errors.add(
                        format!("gallery.{index}"),
                        format!("The gallery entry must not exceed {GALLERY_URL_MAX} characters"),
                    );
                } else {
                    gallery.push(url.clone());
                }
            }
            _ => {
                errors.add(format!("gallery.{index}"), "The gallery entry must be a string");
            }
        }
    }

    gallery
}
