use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};

/// Uniform success wrapper returned by every read endpoint.
pub fn data<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

/// Success wrapper carrying a human-readable message alongside the payload.
pub fn with_message<T: Serialize>(message: &str, data: T) -> Json<Value> {
    Json(json!({ "success": true, "message": message, "data": data }))
}

/// 201 wrapper for newly created records.
pub fn created<T: Serialize>(message: &str, data: T) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, with_message(message, data))
}

/// Success wrapper with no payload (deletions).
pub fn message(message: &str) -> Json<Value> {
    Json(json!({ "success": true, "message": message }))
}
