use std::collections::BTreeMap;
use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Field name to human-readable messages, as produced by the payload
/// normalizers. A BTreeMap keeps the report order stable for clients.
pub type FieldErrorMap = BTreeMap<String, Vec<String>>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Validation failed")]
    Validation(FieldErrorMap),

    #[error("{message}: {detail}")]
    Database { message: String, detail: String },

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    /// Wraps a persistence fault together with the operation it interrupted.
    pub fn database(message: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self::Database {
            message: message.into(),
            detail: detail.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);

        let (status, body) = match self {
            AppError::Auth(message) => (
                StatusCode::UNAUTHORIZED,
                json!({ "success": false, "message": message }),
            ),
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "message": message }),
            ),
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "success": false,
                    "message": "Validation failed",
                    "errors": errors,
                }),
            ),
            AppError::Database { message, detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "success": false,
                    "message": message,
                    "error": detail,
                }),
            ),
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "success": false,
                    "message": "Internal server error",
                    "error": message,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
