use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::envelope;
use shared_models::error::AppError;

use crate::services::doctor::DoctorService;

#[axum::debug_handler]
pub async fn list_doctors(State(state): State<Arc<AppConfig>>) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state);

    let doctors = service.list().await?;

    Ok(envelope::data(doctors))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<AppConfig>>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = DoctorService::new(&state);

    let doctor = service.create(&payload).await?;

    Ok(envelope::created("Doctor created successfully", doctor))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state);

    let doctor = service.get(doctor_id).await?;

    Ok(envelope::data(doctor))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state);

    let doctor = service.update(doctor_id, &payload).await?;

    Ok(envelope::with_message("Doctor updated successfully", doctor))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state);

    service.delete(doctor_id).await?;

    Ok(envelope::message("Doctor deleted successfully"))
}
