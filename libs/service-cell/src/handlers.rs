use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::envelope;
use shared_models::error::AppError;

use crate::services::catalog::ServiceCatalog;

#[axum::debug_handler]
pub async fn list_services(State(state): State<Arc<AppConfig>>) -> Result<Json<Value>, AppError> {
    let catalog = ServiceCatalog::new(&state);

    let services = catalog.list().await?;

    Ok(envelope::data(services))
}

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<AppConfig>>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let catalog = ServiceCatalog::new(&state);

    let service = catalog.create(&payload).await?;

    Ok(envelope::created("Service created successfully", service))
}

#[axum::debug_handler]
pub async fn get_service(
    State(state): State<Arc<AppConfig>>,
    Path(service_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let catalog = ServiceCatalog::new(&state);

    let service = catalog.get(service_id).await?;

    Ok(envelope::data(service))
}

#[axum::debug_handler]
pub async fn update_service(
    State(state): State<Arc<AppConfig>>,
    Path(service_id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let catalog = ServiceCatalog::new(&state);

    let service = catalog.update(service_id, &payload).await?;

    Ok(envelope::with_message("Service updated successfully", service))
}

#[axum::debug_handler]
pub async fn delete_service(
    State(state): State<Arc<AppConfig>>,
    Path(service_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let catalog = ServiceCatalog::new(&state);

    catalog.delete(service_id).await?;

    Ok(envelope::message("Service deleted successfully"))
}

/// The by-category listing echoes the requested category in the envelope.
#[axum::debug_handler]
pub async fn get_services_by_category(
    State(state): State<Arc<AppConfig>>,
    Path(category): Path<String>,
) -> Result<Json<Value>, AppError> {
    let catalog = ServiceCatalog::new(&state);

    let services = catalog.list_by_category(&category).await?;

    Ok(Json(json!({
        "success": true,
        "data": services,
        "category": category,
    })))
}

#[axum::debug_handler]
pub async fn get_service_categories(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let catalog = ServiceCatalog::new(&state);

    let categories = catalog.list_categories().await?;

    Ok(envelope::data(categories))
}
