use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn service_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::list_services))
        .route("/", post(handlers::create_service))
        .route("/category/{category}", get(handlers::get_services_by_category))
        .route("/{service_id}", get(handlers::get_service))
        .route("/{service_id}", put(handlers::update_service))
        .route("/{service_id}", delete(handlers::delete_service))
        .with_state(state)
}

/// `/service-categories` lives at the API root, not under `/services`.
pub fn category_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/service-categories", get(handlers::get_service_categories))
        .with_state(state)
}
