use std::sync::Arc;

use axum::{routing::get, Router};

use auth_cell::router::user_routes;
use doctor_cell::router::doctor_routes;
use service_cell::router::{category_routes, service_routes};
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic catalog API is running!" }))
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/services", service_routes(state.clone()))
        .merge(category_routes(state.clone()))
        .merge(user_routes(state))
}
