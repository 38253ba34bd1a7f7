use axum::{Extension, Json};
use serde_json::{json, Value};
use tracing::debug;

use shared_models::auth::User;

/// Identity of the authenticated caller, as established by the JWT
/// middleware.
#[axum::debug_handler]
pub async fn get_current_user(Extension(user): Extension<User>) -> Json<Value> {
    debug!("Returning identity for user: {}", user.id);

    Json(json!({
        "id": user.id,
        "email": user.email,
        "role": user.role,
    }))
}
