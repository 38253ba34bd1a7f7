use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A clinic service as exposed by the API. `gallery` is always materialized
/// as a sequence in memory regardless of how the store encodes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: Option<String>,
    pub gallery: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Canonical payload produced by the normalizer. Supplies every mutable
/// field on both create and full-replace update; an omitted gallery is the
/// empty sequence, never null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicePayload {
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: Option<String>,
    pub gallery: Vec<String>,
}
