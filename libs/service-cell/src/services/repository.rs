use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{Service, ServicePayload};

/// Raw `services` row. `gallery` arrives as whatever the text column holds
/// and is decoded before the record leaves this module.
#[derive(Debug, Deserialize)]
struct ServiceRow {
    id: Uuid,
    name: String,
    category: String,
    description: String,
    image: Option<String>,
    gallery: Option<Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ServiceRow> for Service {
    fn from(row: ServiceRow) -> Self {
        Service {
            id: row.id,
            name: row.name,
            category: row.category,
            description: row.description,
            image: row.image,
            gallery: decode_gallery(row.gallery),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// `gallery` lives in a JSON-encoded text column. The decode tolerates rows
/// where the column already holds a decoded array, and collapses anything
/// unreadable to the empty sequence so the in-memory shape stays a sequence.
fn decode_gallery(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::String(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(url) => Some(url),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn encode_gallery(gallery: &[String]) -> Result<String> {
    Ok(serde_json::to_string(gallery)?)
}

/// PostgREST-backed access to the `services` table. Owns the gallery
/// encode-on-write/decode-on-read pair.
pub struct ServiceRepository {
    supabase: SupabaseClient,
}

impl ServiceRepository {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    fn returning_representation() -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Prefer",
            reqwest::header::HeaderValue::from_static("return=representation"),
        );
        headers
    }

    fn rows_to_services(rows: Vec<Value>) -> Result<Vec<Service>> {
        rows.into_iter()
            .map(|row| {
                let row: ServiceRow = serde_json::from_value(row)?;
                Ok(row.into())
            })
            .collect()
    }

    pub async fn list(&self) -> Result<Vec<Service>> {
        let rows: Vec<Value> = self
            .supabase
            .request(Method::GET, "/rest/v1/services", None)
            .await?;

        Self::rows_to_services(rows)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Service>> {
        let path = format!("/rest/v1/services?id=eq.{id}");
        let rows: Vec<Value> = self.supabase.request(Method::GET, &path, None).await?;

        match rows.into_iter().next() {
            Some(row) => {
                let row: ServiceRow = serde_json::from_value(row)?;
                Ok(Some(row.into()))
            }
            None => Ok(None),
        }
    }

    pub async fn insert(&self, payload: &ServicePayload) -> Result<Service> {
        let now = Utc::now().to_rfc3339();
        let row = json!({
            "name": payload.name,
            "category": payload.category,
            "description": payload.description,
            "image": payload.image,
            "gallery": encode_gallery(&payload.gallery)?,
            "created_at": now,
            "updated_at": now,
        });

        let rows: Vec<Value> = self
            .supabase
            .request_with_headers(
                Method::POST,
                "/rest/v1/services",
                Some(row),
                Some(Self::returning_representation()),
            )
            .await?;

        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Insert returned no representation"))?;
        let row: ServiceRow = serde_json::from_value(row)?;
        Ok(row.into())
    }

    /// Full replace of the mutable columns; `image` writes an explicit null
    /// when absent and `gallery` is re-encoded on every write.
    pub async fn replace(&self, id: Uuid, payload: &ServicePayload) -> Result<Service> {
        let row = json!({
            "name": payload.name,
            "category": payload.category,
            "description": payload.description,
            "image": payload.image,
            "gallery": encode_gallery(&payload.gallery)?,
            "updated_at": Utc::now().to_rfc3339(),
        });

        let path = format!("/rest/v1/services?id=eq.{id}");
        let rows: Vec<Value> = self
            .supabase
            .request_with_headers(
                Method::PATCH,
                &path,
                Some(row),
                Some(Self::returning_representation()),
            )
            .await?;

        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Update returned no representation"))?;
        let row: ServiceRow = serde_json::from_value(row)?;
        Ok(row.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let path = format!("/rest/v1/services?id=eq.{id}");
        let _: Vec<Value> = self
            .supabase
            .request_with_headers(
                Method::DELETE,
                &path,
                None,
                Some(Self::returning_representation()),
            )
            .await?;

        Ok(())
    }

    pub async fn find_by_category(&self, category: &str) -> Result<Vec<Service>> {
        let path = format!("/rest/v1/services?category=eq.{category}");
        let rows: Vec<Value> = self.supabase.request(Method::GET, &path, None).await?;

        Self::rows_to_services(rows)
    }

    /// Raw category column values; de-duplication happens in the catalog.
    pub async fn categories(&self) -> Result<Vec<String>> {
        let rows: Vec<Value> = self
            .supabase
            .request(Method::GET, "/rest/v1/services?select=category", None)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| row.get("category").and_then(Value::as_str).map(String::from))
            .collect())
    }
}
