use anyhow::{anyhow, Result};
use chrono::Utc;
use reqwest::Method;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{Doctor, DoctorPayload};

/// PostgREST-backed access to the `doctors` table. Row shape concerns stay
/// behind this boundary; callers only see the `Doctor` record type.
pub struct DoctorRepository {
    supabase: SupabaseClient,
}

impl DoctorRepository {
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

    pub async fn list(&self) -> Result<Vec<Doctor>> {
        let rows: Vec<Value> = self
            .supabase
            .request(Method::GET, "/rest/v1/doctors", None)
            .await?;

        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(Into::into))
            .collect()
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Doctor>> {
        let path = format!("/rest/v1/doctors?id=eq.{id}");
        let rows: Vec<Value> = self.supabase.request(Method::GET, &path, None).await?;

        match rows.into_iter().next() {
            Some(row) => Ok(Some(serde_json::from_value(row)?)),
            None => Ok(None),
        }
    }

    pub async fn insert(&self, payload: &DoctorPayload) -> Result<Doctor> {
        let now = Utc::now().to_rfc3339();
        let row = json!({
            "name": payload.name,
            "category": payload.category,
            "image": payload.image,
            "schedule": payload.schedule,
            "created_at": now,
            "updated_at": now,
        });

        let rows: Vec<Value> = self
            .supabase
            .request_with_headers(
                Method::POST,
                "/rest/v1/doctors",
                Some(row),
                Some(Self::returning_representation()),
            )
            .await?;

        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Insert returned no representation"))?;
        Ok(serde_json::from_value(row)?)
    }

    /// Full replace of the mutable columns. `image` and `schedule` are
    /// written even when `None` so a replace clears previous values.
    pub async fn replace(&self, id: Uuid, payload: &DoctorPayload) -> Result<Doctor> {
        let row = json!({
            "name": payload.name,
            "category": payload.category,
            "image": payload.image,
            "schedule": payload.schedule,
            "updated_at": Utc::now().to_rfc3339(),
        });

        let path = format!("/rest/v1/doctors?id=eq.{id}");
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
        Ok(serde_json::from_value(row)?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let path = format!("/rest/v1/doctors?id=eq.{id}");
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
}
