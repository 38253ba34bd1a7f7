use std::collections::BTreeSet;

use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::Service;
use crate::services::repository::ServiceRepository;
use crate::validation::normalize_service;

/// Orchestrates the service catalog: CRUD plus the category queries.
pub struct ServiceCatalog {
    repo: ServiceRepository,
}

impl ServiceCatalog {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            repo: ServiceRepository::new(config),
        }
    }

    /// All services, in the store's default order.
    pub async fn list(&self) -> Result<Vec<Service>, AppError> {
        debug!("Fetching all services");

        self.repo
            .list()
            .await
            .map_err(|e| AppError::database("Failed to fetch services", e))
    }

    /// Validates the raw payload and persists a new service.
    pub async fn create(&self, payload: &Value) -> Result<Service, AppError> {
        let record = normalize_service(payload)?;
        debug!("Creating service: {}", record.name);

        let service = self
            .repo
            .insert(&record)
            .await
            .map_err(|e| AppError::database("Failed to create service", e))?;

        info!("Service created with ID: {}", service.id);
        Ok(service)
    }

    pub async fn get(&self, id: Uuid) -> Result<Service, AppError> {
        debug!("Fetching service: {}", id);

        self.repo
            .find(id)
            .await
            .map_err(|e| AppError::database("Failed to fetch service", e))?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    /// Full replace. The record must exist before the payload is validated,
    /// so an unknown id reports NotFound even for invalid payloads.
    pub async fn update(&self, id: Uuid, payload: &Value) -> Result<Service, AppError> {
        self.get(id).await?;

        let record = normalize_service(payload)?;
        debug!("Updating service: {}", id);

        let service = self
            .repo
            .replace(id, &record)
            .await
            .map_err(|e| AppError::database("Failed to update service", e))?;

        info!("Service updated: {}", service.id);
        Ok(service)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.get(id).await?;

        self.repo
            .delete(id)
            .await
            .map_err(|e| AppError::database("Failed to delete service", e))?;

        info!("Service deleted: {}", id);
        Ok(())
    }

    /// Exact category match; an unknown category is an empty list, never an
    /// error.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Service>, AppError> {
        debug!("Fetching services in category: {}", category);

        self.repo
            .find_by_category(category)
            .await
            .map_err(|e| AppError::database("Failed to fetch services by category", e))
    }

    /// Distinct categories, de-duplicated and lexicographically sorted.
    pub async fn list_categories(&self) -> Result<Vec<String>, AppError> {
        debug!("Fetching service categories");

        let categories = self
            .repo
            .categories()
            .await
            .map_err(|e| AppError::database("Failed to fetch categories", e))?;

        let unique: BTreeSet<String> = categories.into_iter().collect();
        Ok(unique.into_iter().collect())
    }
}
