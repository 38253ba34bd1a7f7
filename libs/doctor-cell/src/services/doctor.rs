use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::Doctor;
use crate::services::repository::DoctorRepository;
use crate::validation::normalize_doctor;

/// Orchestrates doctor CRUD: every operation normalizes its input, talks to
/// the repository, and maps persistence faults to typed errors.
pub struct DoctorService {
    repo: DoctorRepository,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            repo: DoctorRepository::new(config),
        }
    }

    /// All doctors, in the store's default order.
    pub async fn list(&self) -> Result<Vec<Doctor>, AppError> {
        debug!("Fetching all doctors");

        self.repo
            .list()
            .await
            .map_err(|e| AppError::database("Failed to fetch doctors", e))
    }

    /// Validates the raw payload and persists a new doctor.
    pub async fn create(&self, payload: &Value) -> Result<Doctor, AppError> {
        let record = normalize_doctor(payload)?;
        debug!("Creating doctor: {}", record.name);

        let doctor = self
            .repo
            .insert(&record)
            .await
            .map_err(|e| AppError::database("Failed to create doctor", e))?;

        info!("Doctor created with ID: {}", doctor.id);
        Ok(doctor)
    }

    pub async fn get(&self, id: Uuid) -> Result<Doctor, AppError> {
        debug!("Fetching doctor: {}", id);

        self.repo
            .find(id)
            .await
            .map_err(|e| AppError::database("Failed to fetch doctor", e))?
            .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))
    }

    /// Full replace. The record must exist before the payload is validated,
    /// so an unknown id reports NotFound even for invalid payloads.
    pub async fn update(&self, id: Uuid, payload: &Value) -> Result<Doctor, AppError> {
        self.get(id).await?;

        let record = normalize_doctor(payload)?;
        debug!("Updating doctor: {}", id);

        let doctor = self
            .repo
            .replace(id, &record)
            .await
            .map_err(|e| AppError::database("Failed to update doctor", e))?;

        info!("Doctor updated: {}", doctor.id);
        Ok(doctor)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.get(id).await?;

        self.repo
            .delete(id)
            .await
            .map_err(|e| AppError::database("Failed to delete doctor", e))?;

        info!("Doctor deleted: {}", id);
        Ok(())
    }
}
