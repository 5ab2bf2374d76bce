use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::university::UniversityRepository,
    error::AppError,
    model::university::{CreateUniversityParam, University, UpdateUniversityParam},
};

const DUPLICATE_NAME: &str = "A university with this name already exists";
const NOT_FOUND: &str = "University not found";

fn duplicate_name() -> AppError {
    AppError::DuplicateKey(DUPLICATE_NAME.to_string())
}

fn not_found() -> AppError {
    AppError::NotFound(NOT_FOUND.to_string())
}

pub struct UniversityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UniversityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateUniversityParam) -> Result<University, AppError> {
        let university = UniversityRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| AppError::or_unique_violation(e, duplicate_name()))?;

        tracing::info!("Created university {} ({})", university.name, university.id);

        Ok(university)
    }

    pub async fn get_all(&self) -> Result<Vec<University>, AppError> {
        Ok(UniversityRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<University, AppError> {
        UniversityRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn update(&self, param: UpdateUniversityParam) -> Result<University, AppError> {
        let university = UniversityRepository::new(self.db)
            .update(param)
            .await
            .map_err(|e| AppError::or_unique_violation(e, duplicate_name()))?
            .ok_or_else(not_found)?;

        tracing::info!("Updated university {}", university.id);

        Ok(university)
    }

    /// Deletes a university. Course links to it are kept and skipped when courses
    /// are populated.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !UniversityRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("Deleted university {}", id);

        Ok(())
    }
}
