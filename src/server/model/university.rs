//! University domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::university::{CreateUniversityDto, UniversityDto, UpdateUniversityDto},
    server::{
        error::AppError,
        validation::{Validator, UNIVERSITY_NAME},
    },
};

/// University as seen by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct University {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl University {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::university::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> UniversityDto {
        UniversityDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUniversityParam {
    pub name: String,
}

impl CreateUniversityParam {
    /// Validates the request body into create parameters.
    ///
    /// # Returns
    /// - `Ok(CreateUniversityParam)` - Trimmed and escaped name
    /// - `Err(AppError::Validation)` - Name missing or out of bounds
    pub fn from_dto(dto: CreateUniversityDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        let name = validator.text("name", dto.name.as_deref(), &UNIVERSITY_NAME);
        validator.finish()?;

        Ok(Self { name })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateUniversityParam {
    pub id: Uuid,
    pub name: String,
}

impl UpdateUniversityParam {
    pub fn from_dto(id: Uuid, dto: UpdateUniversityDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        let name = validator.text("name", dto.name.as_deref(), &UNIVERSITY_NAME);
        validator.finish()?;

        Ok(Self { id, name })
    }
}
