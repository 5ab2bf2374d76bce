//! Course type domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::course_type::{CourseTypeDto, CreateCourseTypeDto, UpdateCourseTypeDto},
    server::{
        error::AppError,
        validation::{Validator, COURSE_TYPE_NAME},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct CourseType {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CourseType {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::course_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> CourseTypeDto {
        CourseTypeDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated parameters for creating a course type.
#[derive(Debug, Clone)]
pub struct CreateCourseTypeParam {
    pub name: String,
}

impl CreateCourseTypeParam {
    /// Validates the request body into create parameters.
    ///
    /// # Returns
    /// - `Ok(CreateCourseTypeParam)` - Trimmed and escaped name
    /// - `Err(AppError::Validation)` - Name missing or out of bounds
    pub fn from_dto(dto: CreateCourseTypeDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        let name = validator.text("name", dto.name.as_deref(), &COURSE_TYPE_NAME);
        validator.finish()?;

        Ok(Self { name })
    }
}

/// Validated parameters for replacing a course type's name.
#[derive(Debug, Clone)]
pub struct UpdateCourseTypeParam {
    pub id: Uuid,
    pub name: String,
}

impl UpdateCourseTypeParam {
    pub fn from_dto(id: Uuid, dto: UpdateCourseTypeDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        let name = validator.text("name", dto.name.as_deref(), &COURSE_TYPE_NAME);
        validator.finish()?;

        Ok(Self { id, name })
    }
}
