use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::course_type::CourseTypeRepository,
    error::AppError,
    model::course_type::{CourseType, CreateCourseTypeParam, UpdateCourseTypeParam},
};

const DUPLICATE_NAME: &str = "A course type with this name already exists";
const NOT_FOUND: &str = "Course type not found";

pub struct CourseTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new course type.
    ///
    /// # Returns
    /// - `Ok(CourseType)` - The created course type
    /// - `Err(AppError::DuplicateKey)` - Another course type has the same name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateCourseTypeParam) -> Result<CourseType, AppError> {
        let course_type = CourseTypeRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| {
                AppError::or_unique_violation(e, AppError::DuplicateKey(DUPLICATE_NAME.to_string()))
            })?;

        tracing::info!("Created course type {} ({})", course_type.name, course_type.id);

        Ok(course_type)
    }

    pub async fn get_all(&self) -> Result<Vec<CourseType>, AppError> {
        let course_types = CourseTypeRepository::new(self.db).get_all().await?;

        tracing::debug!("Listed {} course types", course_types.len());

        Ok(course_types)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CourseType, AppError> {
        CourseTypeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Replaces a course type's name.
    ///
    /// # Returns
    /// - `Ok(CourseType)` - The updated course type
    /// - `Err(AppError::NotFound)` - No course type with the given ID
    /// - `Err(AppError::DuplicateKey)` - Another course type has the new name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, param: UpdateCourseTypeParam) -> Result<CourseType, AppError> {
        let course_type = CourseTypeRepository::new(self.db)
            .update(param)
            .await
            .map_err(|e| {
                AppError::or_unique_violation(e, AppError::DuplicateKey(DUPLICATE_NAME.to_string()))
            })?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        tracing::info!("Updated course type {}", course_type.id);

        Ok(course_type)
    }

    /// Deletes a course type. Courses referencing it keep the stale reference.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !CourseTypeRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        tracing::info!("Deleted course type {}", id);

        Ok(())
    }
}
