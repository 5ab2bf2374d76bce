//! Course type factory for creating test course type entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test course types with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let course_type = CourseTypeFactory::new(&db)
///     .name("Environmental")
///     .build()
///     .await?;
/// ```
pub struct CourseTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> CourseTypeFactory<'a> {
    /// Creates a new CourseTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Course Type {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Course Type {}", next_id()),
        }
    }

    /// Sets the course type name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the course type entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course_type::Model)` - Created course type entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course_type::Model, DbErr> {
        let now = chrono::Utc::now();

        entity::course_type::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course type with default values.
///
/// Shorthand for `CourseTypeFactory::new(db).build().await`.
pub async fn create_course_type(
    db: &DatabaseConnection,
) -> Result<entity::course_type::Model, DbErr> {
    CourseTypeFactory::new(db).build().await
}
