//! Course factory for creating test course entities and their university links.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test courses.
///
/// Universities added through `university()` are linked in call order. Neither the
/// course type nor the universities need to exist, which makes the factory usable
/// for dangling reference scenarios.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    course_type_id: Uuid,
    name: String,
    universities: Vec<Uuid>,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Course {id}"` where id is auto-incremented
    /// - universities: none
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `course_type_id` - Course type the course references
    pub fn new(db: &'a DatabaseConnection, course_type_id: Uuid) -> Self {
        Self {
            db,
            course_type_id,
            name: format!("Course {}", next_id()),
            universities: Vec::new(),
        }
    }

    /// Sets the course name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a university link.
    pub fn university(mut self, university_id: Uuid) -> Self {
        self.universities.push(university_id);
        self
    }

    /// Builds and inserts the course and its university links.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        let now = chrono::Utc::now();

        let course = entity::course::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            course_type_id: ActiveValue::Set(self.course_type_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        for (position, university_id) in self.universities.into_iter().enumerate() {
            entity::course_university::ActiveModel {
                course_id: ActiveValue::Set(course.id),
                university_id: ActiveValue::Set(university_id),
                position: ActiveValue::Set(position as i32),
            }
            .insert(self.db)
            .await?;
        }

        Ok(course)
    }
}

/// Creates a course with default values and no universities.
///
/// Shorthand for `CourseFactory::new(db, course_type_id).build().await`.
pub async fn create_course(
    db: &DatabaseConnection,
    course_type_id: Uuid,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, course_type_id).build().await
}
