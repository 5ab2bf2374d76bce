//! University factory for creating test university entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test universities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let university = UniversityFactory::new(&db)
///     .name("University of Bologna")
///     .build()
///     .await?;
/// ```
pub struct UniversityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> UniversityFactory<'a> {
    /// Creates a new UniversityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"University {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("University {}", next_id()),
        }
    }

    /// Sets the university name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the university entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::university::Model)` - Created university entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::university::Model, DbErr> {
        let now = chrono::Utc::now();

        entity::university::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a university with default values.
///
/// Shorthand for `UniversityFactory::new(db).build().await`.
pub async fn create_university(
    db: &DatabaseConnection,
) -> Result<entity::university::Model, DbErr> {
    UniversityFactory::new(db).build().await
}
