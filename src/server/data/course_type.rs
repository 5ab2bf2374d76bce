use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::course_type::{
    CourseType, CreateCourseTypeParam, UpdateCourseTypeParam,
};

pub struct CourseTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new course type with a generated ID and fresh timestamps.
    ///
    /// A name that already exists fails with a unique constraint violation.
    pub async fn create(&self, param: CreateCourseTypeParam) -> Result<CourseType, DbErr> {
        let now = Utc::now();

        let entity = entity::course_type::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(CourseType::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<CourseType>, DbErr> {
        let entity = entity::prelude::CourseType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(CourseType::from_entity))
    }

    /// Gets all course types, oldest first
    pub async fn get_all(&self) -> Result<Vec<CourseType>, DbErr> {
        let entities = entity::prelude::CourseType::find()
            .order_by_asc(entity::course_type::Column::CreatedAt)
            .order_by_asc(entity::course_type::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CourseType::from_entity).collect())
    }

    /// Gets the course types among `ids` that exist, in no particular order.
    pub async fn get_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<CourseType>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::CourseType::find()
            .filter(entity::course_type::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CourseType::from_entity).collect())
    }

    /// Replaces a course type's name and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(CourseType))` - Updated course type
    /// - `Ok(None)` - No course type with the given ID
    /// - `Err(DbErr)` - Database error, including a unique constraint violation
    pub async fn update(&self, param: UpdateCourseTypeParam) -> Result<Option<CourseType>, DbErr> {
        let Some(existing) = entity::prelude::CourseType::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::course_type::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(CourseType::from_entity(entity)))
    }

    /// Deletes a course type. Courses referencing it are left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - Course type deleted
    /// - `Ok(false)` - No course type with the given ID
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::CourseType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
