use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::university::{
    CreateUniversityParam, University, UpdateUniversityParam,
};

pub struct UniversityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UniversityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new university with a generated ID and fresh timestamps.
    ///
    /// A name that already exists fails with a unique constraint violation.
    pub async fn create(&self, param: CreateUniversityParam) -> Result<University, DbErr> {
        let now = Utc::now();

        let entity = entity::university::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(University::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<University>, DbErr> {
        let entity = entity::prelude::University::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(University::from_entity))
    }

    /// Gets all universities in creation order
    pub async fn get_all(&self) -> Result<Vec<University>, DbErr> {
        let entities = entity::prelude::University::find()
            .order_by_asc(entity::university::Column::CreatedAt)
            .order_by_asc(entity::university::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(University::from_entity).collect())
    }

    /// Gets the universities among `ids` that exist, in no particular order.
    pub async fn get_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<University>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::University::find()
            .filter(entity::university::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(University::from_entity).collect())
    }

    /// Replaces a university's name and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(University))` - Updated university
    /// - `Ok(None)` - No university with the given ID
    /// - `Err(DbErr)` - Database error, including a unique constraint violation
    pub async fn update(&self, param: UpdateUniversityParam) -> Result<Option<University>, DbErr> {
        let Some(existing) = entity::prelude::University::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::university::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(University::from_entity(entity)))
    }

    /// Deletes a university. Course links to it are left in place.
    ///
    /// # Returns
    /// - `Ok(true)` - University deleted
    /// - `Ok(false)` - No university with the given ID
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::University::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
