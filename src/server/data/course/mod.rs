//! Course persistence, including the ordered university links.
//!
//! The repository is generic over the connection so the association operations can
//! run inside a transaction opened by the service layer.

pub mod filter;
pub mod populate;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::model::course::{
    Course, CourseFilter, CreateCourseParam, UpdateCourseParam,
};

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new course without universities.
    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, DbErr> {
        let now = Utc::now();

        let entity = entity::course::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            course_type_id: ActiveValue::Set(param.course_type_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity, Vec::new()))
    }

    /// Gets a course by ID with its university references in insertion order.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Course>, DbErr> {
        let Some(entity) = entity::prelude::Course::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let links = entity::prelude::CourseUniversity::find()
            .filter(entity::course_university::Column::CourseId.eq(id))
            .order_by_asc(entity::course_university::Column::Position)
            .all(self.db)
            .await?;

        Ok(Some(Course::from_entity(entity, links)))
    }

    /// Gets every course matching the filter, oldest first.
    ///
    /// University links for all matched courses are fetched in one query.
    pub async fn get_all(&self, filter: &CourseFilter) -> Result<Vec<Course>, DbErr> {
        let entities: Vec<entity::course::Model> = entity::prelude::Course::find()
            .filter(filter::condition(filter))
            .order_by_asc(entity::course::Column::CreatedAt)
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .filter(|course| filter::matches_name(filter, &course.name))
            .collect();

        let course_ids: Vec<Uuid> = entities.iter().map(|c| c.id).collect();
        let mut links_map: HashMap<Uuid, Vec<entity::course_university::Model>> =
            if !course_ids.is_empty() {
                let mut map: HashMap<Uuid, Vec<_>> = HashMap::new();
                for link in entity::prelude::CourseUniversity::find()
                    .filter(entity::course_university::Column::CourseId.is_in(course_ids))
                    .all(self.db)
                    .await?
                {
                    map.entry(link.course_id).or_default().push(link);
                }
                map
            } else {
                HashMap::new()
            };

        Ok(entities
            .into_iter()
            .map(|entity| {
                let links = links_map.remove(&entity.id).unwrap_or_default();
                Course::from_entity(entity, links)
            })
            .collect())
    }

    /// Replaces a course's name and course type. University links are untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Updated course
    /// - `Ok(None)` - No course with the given ID
    pub async fn update(&self, param: UpdateCourseParam) -> Result<Option<Course>, DbErr> {
        let Some(existing) = entity::prelude::Course::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::course::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.course_type_id = ActiveValue::Set(param.course_type_id);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        active_model.update(self.db).await?;

        self.get_by_id(param.id).await
    }

    /// Deletes a course together with its university links.
    ///
    /// # Returns
    /// - `Ok(true)` - Course deleted
    /// - `Ok(false)` - No course with the given ID
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        entity::prelude::CourseUniversity::delete_many()
            .filter(entity::course_university::Column::CourseId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Links a university after the course's last one.
    ///
    /// Linking a university twice fails with a primary key violation.
    pub async fn append_university(&self, course_id: Uuid, university_id: Uuid) -> Result<(), DbErr> {
        let last = entity::prelude::CourseUniversity::find()
            .filter(entity::course_university::Column::CourseId.eq(course_id))
            .order_by_desc(entity::course_university::Column::Position)
            .one(self.db)
            .await?;

        entity::course_university::ActiveModel {
            course_id: ActiveValue::Set(course_id),
            university_id: ActiveValue::Set(university_id),
            position: ActiveValue::Set(last.map(|l| l.position + 1).unwrap_or(0)),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Unlinks a university. Returns whether a link was removed.
    pub async fn remove_university(&self, course_id: Uuid, university_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::CourseUniversity::delete_many()
            .filter(entity::course_university::Column::CourseId.eq(course_id))
            .filter(entity::course_university::Column::UniversityId.eq(university_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets a course's `updated_at` to now.
    pub async fn touch(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Course::update_many()
            .col_expr(entity::course::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::course::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
