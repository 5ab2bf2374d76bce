use crate::server::{
    data::course_type::CourseTypeRepository,
    model::course_type::{CreateCourseTypeParam, UpdateCourseTypeParam},
};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod delete;
mod get_all;
mod get_by_id;
mod update;
