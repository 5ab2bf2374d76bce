use crate::server::{
    data::course::{populate::CoursePopulator, CourseRepository},
    model::course::{CourseFilter, CreateCourseParam, UpdateCourseParam},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, SqlErr};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod append_university;
mod delete;
mod get_by_id;
mod populate;
mod remove_university;
mod update;
