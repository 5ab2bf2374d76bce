use crate::server::{
    data::university::UniversityRepository,
    model::university::{CreateUniversityParam, UpdateUniversityParam},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, SqlErr};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod update;
