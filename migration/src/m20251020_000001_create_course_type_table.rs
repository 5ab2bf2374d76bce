use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseType::Table)
                    .if_not_exists()
                    .col(pk_uuid(CourseType::Id))
                    .col(string_uniq(CourseType::Name))
                    .col(timestamp_with_time_zone(CourseType::CreatedAt))
                    .col(timestamp_with_time_zone(CourseType::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseType {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
