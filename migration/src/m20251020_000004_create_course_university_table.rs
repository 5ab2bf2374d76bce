use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000003_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseUniversity::Table)
                    .if_not_exists()
                    .col(uuid(CourseUniversity::CourseId))
                    .col(uuid(CourseUniversity::UniversityId))
                    .col(integer(CourseUniversity::Position))
                    .primary_key(
                        Index::create()
                            .col(CourseUniversity::CourseId)
                            .col(CourseUniversity::UniversityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_university_course_id")
                            .from(CourseUniversity::Table, CourseUniversity::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseUniversity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseUniversity {
    Table,
    CourseId,
    UniversityId,
    Position,
}
