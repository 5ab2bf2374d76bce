pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_course_type_table;
mod m20251020_000002_create_university_table;
mod m20251020_000003_create_course_table;
mod m20251020_000004_create_course_university_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_course_type_table::Migration),
            Box::new(m20251020_000002_create_university_table::Migration),
            Box::new(m20251020_000003_create_course_table::Migration),
            Box::new(m20251020_000004_create_course_university_table::Migration),
        ]
    }
}
