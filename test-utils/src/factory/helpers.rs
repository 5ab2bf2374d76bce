//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a course together with its course type and two linked universities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((course_type, [first, second], course))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::course_type::Model,
        [entity::university::Model; 2],
        entity::course::Model,
    ),
    DbErr,
> {
    let course_type = crate::factory::course_type::create_course_type(db).await?;
    let first = crate::factory::university::create_university(db).await?;
    let second = crate::factory::university::create_university(db).await?;
    let course = crate::factory::course::CourseFactory::new(db, course_type.id)
        .university(first.id)
        .university(second.id)
        .build()
        .await?;

    Ok((course_type, [first, second], course))
}
