use super::*;

/// Tests retrieving an existing course type.
///
/// Expected: Ok(Some(course_type))
#[tokio::test]
async fn returns_course_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course_type = factory::create_course_type(db).await?;

    let repo = CourseTypeRepository::new(db);
    let result = repo.get_by_id(course_type.id).await?;

    assert!(result.is_some());
    let retrieved = result.unwrap();
    assert_eq!(retrieved.id, course_type.id);
    assert_eq!(retrieved.name, course_type.name);

    Ok(())
}

/// Tests retrieving a course type that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseTypeRepository::new(db);
    let result = repo.get_by_id(Uuid::new_v4()).await?;

    assert!(result.is_none());

    Ok(())
}
