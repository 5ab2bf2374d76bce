use super::*;

/// Tests deleting a course type.
///
/// Expected: Ok(true) and the record is gone
#[tokio::test]
async fn deletes_course_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course_type = factory::create_course_type(db).await?;

    let repo = CourseTypeRepository::new(db);
    assert!(repo.delete(course_type.id).await?);
    assert!(repo.get_by_id(course_type.id).await?.is_none());

    Ok(())
}

/// Tests deleting a course type that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseTypeRepository::new(db);

    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}

/// Tests that deleting a course type leaves courses referencing it in place.
///
/// Expected: Ok with the course still stored and its reference unchanged
#[tokio::test]
async fn keeps_dependent_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course_type = factory::create_course_type(db).await?;
    let course = factory::create_course(db, course_type.id).await?;

    let repo = CourseTypeRepository::new(db);
    assert!(repo.delete(course_type.id).await?);

    let stored = entity::prelude::Course::find_by_id(course.id).one(db).await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().course_type_id, course_type.id);

    Ok(())
}
