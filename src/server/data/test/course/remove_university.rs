use super::*;

/// Tests unlinking a university from a course.
///
/// Expected: Ok(true) with the remaining university kept
#[tokio::test]
async fn removes_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_course_type, [first, second], course) =
        factory::helpers::create_course_with_dependencies(db).await?;

    let repo = CourseRepository::new(db);
    assert!(repo.remove_university(course.id, first.id).await?);

    let retrieved = repo.get_by_id(course.id).await?.unwrap();
    assert_eq!(retrieved.university_ids, vec![second.id]);

    Ok(())
}

/// Tests unlinking a university that was never linked.
///
/// Expected: Ok(false) with links unchanged
#[tokio::test]
async fn ignores_missing_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_course_type, [first, second], course) =
        factory::helpers::create_course_with_dependencies(db).await?;

    let repo = CourseRepository::new(db);
    assert!(!repo.remove_university(course.id, Uuid::new_v4()).await?);

    let retrieved = repo.get_by_id(course.id).await?.unwrap();
    assert_eq!(retrieved.university_ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that `touch` moves `updated_at` forward.
///
/// Expected: Ok with a later `updated_at`
#[tokio::test]
async fn touch_bumps_updated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course_type = factory::create_course_type(db).await?;
    let course = factory::create_course(db, course_type.id).await?;
    std::thread::sleep(std::time::Duration::from_millis(5));

    let repo = CourseRepository::new(db);
    repo.touch(course.id).await?;

    let retrieved = repo.get_by_id(course.id).await?.unwrap();
    assert!(retrieved.updated_at > course.updated_at);
    assert_eq!(retrieved.created_at, course.created_at);

    Ok(())
}
