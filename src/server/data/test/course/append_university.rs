use super::*;

/// Tests appending universities to a course.
///
/// Expected: Ok with universities kept in append order
#[tokio::test]
async fn appends_after_existing_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_course_type, [first, second], course) =
        factory::helpers::create_course_with_dependencies(db).await?;
    let third = factory::create_university(db).await?;

    let repo = CourseRepository::new(db);
    repo.append_university(course.id, third.id).await?;

    let retrieved = repo.get_by_id(course.id).await?.unwrap();
    assert_eq!(
        retrieved.university_ids,
        vec![first.id, second.id, third.id]
    );

    Ok(())
}

/// Tests that removing a link does not disturb the position of a later append.
///
/// Expected: Ok with the re-added university at the end
#[tokio::test]
async fn appends_to_end_after_removal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_course_type, [first, second], course) =
        factory::helpers::create_course_with_dependencies(db).await?;

    let repo = CourseRepository::new(db);
    repo.remove_university(course.id, first.id).await?;
    repo.append_university(course.id, first.id).await?;

    let retrieved = repo.get_by_id(course.id).await?.unwrap();
    assert_eq!(retrieved.university_ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests linking the same university twice.
///
/// Expected: Err with unique constraint violation and a single link kept
#[tokio::test]
async fn fails_for_duplicate_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course_type = factory::create_course_type(db).await?;
    let university = factory::create_university(db).await?;
    let course = factory::create_course(db, course_type.id).await?;

    let repo = CourseRepository::new(db);
    repo.append_university(course.id, university.id).await?;
    let result = repo.append_university(course.id, university.id).await;

    assert!(matches!(
        result.map_err(|e| e.sql_err()),
        Err(Some(SqlErr::UniqueConstraintViolation(_)))
    ));

    let retrieved = repo.get_by_id(course.id).await?.unwrap();
    assert_eq!(retrieved.university_ids, vec![university.id]);

    Ok(())
}
