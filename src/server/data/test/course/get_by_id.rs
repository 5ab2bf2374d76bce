use super::*;

/// Tests retrieving a course with its universities.
///
/// Expected: Ok(Some(course)) with universities in link order
#[tokio::test]
async fn returns_course_with_ordered_universities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course_type = factory::create_course_type(db).await?;
    let first = factory::create_university(db).await?;
    let second = factory::create_university(db).await?;
    let course = factory::course::CourseFactory::new(db, course_type.id)
        .university(second.id)
        .university(first.id)
        .build()
        .await?;

    let repo = CourseRepository::new(db);
    let result = repo.get_by_id(course.id).await?;

    assert!(result.is_some());
    let retrieved = result.unwrap();
    assert_eq!(retrieved.name, course.name);
    assert_eq!(retrieved.course_type_id, course_type.id);
    assert_eq!(retrieved.university_ids, vec![second.id, first.id]);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);

    assert!(repo.get_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}
