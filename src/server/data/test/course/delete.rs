use super::*;

/// Tests deleting a course.
///
/// Verifies that the course's university links are removed with it while the
/// universities themselves remain.
///
/// Expected: Ok(true) with no remaining links
#[tokio::test]
async fn deletes_course_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_course_type, [first, second], course) =
        factory::helpers::create_course_with_dependencies(db).await?;

    let repo = CourseRepository::new(db);
    assert!(repo.delete(course.id).await?);

    let links = entity::prelude::CourseUniversity::find()
        .filter(entity::course_university::Column::CourseId.eq(course.id))
        .count(db)
        .await?;
    assert_eq!(links, 0);

    let universities = entity::prelude::University::find()
        .filter(entity::university::Column::Id.is_in([first.id, second.id]))
        .count(db)
        .await?;
    assert_eq!(universities, 2);

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);

    assert!(!repo.delete(Uuid::new_v4()).await?);

    Ok(())
}
