use super::*;

/// Tests deleting a university.
///
/// Expected: Ok(true), then Ok(false) on a second attempt
#[tokio::test]
async fn deletes_university() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::create_university(db).await?;

    let repo = UniversityRepository::new(db);
    assert!(repo.delete(university.id).await?);
    assert!(!repo.delete(university.id).await?);

    Ok(())
}

/// Tests that deleting a university keeps the course links pointing at it.
///
/// Expected: Ok with the link row still present
#[tokio::test]
async fn keeps_course_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_course_type, [first, _second], course) =
        factory::helpers::create_course_with_dependencies(db).await?;

    let repo = UniversityRepository::new(db);
    assert!(repo.delete(first.id).await?);

    let links = entity::prelude::CourseUniversity::find()
        .filter(entity::course_university::Column::CourseId.eq(course.id))
        .count(db)
        .await?;
    assert_eq!(links, 2);

    Ok(())
}
