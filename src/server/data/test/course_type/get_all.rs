use super::*;

/// Tests listing course types in creation order.
///
/// Expected: Ok with every course type, oldest first
#[tokio::test]
async fn returns_all_in_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_course_type(db).await?;
    let second = factory::create_course_type(db).await?;
    let third = factory::create_course_type(db).await?;

    let repo = CourseTypeRepository::new(db);
    let all = repo.get_all().await?;

    let ids: Vec<Uuid> = all.into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests listing when no course type exists.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_when_none_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseTypeRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests batched lookup of course types by ID.
///
/// Verifies that unknown IDs are skipped rather than reported.
///
/// Expected: Ok with only the existing course type
#[tokio::test]
async fn get_by_ids_skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course_type = factory::create_course_type(db).await?;

    let repo = CourseTypeRepository::new(db);
    let found = repo
        .get_by_ids(vec![course_type.id, Uuid::new_v4()])
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, course_type.id);
    assert!(repo.get_by_ids(Vec::new()).await?.is_empty());

    Ok(())
}
