use super::*;

/// Tests renaming a course type.
///
/// Verifies that the name is replaced and `updated_at` moves forward while
/// `created_at` stays put.
///
/// Expected: Ok(Some(updated))
#[tokio::test]
async fn updates_name_and_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course_type = factory::create_course_type(db).await?;
    std::thread::sleep(std::time::Duration::from_millis(5));

    let repo = CourseTypeRepository::new(db);
    let result = repo
        .update(UpdateCourseTypeParam {
            id: course_type.id,
            name: "Renamed".to_string(),
        })
        .await?;

    assert!(result.is_some());
    let updated = result.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.created_at, course_type.created_at);
    assert!(updated.updated_at > course_type.updated_at);

    Ok(())
}

/// Tests updating a course type that does not exist.
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
    let result = repo
        .update(UpdateCourseTypeParam {
            id: Uuid::new_v4(),
            name: "Renamed".to_string(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests renaming a course type to a name another one holds.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn fails_when_renaming_to_taken_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseType)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let taken = factory::create_course_type(db).await?;
    let course_type = factory::create_course_type(db).await?;

    let repo = CourseTypeRepository::new(db);
    let result = repo
        .update(UpdateCourseTypeParam {
            id: course_type.id,
            name: taken.name,
        })
        .await;

    assert!(matches!(
        result.map_err(|e| e.sql_err()),
        Err(Some(SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}
