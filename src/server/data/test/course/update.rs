use super::*;

/// Tests replacing a course's name and course type.
///
/// Verifies that university links survive an update.
///
/// Expected: Ok(Some(updated))
#[tokio::test]
async fn replaces_name_and_course_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_course_type, [first, second], course) =
        factory::helpers::create_course_with_dependencies(db).await?;
    let other_type = factory::create_course_type(db).await?;

    let repo = CourseRepository::new(db);
    let result = repo
        .update(UpdateCourseParam {
            id: course.id,
            name: "Advanced Topics".to_string(),
            course_type_id: other_type.id,
        })
        .await?;

    assert!(result.is_some());
    let updated = result.unwrap();
    assert_eq!(updated.name, "Advanced Topics");
    assert_eq!(updated.course_type_id, other_type.id);
    assert_eq!(updated.university_ids, vec![first.id, second.id]);
    assert!(updated.updated_at >= course.updated_at);

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
    let result = repo
        .update(UpdateCourseParam {
            id: Uuid::new_v4(),
            name: "Advanced Topics".to_string(),
            course_type_id: Uuid::new_v4(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
