use super::*;

/// Tests expanding a course's references.
///
/// Expected: Ok with the course type and universities resolved in link order
#[tokio::test]
async fn resolves_course_type_and_universities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (course_type, [first, second], course) =
        factory::helpers::create_course_with_dependencies(db).await?;

    let course = CourseRepository::new(db).get_by_id(course.id).await?.unwrap();
    let populated = CoursePopulator::new(db).populate(course).await?;

    assert_eq!(populated.course_type.map(|t| t.name), Some(course_type.name));
    let names: Vec<String> = populated.universities.into_iter().map(|u| u.name).collect();
    assert_eq!(names, vec![first.name, second.name]);

    Ok(())
}

/// Tests expanding a course whose course type and one university were deleted.
///
/// Expected: Ok with `course_type` None and the deleted university omitted
#[tokio::test]
async fn tolerates_dangling_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (course_type, [first, second], course) =
        factory::helpers::create_course_with_dependencies(db).await?;
    entity::prelude::CourseType::delete_by_id(course_type.id)
        .exec(db)
        .await?;
    entity::prelude::University::delete_by_id(first.id)
        .exec(db)
        .await?;

    let course = CourseRepository::new(db).get_by_id(course.id).await?.unwrap();
    let populated = CoursePopulator::new(db).populate(course).await?;

    assert!(populated.course_type.is_none());
    assert_eq!(populated.universities.len(), 1);
    assert_eq!(populated.universities[0].id, second.id);

    Ok(())
}

/// Tests expanding several courses sharing references.
///
/// Expected: Ok with one populated course per input, in input order
#[tokio::test]
async fn populates_many_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (course_type, [first, _second], linked) =
        factory::helpers::create_course_with_dependencies(db).await?;
    let sibling = factory::course::CourseFactory::new(db, course_type.id)
        .university(first.id)
        .build()
        .await?;

    let courses = CourseRepository::new(db)
        .get_all(&CourseFilter::default())
        .await?;
    let populated = CoursePopulator::new(db).populate_many(courses).await?;

    assert_eq!(populated.len(), 2);
    assert_eq!(populated[0].id, linked.id);
    assert_eq!(populated[0].universities.len(), 2);
    assert_eq!(populated[1].id, sibling.id);
    assert_eq!(populated[1].universities[0].id, first.id);
    assert!(populated
        .iter()
        .all(|c| c.course_type.as_ref().map(|t| t.id) == Some(course_type.id)));

    assert!(CoursePopulator::new(db)
        .populate_many(Vec::new())
        .await?
        .is_empty());

    Ok(())
}
