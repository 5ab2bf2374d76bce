use super::*;

/// Tests renaming a university.
///
/// Expected: Ok(Some(updated))
#[tokio::test]
async fn updates_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::create_university(db).await?;

    let repo = UniversityRepository::new(db);
    let updated = repo
        .update(UpdateUniversityParam {
            id: university.id,
            name: "Renamed University".to_string(),
        })
        .await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().name, "Renamed University");

    Ok(())
}

/// Tests that keeping the current name is not a collision.
///
/// Expected: Ok(Some(unchanged name))
#[tokio::test]
async fn allows_unchanged_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let university = factory::create_university(db).await?;

    let repo = UniversityRepository::new(db);
    let updated = repo
        .update(UpdateUniversityParam {
            id: university.id,
            name: university.name.clone(),
        })
        .await?;

    assert_eq!(updated.map(|u| u.name), Some(university.name));

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UniversityRepository::new(db);
    let updated = repo
        .update(UpdateUniversityParam {
            id: Uuid::new_v4(),
            name: "Nowhere".to_string(),
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
