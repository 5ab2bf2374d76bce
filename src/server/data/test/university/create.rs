use super::*;

/// Tests creating a new university.
///
/// Expected: Ok with university created
#[tokio::test]
async fn creates_university() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UniversityRepository::new(db);
    let created = repo
        .create(CreateUniversityParam {
            name: "Stanford University".to_string(),
        })
        .await?;

    assert_eq!(created.name, "Stanford University");

    let retrieved = repo.get_by_id(created.id).await?;
    assert_eq!(retrieved, Some(created));

    Ok(())
}

/// Tests that university names are unique.
///
/// Names differing only in case are distinct.
///
/// Expected: Err with unique constraint violation for the exact duplicate only
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::University)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UniversityRepository::new(db);
    repo.create(CreateUniversityParam {
        name: "MIT".to_string(),
    })
    .await?;

    let duplicate = repo
        .create(CreateUniversityParam {
            name: "MIT".to_string(),
        })
        .await;
    assert!(matches!(
        duplicate.map_err(|e| e.sql_err()),
        Err(Some(SqlErr::UniqueConstraintViolation(_)))
    ));

    let other_case = repo
        .create(CreateUniversityParam {
            name: "mit".to_string(),
        })
        .await;
    assert!(other_case.is_ok());

    Ok(())
}
