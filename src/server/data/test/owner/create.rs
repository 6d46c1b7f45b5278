use super::*;

/// Tests creating a new owner.
///
/// Verifies that the repository stores the surname and name and returns the
/// generated ID.
///
/// Expected: Ok with owner created
#[tokio::test]
async fn creates_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnerRepository::new(db);
    let result = repo
        .create(CreateOwnerParam {
            surname: "Ali".to_string(),
            name: "Hassan".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let owner = result.unwrap();
    assert!(owner.id > 0);
    assert_eq!(owner.surname, "Ali");
    assert_eq!(owner.name, "Hassan");

    // Verify owner exists in database
    let db_owner = entity::prelude::Owner::find_by_id(owner.id).one(db).await?;
    assert!(db_owner.is_some());
    assert_eq!(db_owner.unwrap().surname, "Ali");

    Ok(())
}

/// Tests creating two owners with the same surname and name.
///
/// Verifies that the unique `(surname, name)` index rejects the second insert
/// with a unique constraint violation.
///
/// Expected: Err on duplicate
#[tokio::test]
async fn fails_for_duplicate_surname_and_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnerRepository::new(db);
    let param = CreateOwnerParam {
        surname: "Najat".to_string(),
        name: "Bani".to_string(),
    };

    repo.create(param.clone()).await?;
    let result = repo.create(param).await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests creating owners sharing only the surname.
///
/// Verifies that uniqueness applies to the pair, not to each column.
///
/// Expected: Ok for both owners
#[tokio::test]
async fn allows_shared_surname_with_different_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnerRepository::new(db);
    let first = repo
        .create(CreateOwnerParam {
            surname: "Ali".to_string(),
            name: "Hassan".to_string(),
        })
        .await?;
    let second = repo
        .create(CreateOwnerParam {
            surname: "Ali".to_string(),
            name: "Karim".to_string(),
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
