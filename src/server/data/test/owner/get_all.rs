use super::*;

/// Tests listing owners from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owners = OwnerRepository::new(db).get_all().await?;

    assert!(owners.is_empty());

    Ok(())
}

/// Tests listing owners returns every owner ordered by ID.
///
/// Expected: Ok with owners in insertion order
#[tokio::test]
async fn returns_all_owners_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_owner(db).await?;
    let second = factory::create_owner(db).await?;
    let third = factory::create_owner(db).await?;

    let owners = OwnerRepository::new(db).get_all().await?;

    let ids: Vec<i32> = owners.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests that owners holding several cars are listed once.
///
/// Expected: Ok with one entry per owner
#[tokio::test]
async fn lists_owner_with_many_cars_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    factory::create_car(db, owner.id).await?;
    factory::create_car(db, owner.id).await?;

    let owners = OwnerRepository::new(db).get_all().await?;

    assert_eq!(owners.len(), 1);
    assert_eq!(owners[0].id, owner.id);

    Ok(())
}
