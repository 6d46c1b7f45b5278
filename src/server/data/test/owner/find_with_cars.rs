use super::*;

/// Tests loading an owner together with the cars it holds.
///
/// Verifies that only the owner's own cars are returned, ordered by ID.
///
/// Expected: Ok(Some) with two cars
#[tokio::test]
async fn returns_owner_with_its_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let other = factory::create_owner(db).await?;
    let first = factory::create_car(db, owner.id).await?;
    let second = factory::create_car(db, owner.id).await?;
    factory::create_car(db, other.id).await?;

    let result = OwnerRepository::new(db).find_with_cars(owner.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.owner.id, owner.id);
    let car_ids: Vec<i32> = found.cars.iter().map(|c| c.id).collect();
    assert_eq!(car_ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests loading an owner without cars.
///
/// Expected: Ok(Some) with empty car collection
#[tokio::test]
async fn returns_owner_without_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;

    let found = OwnerRepository::new(db)
        .find_with_cars(owner.id)
        .await?
        .unwrap();

    assert!(found.cars.is_empty());

    Ok(())
}

/// Tests loading a nonexistent owner with cars.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OwnerRepository::new(db).find_with_cars(999999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that deleting an owner cascades to its cars.
///
/// Verifies the store-level `ON DELETE CASCADE` on the car foreign key.
///
/// Expected: Ok with no cars left for the deleted owner
#[tokio::test]
async fn deleting_owner_cascades_to_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;

    entity::prelude::Owner::delete_by_id(owner.id)
        .exec(db)
        .await?;

    let db_car = entity::prelude::Car::find_by_id(car.id).one(db).await?;
    assert!(db_car.is_none());

    Ok(())
}
