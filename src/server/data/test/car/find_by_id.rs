use super::*;

/// Tests finding an existing car with its owner.
///
/// Expected: Ok(Some) with the owner resolved
#[tokio::test]
async fn finds_car_with_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;

    let result = CarRepository::new(db).find_by_id(car.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.car.id, car.id);
    assert_eq!(found.car.plate, car.plate);
    assert_eq!(found.owner.id, owner.id);
    assert_eq!(found.owner.name, owner.name);

    Ok(())
}

/// Tests finding a nonexistent car.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CarRepository::new(db).find_by_id(999999).await?;

    assert!(result.is_none());

    Ok(())
}
