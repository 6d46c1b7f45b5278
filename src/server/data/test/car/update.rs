use super::*;

/// Builds update parameters for the provided car ID.
fn update_param(id: i32) -> UpdateCarParam {
    UpdateCarParam {
        id,
        owner_id: None,
        brand: "Honda".to_string(),
        model: "CRV".to_string(),
        color: "Bleu".to_string(),
        plate: "A-3-7090".to_string(),
        year: 2016,
        price: 140000,
    }
}

/// Tests overwriting every field of an existing car.
///
/// Expected: Ok with the updated fields persisted
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;

    let updated = CarRepository::new(db)
        .update(owner.id, update_param(car.id))
        .await?
        .unwrap();

    assert_eq!(updated.id, car.id);
    assert_eq!(updated.brand, "Honda");
    assert_eq!(updated.model, "CRV");
    assert_eq!(updated.color, "Bleu");
    assert_eq!(updated.plate, "A-3-7090");
    assert_eq!(updated.year, 2016);
    assert_eq!(updated.price, 140000);

    let db_car = entity::prelude::Car::find_by_id(car.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_car.brand, "Honda");

    Ok(())
}

/// Tests moving a car to another owner.
///
/// Expected: Ok with the new owner ID persisted
#[tokio::test]
async fn reassigns_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let new_owner = factory::create_owner(db).await?;

    let updated = CarRepository::new(db)
        .update(new_owner.id, update_param(car.id))
        .await?
        .unwrap();

    assert_eq!(updated.owner_id, new_owner.id);

    Ok(())
}

/// Tests updating a nonexistent car.
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

    let owner = factory::create_owner(db).await?;

    let result = CarRepository::new(db)
        .update(owner.id, update_param(999999))
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests updating a car that was deleted after its existence was checked.
///
/// Expected: Ok(None) rather than an error
#[tokio::test]
async fn returns_none_for_car_deleted_before_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;
    let repo = CarRepository::new(db);

    assert!(repo.exists(car.id).await?);
    repo.delete(car.id).await?;

    let result = repo.update(owner.id, update_param(car.id)).await?;

    assert!(result.is_none());

    Ok(())
}
