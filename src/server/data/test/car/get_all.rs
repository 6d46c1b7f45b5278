use super::*;
use test_utils::factory::car::CarFactory;

/// Tests listing cars without filters.
///
/// Verifies every car is returned, ordered by ID, with its owner resolved.
///
/// Expected: Ok with all cars
#[tokio::test]
async fn returns_all_cars_with_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ali = factory::create_owner(db).await?;
    let najat = factory::create_owner(db).await?;
    let first = factory::create_car(db, ali.id).await?;
    let second = factory::create_car(db, najat.id).await?;

    let cars = CarRepository::new(db).get_all(CarFilter::default()).await?;

    assert_eq!(cars.len(), 2);
    assert_eq!(cars[0].car.id, first.id);
    assert_eq!(cars[0].owner.id, ali.id);
    assert_eq!(cars[1].car.id, second.id);
    assert_eq!(cars[1].owner.id, najat.id);
    assert_eq!(cars[1].owner.surname, najat.surname);

    Ok(())
}

/// Tests listing cars from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cars = CarRepository::new(db).get_all(CarFilter::default()).await?;

    assert!(cars.is_empty());

    Ok(())
}

/// Tests filtering cars by brand.
///
/// Expected: Ok with only the matching brand
#[tokio::test]
async fn filters_by_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    CarFactory::new(db, owner.id).brand("Toyota").build().await?;
    let ford = CarFactory::new(db, owner.id).brand("Ford").build().await?;

    let cars = CarRepository::new(db)
        .get_all(CarFilter {
            brand: Some("Ford".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].car.id, ford.id);

    Ok(())
}

/// Tests filtering cars by color and by year.
///
/// Expected: Ok with only the matching cars for each filter
#[tokio::test]
async fn filters_by_color_and_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let red = CarFactory::new(db, owner.id)
        .color("Rouge")
        .year(2015)
        .build()
        .await?;
    let blue = CarFactory::new(db, owner.id)
        .color("Bleu")
        .year(2016)
        .build()
        .await?;

    let repo = CarRepository::new(db);

    let by_color = repo
        .get_all(CarFilter {
            color: Some("Rouge".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_color.len(), 1);
    assert_eq!(by_color[0].car.id, red.id);

    let by_year = repo
        .get_all(CarFilter {
            year: Some(2016),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_year.len(), 1);
    assert_eq!(by_year[0].car.id, blue.id);

    Ok(())
}

/// Tests combining brand and model filters.
///
/// Verifies that combined filters narrow the result with AND semantics.
///
/// Expected: Ok with only the car matching both
#[tokio::test]
async fn combines_brand_and_model_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_owner_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    CarFactory::new(db, owner.id)
        .brand("Ford")
        .model("Focus")
        .build()
        .await?;
    let fiesta = CarFactory::new(db, owner.id)
        .brand("Ford")
        .model("Fiesta")
        .build()
        .await?;
    CarFactory::new(db, owner.id)
        .brand("Toyota")
        .model("Fiesta")
        .build()
        .await?;

    let cars = CarRepository::new(db)
        .get_all(CarFilter {
            brand: Some("Ford".to_string()),
            model: Some("Fiesta".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].car.id, fiesta.id);

    Ok(())
}
