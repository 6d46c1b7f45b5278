//! Car factory for creating test car entities.
//!
//! This module provides factory methods for creating car entities with defaults
//! sourced from the car fixture. Cars always require an existing owner ID.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db, owner.id)
///     .brand("Ford")
///     .model("Fiesta")
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::car::Model,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values from fixture.
    ///
    /// The licence plate is made unique with an auto-incremented suffix.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the owner the car belongs to
    ///
    /// # Returns
    /// - `CarFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::car::entity_builder()
            .owner_id(owner_id)
            .plate(format!("A-{}-9090", id))
            .build();

        Self { db, entity }
    }

    /// Sets the brand.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.entity.brand = brand.into();
        self
    }

    /// Sets the model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.entity.model = model.into();
        self
    }

    /// Sets the color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.entity.color = color.into();
        self
    }

    /// Sets the model year.
    pub fn year(mut self, year: i32) -> Self {
        self.entity.year = year;
        self
    }

    /// Sets the price.
    pub fn price(mut self, price: i32) -> Self {
        self.entity.price = price;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown owner)
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            id: ActiveValue::NotSet,
            owner_id: ActiveValue::Set(self.entity.owner_id),
            brand: ActiveValue::Set(self.entity.brand),
            model: ActiveValue::Set(self.entity.model),
            color: ActiveValue::Set(self.entity.color),
            plate: ActiveValue::Set(self.entity.plate),
            year: ActiveValue::Set(self.entity.year),
            price: ActiveValue::Set(self.entity.price),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values for the specified owner.
///
/// Shorthand for `CarFactory::new(db, owner_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - Owner ID
///
/// # Returns
/// - `Ok(entity::car::Model)` - Created car entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_car(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, owner_id).build().await
}
