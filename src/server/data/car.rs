//! Car data repository for database operations
//!
//! Provides the `CarRepository` for creating, reading, filtering, updating and
//! deleting cars. Read operations join the owning owner so every returned car
//! carries its fully resolved owner.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::car::{Car, CarFilter, CarWithOwner, CreateCarParam, UpdateCarParam};

/// Repository providing database operations for car management.
///
/// Owner references are expected to be validated by the caller; the foreign key
/// constraint remains the last line of enforcement.
pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    /// Creates a new CarRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CarRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new car belonging to the provided owner
    ///
    /// # Arguments
    /// - `owner_id` - ID of the resolved owner; takes precedence over `param.owner_id`
    /// - `param` - Create parameters containing the car fields
    ///
    /// # Returns
    /// - `Ok(Car)` - The created car with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, owner_id: i32, param: CreateCarParam) -> Result<Car, DbErr> {
        let entity = entity::car::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            brand: ActiveValue::Set(param.brand),
            model: ActiveValue::Set(param.model),
            color: ActiveValue::Set(param.color),
            plate: ActiveValue::Set(param.plate),
            year: ActiveValue::Set(param.year),
            price: ActiveValue::Set(param.price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Car::from_entity(entity))
    }

    /// Gets all cars matching the filter, ordered by ID, with their owners
    ///
    /// Every set filter field must match exactly.
    ///
    /// # Arguments
    /// - `filter` - Optional brand, model, color and year filters
    ///
    /// # Returns
    /// - `Ok(Vec<CarWithOwner>)` - Matching cars and their owners
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, filter: CarFilter) -> Result<Vec<CarWithOwner>, DbErr> {
        let mut query = entity::prelude::Car::find();

        if let Some(brand) = filter.brand {
            query = query.filter(entity::car::Column::Brand.eq(brand));
        }
        if let Some(model) = filter.model {
            query = query.filter(entity::car::Column::Model.eq(model));
        }
        if let Some(color) = filter.color {
            query = query.filter(entity::car::Column::Color.eq(color));
        }
        if let Some(year) = filter.year {
            query = query.filter(entity::car::Column::Year.eq(year));
        }

        query
            .order_by_asc(entity::car::Column::Id)
            .find_also_related(entity::prelude::Owner)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(car, owner)| CarWithOwner::from_entity(car, owner))
            .collect()
    }

    /// Finds a car by ID with its owner
    ///
    /// # Arguments
    /// - `id` - ID of the car to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(CarWithOwner))` - The requested car if found
    /// - `Ok(None)` - No car exists with the provided ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<CarWithOwner>, DbErr> {
        entity::prelude::Car::find_by_id(id)
            .find_also_related(entity::prelude::Owner)
            .one(self.db)
            .await?
            .map(|(car, owner)| CarWithOwner::from_entity(car, owner))
            .transpose()
    }

    /// Checks whether a car with the provided ID exists
    ///
    /// # Returns
    /// - `Ok(true)` - The car exists
    /// - `Ok(false)` - No car exists with the provided ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Car::find()
            .filter(entity::car::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Overwrites every field of an existing car
    ///
    /// # Arguments
    /// - `owner_id` - ID of the resolved owner; takes precedence over `param.owner_id`
    /// - `param` - Update parameters, `param.id` selects the car
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - The updated car
    /// - `Ok(None)` - No car exists with the specified ID
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update(&self, owner_id: i32, param: UpdateCarParam) -> Result<Option<Car>, DbErr> {
        let Some(car) = entity::prelude::Car::find_by_id(param.id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::car::ActiveModel = car.into();
        active_model.owner_id = ActiveValue::Set(owner_id);
        active_model.brand = ActiveValue::Set(param.brand);
        active_model.model = ActiveValue::Set(param.model);
        active_model.color = ActiveValue::Set(param.color);
        active_model.plate = ActiveValue::Set(param.plate);
        active_model.year = ActiveValue::Set(param.year);
        active_model.price = ActiveValue::Set(param.price);

        match active_model.update(self.db).await {
            Ok(entity) => Ok(Some(Car::from_entity(entity))),
            // Deleted between the lookup and the update
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes the car with the provided ID
    ///
    /// # Returns
    /// - `Ok(())` - The car was deleted (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Car::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
