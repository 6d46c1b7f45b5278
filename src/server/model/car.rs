//! Domain & parameter models for car operations
//!
//! Defines the car domain model, the car-with-owner aggregate returned by every
//! car endpoint, the parameter models for creating, updating and filtering cars,
//! and the conversions from entities and into DTOs.

use sea_orm::DbErr;

use crate::{
    model::car::{CarDto, CarRequestDto, OwnedCarDto},
    server::model::owner::Owner,
};

/// The car domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub owner_id: i32,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub plate: String,
    pub year: i32,
    pub price: i32,
}

impl Car {
    /// Converts an entity model to the car domain model
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            brand: entity.brand,
            model: entity.model,
            color: entity.color,
            plate: entity.plate,
            year: entity.year,
            price: entity.price,
        }
    }

    /// Converts the car into a DTO listed under its owner
    pub fn into_owned_dto(self) -> OwnedCarDto {
        OwnedCarDto {
            id: self.id,
            brand: self.brand,
            model: self.model,
            color: self.color,
            plate: self.plate,
            year: self.year,
            price: self.price,
        }
    }
}

/// A car together with its fully resolved owner.
#[derive(Debug, Clone)]
pub struct CarWithOwner {
    pub car: Car,
    pub owner: Owner,
}

impl CarWithOwner {
    /// Converts a car entity and its related owner entity into the aggregate
    ///
    /// # Arguments
    /// - `car` - The car entity model from the database
    /// - `owner` - The related owner entity, as returned by `find_also_related`
    ///
    /// # Returns
    /// - `Ok(CarWithOwner)` - The converted aggregate
    /// - `Err(DbErr::RecordNotFound)` - The owner row referenced by the car is missing
    pub fn from_entity(
        car: entity::car::Model,
        owner: Option<entity::owner::Model>,
    ) -> Result<Self, DbErr> {
        let owner = owner.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Owner with id {} referenced by car {} not found",
                car.owner_id, car.id
            ))
        })?;

        Ok(Self {
            car: Car::from_entity(car),
            owner: Owner::from_entity(owner),
        })
    }

    /// Converts the aggregate into the API DTO
    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.car.id,
            brand: self.car.brand,
            model: self.car.model,
            color: self.car.color,
            plate: self.car.plate,
            year: self.car.year,
            price: self.car.price,
            owner: self.owner.into_dto(),
        }
    }
}

/// Parameters for creating a new car
///
/// `owner_id` is `None` when the request carried no owner reference; the service
/// layer rejects missing and non-positive references.
#[derive(Debug, Clone)]
pub struct CreateCarParam {
    pub owner_id: Option<i32>,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub plate: String,
    pub year: i32,
    pub price: i32,
}

impl From<CarRequestDto> for CreateCarParam {
    fn from(dto: CarRequestDto) -> Self {
        Self {
            owner_id: dto.owner.map(|owner| owner.id),
            brand: dto.brand,
            model: dto.model,
            color: dto.color,
            plate: dto.plate,
            year: dto.year,
            price: dto.price,
        }
    }
}

/// Parameters for updating an existing car
///
/// The `id` always comes from the request path, never from the body.
#[derive(Debug, Clone)]
pub struct UpdateCarParam {
    pub id: i32,
    pub owner_id: Option<i32>,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub plate: String,
    pub year: i32,
    pub price: i32,
}

impl UpdateCarParam {
    pub fn from_dto(id: i32, dto: CarRequestDto) -> Self {
        Self {
            id,
            owner_id: dto.owner.map(|owner| owner.id),
            brand: dto.brand,
            model: dto.model,
            color: dto.color,
            plate: dto.plate,
            year: dto.year,
            price: dto.price,
        }
    }
}

/// Optional filters applied when listing cars. Unset filters match every car.
#[derive(Debug, Clone, Default)]
pub struct CarFilter {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub year: Option<i32>,
}
