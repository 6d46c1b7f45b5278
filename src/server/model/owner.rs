//! Domain & parameter models for owner operations
//!
//! Defines the owner domain model, the owner-with-cars aggregate returned on
//! single-owner lookups, the owner creation parameters, and conversions from
//! entities and into DTOs.

use crate::{
    model::owner::{CreateOwnerDto, OwnerDto},
    server::model::car::Car,
};

/// The owner domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: i32,
    pub surname: String,
    pub name: String,
}

impl Owner {
    /// Converts an entity model to the owner domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Owner` - The converted owner domain model
    pub fn from_entity(entity: entity::owner::Model) -> Self {
        Self {
            id: entity.id,
            surname: entity.surname,
            name: entity.name,
        }
    }

    /// Converts the owner domain model into a DTO without its cars
    pub fn into_dto(self) -> OwnerDto {
        OwnerDto {
            id: self.id,
            surname: self.surname,
            name: self.name,
            cars: None,
        }
    }
}

/// An owner together with the cars it holds.
///
/// The car collection is derived from the car table and is never persisted
/// through the owner.
#[derive(Debug, Clone)]
pub struct OwnerWithCars {
    pub owner: Owner,
    pub cars: Vec<Car>,
}

impl OwnerWithCars {
    /// Converts the aggregate into a DTO carrying the `voitures` collection
    pub fn into_dto(self) -> OwnerDto {
        OwnerDto {
            cars: Some(self.cars.into_iter().map(Car::into_owned_dto).collect()),
            ..self.owner.into_dto()
        }
    }
}

/// Parameters for creating a new owner
#[derive(Debug, Clone)]
pub struct CreateOwnerParam {
    pub surname: String,
    pub name: String,
}

impl From<CreateOwnerDto> for CreateOwnerParam {
    fn from(dto: CreateOwnerDto) -> Self {
        Self {
            surname: dto.surname,
            name: dto.name,
        }
    }
}
