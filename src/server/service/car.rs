use sea_orm::DatabaseConnection;

use crate::server::{
    data::{car::CarRepository, owner::OwnerRepository},
    error::AppError,
    model::{
        car::{CarFilter, CarWithOwner, CreateCarParam, UpdateCarParam},
        owner::Owner,
    },
};

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a car after resolving its owner reference
    ///
    /// The stored car always points at the owner as found in the database,
    /// whatever owner fields the request carried.
    ///
    /// # Returns
    /// - `Ok(CarWithOwner)` - The created car and its resolved owner
    /// - `Err(AppError::BadRequest)` - Owner reference missing, non-positive, or unknown
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateCarParam) -> Result<CarWithOwner, AppError> {
        let owner = self.resolve_owner(param.owner_id).await?;

        let car = CarRepository::new(self.db).create(owner.id, param).await?;

        Ok(CarWithOwner { car, owner })
    }

    /// Gets all cars matching the filter with their owners
    pub async fn get_all(&self, filter: CarFilter) -> Result<Vec<CarWithOwner>, AppError> {
        let repo = CarRepository::new(self.db);

        Ok(repo.get_all(filter).await?)
    }

    /// Gets a specific car by ID with its owner
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CarWithOwner>, AppError> {
        let repo = CarRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Overwrites an existing car
    ///
    /// The owner reference is validated with the same rules as on creation.
    ///
    /// # Returns
    /// - `Ok(Some(CarWithOwner))` - The updated car and its resolved owner
    /// - `Ok(None)` - No car exists with the provided ID, including one deleted
    ///   while the update was in progress
    /// - `Err(AppError::BadRequest)` - Owner reference missing, non-positive, or unknown
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, param: UpdateCarParam) -> Result<Option<CarWithOwner>, AppError> {
        let repo = CarRepository::new(self.db);

        if !repo.exists(param.id).await? {
            return Ok(None);
        }

        let owner = self.resolve_owner(param.owner_id).await?;

        let car = repo.update(owner.id, param).await?;

        Ok(car.map(|car| CarWithOwner { car, owner }))
    }

    /// Deletes a car
    ///
    /// Returns true if deleted, false if no car exists with the provided ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CarRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    /// Resolves an owner reference to the stored owner
    ///
    /// # Returns
    /// - `Ok(Owner)` - The owner as stored in the database
    /// - `Err(AppError::BadRequest)` - No reference, a non-positive ID, or no such owner
    async fn resolve_owner(&self, owner_id: Option<i32>) -> Result<Owner, AppError> {
        let owner_id = match owner_id {
            Some(id) if id > 0 => id,
            _ => return Err(AppError::BadRequest("A valid owner is required".to_string())),
        };

        OwnerRepository::new(self.db)
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Owner not found".to_string()))
    }
}
