//! Owner data repository for database operations
//!
//! Provides the `OwnerRepository` for creating and reading owners, including the
//! derived collection of cars each owner holds. Entity models are converted into
//! domain models before leaving the repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryOrder,
};

use crate::server::model::{
    car::Car,
    owner::{CreateOwnerParam, Owner, OwnerWithCars},
};

/// Repository providing database operations for owner management.
pub struct OwnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerRepository<'a> {
    /// Creates a new OwnerRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OwnerRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new owner
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the surname and name
    ///
    /// # Returns
    /// - `Ok(Owner)` - The created owner with its generated ID
    /// - `Err(DbErr)` - Database error during insert, including a unique
    ///   constraint violation when the `(surname, name)` pair already exists
    pub async fn create(&self, param: CreateOwnerParam) -> Result<Owner, DbErr> {
        let entity = entity::owner::ActiveModel {
            surname: ActiveValue::Set(param.surname),
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Owner::from_entity(entity))
    }

    /// Gets all owners ordered by ID
    ///
    /// # Returns
    /// - `Ok(Vec<Owner>)` - Every stored owner
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Owner>, DbErr> {
        let owners = entity::prelude::Owner::find()
            .order_by_asc(entity::owner::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Owner::from_entity)
            .collect();

        Ok(owners)
    }

    /// Finds an owner by ID
    ///
    /// # Arguments
    /// - `id` - ID of the owner to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(Owner))` - The requested owner if found
    /// - `Ok(None)` - No owner exists with the provided ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, DbErr> {
        let owner = entity::prelude::Owner::find_by_id(id)
            .one(self.db)
            .await?
            .map(Owner::from_entity);

        Ok(owner)
    }

    /// Finds an owner by ID along with the cars it holds
    ///
    /// Cars are ordered by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the owner to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(OwnerWithCars))` - The owner and its cars if found
    /// - `Ok(None)` - No owner exists with the provided ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_cars(&self, id: i32) -> Result<Option<OwnerWithCars>, DbErr> {
        let Some(owner) = entity::prelude::Owner::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let cars = owner
            .find_related(entity::prelude::Car)
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Car::from_entity)
            .collect();

        Ok(Some(OwnerWithCars {
            owner: Owner::from_entity(owner),
            cars,
        }))
    }
}
