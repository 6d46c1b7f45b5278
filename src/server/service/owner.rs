use std::collections::HashSet;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::owner::OwnerRepository,
    error::AppError,
    model::owner::{CreateOwnerParam, Owner, OwnerWithCars},
};

pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new owner
    ///
    /// # Returns
    /// - `Ok(Owner)` - The stored owner with its generated ID
    /// - `Err(AppError::Conflict)` - An owner with the same surname and name exists
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn create(&self, param: CreateOwnerParam) -> Result<Owner, AppError> {
        let repo = OwnerRepository::new(self.db);

        let surname = param.surname.clone();
        let name = param.name.clone();

        repo.create(param).await.map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Conflict(format!("Owner '{} {}' already exists", surname, name))
            } else {
                err.into()
            }
        })
    }

    /// Gets all owners, keeping only the first occurrence of each ID
    pub async fn get_all(&self) -> Result<Vec<Owner>, AppError> {
        let repo = OwnerRepository::new(self.db);

        let owners = repo.get_all().await?;

        Ok(dedup_by_id(owners))
    }

    /// Gets an owner by ID along with the cars it holds
    pub async fn get_by_id(&self, id: i32) -> Result<Option<OwnerWithCars>, AppError> {
        let repo = OwnerRepository::new(self.db);

        Ok(repo.find_with_cars(id).await?)
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Removes owners whose ID was already seen, preserving order
fn dedup_by_id(owners: Vec<Owner>) -> Vec<Owner> {
    let mut seen = HashSet::new();

    owners
        .into_iter()
        .filter(|owner| seen.insert(owner.id))
        .collect()
}
