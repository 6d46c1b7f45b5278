//! Owner factory for creating test owner entities.
//!
//! This module provides factory methods for creating owner entities with sensible
//! defaults. Each factory-built owner gets a unique surname so the `(surname, name)`
//! uniqueness constraint never trips accidentally.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test owners with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::owner::OwnerFactory;
///
/// let owner = OwnerFactory::new(&db)
///     .surname("Bani")
///     .name("Najat")
///     .build()
///     .await?;
/// ```
pub struct OwnerFactory<'a> {
    db: &'a DatabaseConnection,
    surname: String,
    name: String,
}

impl<'a> OwnerFactory<'a> {
    /// Creates a new OwnerFactory with default values.
    ///
    /// Defaults:
    /// - surname: `"Surname {id}"` where id is auto-incremented
    /// - name: fixture default name
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `OwnerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            surname: format!("Surname {}", id),
            name: fixture::owner::DEFAULT_NAME.to_string(),
        }
    }

    /// Sets the surname for the owner.
    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    /// Sets the name for the owner.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the owner entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::owner::Model)` - Created owner entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::owner::Model, DbErr> {
        entity::owner::ActiveModel {
            id: ActiveValue::NotSet,
            surname: ActiveValue::Set(self.surname),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an owner with default values.
///
/// Shorthand for `OwnerFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::owner::Model)` - Created owner entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_owner(db: &DatabaseConnection) -> Result<entity::owner::Model, DbErr> {
    OwnerFactory::new(db).build().await
}
