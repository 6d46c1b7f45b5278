//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows into the database and handle the
//! owner dependency of cars through the helpers module.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let owner = factory::create_owner(&db).await?;
//!     let car = factory::create_car(&db, owner.id).await?;
//!
//!     // Create with all dependencies
//!     let (owner, car) = factory::helpers::create_car_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let owner = factory::owner::OwnerFactory::new(&db)
//!     .surname("Bani")
//!     .name("Najat")
//!     .build()
//!     .await?;
//! ```

pub mod car;
pub mod helpers;
pub mod owner;

pub use car::create_car;
pub use owner::create_owner;
