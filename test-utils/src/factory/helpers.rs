//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner and a car belonging to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, car))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_car_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::owner::Model, entity::car::Model), DbErr> {
    let owner = crate::factory::owner::create_owner(db).await?;
    let car = crate::factory::car::create_car(db, owner.id).await?;

    Ok((owner, car))
}
