//! SeaORM entity definitions for the owner and car tables.

pub mod prelude;

pub mod car;
pub mod owner;
