//! Business logic layer between controllers and repositories.
//!
//! Services enforce the rules that span repositories, such as resolving a car's
//! owner reference before persisting it, and translate repository results into
//! `AppError` variants that map to HTTP status codes.

pub mod car;
pub mod owner;
