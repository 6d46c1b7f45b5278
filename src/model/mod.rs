//! JSON data transfer objects exchanged over the HTTP API.
//!
//! Field names follow the wire format consumed by the browser frontend
//! (`proprietaire`, `voiture`, ...), while the Rust fields use English names.

pub mod api;
pub mod car;
pub mod owner;
