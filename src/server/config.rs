use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

/// Address the HTTP server listens on when `BIND_ADDRESS` is unset.
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            database_url,
            bind_address: parse_bind_address(&bind_address)?,
        })
    }
}

/// Parses the listener address from its string form
///
/// # Returns
/// - `Ok(SocketAddr)` - The parsed socket address
/// - `Err(ConfigError::InvalidEnvVar)` - The value is not a `host:port` socket address
fn parse_bind_address(value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|e| ConfigError::InvalidEnvVar {
        name: "BIND_ADDRESS".to_string(),
        reason: format!("'{}' is not a socket address: {}", value, e),
    })
}
