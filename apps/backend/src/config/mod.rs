//! Environment-driven configuration.
//!
//! Environment variables must be set by the runtime environment (docker
//! `env_file`, or `set -a; . ./.env; set +a` for local dev).

pub mod db;
pub mod server;

pub use db::DbConfig;
pub use server::ServerConfig;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub db: DbConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            db: DbConfig::from_env()?,
        })
    }
}

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::config(format!(
            "Required environment variable '{name}' is not set"
        ))),
    }
}

/// Parse an optional environment variable, falling back to `default` when unset.
pub(crate) fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!("Environment variable '{name}' has an invalid value: '{raw}'"))
        }),
        Err(_) => Ok(default),
    }
}
