//! Carfinder Core - Configuration and query handling
//!
//! This crate provides the building blocks shared by every Carfinder crate:
//! startup configuration, normalization of user queries into make/model
//! lookup keys, and tracing setup.

pub mod config;
pub mod query;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::{ApiCredentials, ApiKey, CarfinderConfig, ProviderConfig, ServerConfig};
pub use query::{VehicleQuery, normalize};

/// Errors raised while assembling configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable held a value that could not be parsed.
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// Environment variable held a URL that is not absolute http(s).
    #[error("Invalid URL for {key}: '{value}'")]
    InvalidUrl { key: String, value: String },
}

/// Convenience type alias for Results with ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;
