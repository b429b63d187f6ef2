//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration file could not be parsed
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Catalog or input validation error
    #[error("Core error: {0}")]
    CoreError(#[from] sidebar_conditions_core::CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The host directory could not supply site data
    #[error("Directory error: {0}")]
    Directory(#[source] anyhow::Error),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
