//! Error types for the condition core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Duplicate condition key '{key}' in groups '{first}' and '{second}'")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    #[error("Invalid member type: {0}")]
    InvalidMemberType(String),

    #[error("Invalid group: {0}")]
    InvalidGroup(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
