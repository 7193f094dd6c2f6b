//! Shared error types for AttestGate operations.

use thiserror::Error;

/// Shared error type for AttestGate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Provider runtime delegation errors
    #[error("Provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for AttestGate operations.
pub type Result<T> = std::result::Result<T, Error>;
