//! Error types for bridge operations.
//!
//! Callers on the far side of the bridge match on machine-readable codes
//! rather than Rust enum variants, so every variant maps to a stable code
//! string alongside its human-readable detail.

use thiserror::Error;

/// Stable code reported when a delegated provider call fails.
pub const CODE_INTERNAL_ERROR: &str = "internal-error";

/// Stable code reported when an activation request fails validation.
pub const CODE_INVALID_REQUEST: &str = "invalid-request";

/// Errors surfaced by bridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A delegated call into the attestation runtime failed. The detail
    /// preserves the underlying failure rather than a fixed placeholder.
    #[error("Internal error: {detail}")]
    Internal {
        /// Description of the underlying runtime failure
        detail: String,
    },

    /// The activation request was rejected before any delegation happened.
    #[error("Invalid activation request: {0}")]
    InvalidRequest(String),
}

impl BridgeError {
    /// Wrap an underlying runtime failure, preserving its detail.
    pub fn internal(detail: impl Into<String>) -> Self {
        BridgeError::Internal {
            detail: detail.into(),
        }
    }

    /// Machine-readable code for cross-boundary error mapping.
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::Internal { .. } => CODE_INTERNAL_ERROR,
            BridgeError::InvalidRequest(_) => CODE_INVALID_REQUEST,
        }
    }
}

/// Result type for bridge operations.
pub type BridgeResult<T> = std::result::Result<T, BridgeError>;
