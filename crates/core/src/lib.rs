//! Core functionality shared across the AttestGate workspace.
//!
//! This crate provides the shared error type, configuration loading, and
//! structured logging initialization used by the bridge crate and by any
//! host binary embedding it.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{AppConfig, Config};
pub use error::{Error, Result};
