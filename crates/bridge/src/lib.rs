//! Bridge between an application layer and an external attestation runtime.
//!
//! The attestation runtime (the vendor SDK establishing the legitimacy of a
//! running app instance) lives entirely outside this crate. What lives here
//! is the delegation surface: an activate call that installs a provider
//! factory and applies the token auto-refresh flag, and a standalone toggle
//! for that flag, both normalized into a uniform typed result.
//!
//! # Core Concepts
//!
//! - **Provider handle**: the shared runtime instance, consumed through the
//!   [`ProviderHandle`] trait and injected at bridge construction so hosts
//!   and tests control which runtime backs the bridge
//! - **Provider factory**: a selectable strategy deciding which attestation
//!   mechanism the runtime installs
//! - **Attestation token**: the opaque credential a provider mints, renewed
//!   proactively when the auto-refresh flag is set
//!
//! # Error Model
//!
//! Every delegated call that fails surfaces as [`BridgeError`] with the
//! stable machine-readable code `internal-error`, carrying the underlying
//! failure detail in its message. No fault escapes a bridge operation
//! unguarded.

pub mod bridge;
pub mod error;
pub mod handle;
pub mod provider;
pub mod token;

pub use bridge::{ActivationRequest, AttestationBridge};
pub use error::{BridgeError, BridgeResult, CODE_INTERNAL_ERROR};
pub use handle::{InMemoryHandle, ProviderHandle};
pub use provider::{
    AttestationProvider, DeviceIntegrityFactory, ProviderFactory, SoftwareProvider,
    SoftwareProviderFactory,
};
pub use token::AttestationToken;

// Re-export core types for convenience
pub use attestgate_core::{Error, Result};
