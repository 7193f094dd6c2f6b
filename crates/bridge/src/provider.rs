//! Provider seams: token-minting strategies and the factories selecting them.
//!
//! A [`ProviderFactory`] names an attestation mechanism and creates the
//! [`AttestationProvider`] implementing it. The bridge installs exactly one
//! factory on the runtime handle; which mechanism actually mints tokens is
//! decided here, not inside the bridge.

use async_trait::async_trait;
use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::token::AttestationToken;

/// Default lifetime for software-minted tokens (30 minutes).
pub const DEFAULT_SOFTWARE_TOKEN_TTL_MS: u64 = 1_800_000;

/// Pluggable token-minting strategy installed behind a provider handle.
#[async_trait]
pub trait AttestationProvider: Send + Sync {
    /// Mint a fresh attestation token.
    async fn get_token(&self) -> attestgate_core::Result<AttestationToken>;
}

/// Selectable strategy determining which attestation mechanism is installed.
pub trait ProviderFactory: Send + Sync {
    /// Stable mechanism name, used for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Create a provider instance for this mechanism.
    fn create(&self) -> Arc<dyn AttestationProvider>;
}

/// Software provider minting random opaque tokens.
///
/// Carries no device-integrity signal; for tests and development only,
/// mirroring a custom-provider path rather than a platform integrity
/// service.
#[derive(Debug, Clone)]
pub struct SoftwareProvider {
    token_ttl_millis: u64,
}

impl SoftwareProvider {
    /// Create a software provider minting tokens with the given lifetime.
    pub fn new(token_ttl_millis: u64) -> Self {
        Self { token_ttl_millis }
    }
}

impl Default for SoftwareProvider {
    fn default() -> Self {
        Self::new(DEFAULT_SOFTWARE_TOKEN_TTL_MS)
    }
}

#[async_trait]
impl AttestationProvider for SoftwareProvider {
    async fn get_token(&self) -> attestgate_core::Result<AttestationToken> {
        let mut material = [0u8; 32];
        OsRng.fill_bytes(&mut material);

        let now = current_timestamp_ms();
        let token = AttestationToken::new(hex::encode(material), now + self.token_ttl_millis);
        tracing::debug!(expires_at = token.expire_time_millis, "minted software token");
        Ok(token)
    }
}

/// Factory for the software attestation mechanism.
#[derive(Debug, Clone)]
pub struct SoftwareProviderFactory {
    token_ttl_millis: u64,
}

impl SoftwareProviderFactory {
    /// Create a factory whose providers mint tokens with the given lifetime.
    pub fn new(token_ttl_millis: u64) -> Self {
        Self { token_ttl_millis }
    }
}

impl Default for SoftwareProviderFactory {
    fn default() -> Self {
        Self::new(DEFAULT_SOFTWARE_TOKEN_TTL_MS)
    }
}

impl ProviderFactory for SoftwareProviderFactory {
    fn name(&self) -> &'static str {
        "software"
    }

    fn create(&self) -> Arc<dyn AttestationProvider> {
        Arc::new(SoftwareProvider::new(self.token_ttl_millis))
    }
}

/// Factory for the platform device-integrity mechanism.
///
/// On hosts without the platform integrity service linked, the created
/// provider reports the missing backend as a typed failure instead of
/// silently doing nothing.
#[derive(Debug, Clone, Default)]
pub struct DeviceIntegrityFactory;

impl DeviceIntegrityFactory {
    /// Create the device-integrity factory.
    pub fn new() -> Self {
        Self
    }
}

impl ProviderFactory for DeviceIntegrityFactory {
    fn name(&self) -> &'static str {
        "device-integrity"
    }

    fn create(&self) -> Arc<dyn AttestationProvider> {
        Arc::new(DeviceIntegrityProvider)
    }
}

struct DeviceIntegrityProvider;

#[async_trait]
impl AttestationProvider for DeviceIntegrityProvider {
    async fn get_token(&self) -> attestgate_core::Result<AttestationToken> {
        tracing::warn!("device-integrity backend not linked on this platform");
        Err(attestgate_core::Error::Provider(
            "device-integrity backend not linked on this platform".to_string(),
        ))
    }
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_millis() as u64
}
