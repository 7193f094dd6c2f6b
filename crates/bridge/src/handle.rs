//! Provider handle seam standing in for the vendor attestation runtime.

use std::sync::{Arc, Mutex};

use crate::provider::ProviderFactory;

/// Interface onto the attestation runtime's shared instance.
///
/// The vendor SDK exposes one process-wide instance whose lifecycle it
/// manages itself. The bridge never looks that instance up as ambient
/// global state; a handle is injected at construction, so hosts decide
/// which runtime backs the bridge and tests can substitute fakes.
///
/// Both setters are process-wide and idempotent; last write wins. Any
/// thread-safety beyond that is the runtime's own concern.
pub trait ProviderHandle: Send + Sync {
    /// Install the provider factory selecting the attestation mechanism.
    fn install_provider_factory(
        &self,
        factory: Arc<dyn ProviderFactory>,
    ) -> attestgate_core::Result<()>;

    /// Set whether the runtime proactively renews tokens without explicit
    /// caller action.
    fn set_token_auto_refresh_enabled(&self, enabled: bool) -> attestgate_core::Result<()>;
}

#[derive(Default)]
struct HandleState {
    factory: Option<Arc<dyn ProviderFactory>>,
    auto_refresh_enabled: bool,
}

/// In-memory reference handle used in tests and development hosts.
#[derive(Default)]
pub struct InMemoryHandle {
    inner: Mutex<HandleState>,
}

impl InMemoryHandle {
    /// Create a handle with no factory installed and auto-refresh disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mechanism name of the installed factory, if any.
    pub fn installed_factory_name(&self) -> Option<&'static str> {
        self.inner
            .lock()
            .ok()
            .and_then(|state| state.factory.as_ref().map(|factory| factory.name()))
    }

    /// Current auto-refresh flag.
    pub fn auto_refresh_enabled(&self) -> bool {
        self.inner
            .lock()
            .map(|state| state.auto_refresh_enabled)
            .unwrap_or(false)
    }
}

impl ProviderHandle for InMemoryHandle {
    fn install_provider_factory(
        &self,
        factory: Arc<dyn ProviderFactory>,
    ) -> attestgate_core::Result<()> {
        let mut state = self
            .inner
            .lock()
            .map_err(|_| attestgate_core::Error::Provider("handle state poisoned".to_string()))?;
        tracing::debug!(factory = factory.name(), "provider factory installed");
        state.factory = Some(factory);
        Ok(())
    }

    fn set_token_auto_refresh_enabled(&self, enabled: bool) -> attestgate_core::Result<()> {
        let mut state = self
            .inner
            .lock()
            .map_err(|_| attestgate_core::Error::Provider("handle state poisoned".to_string()))?;
        tracing::debug!(enabled, "token auto-refresh flag updated");
        state.auto_refresh_enabled = enabled;
        Ok(())
    }
}
