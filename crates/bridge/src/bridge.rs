//! The attestation bridge: delegation of activation and refresh toggles.

use std::sync::Arc;

use attestgate_core::Config;
use tracing::{debug, warn};

use crate::error::{BridgeError, BridgeResult};
use crate::handle::ProviderHandle;
use crate::provider::ProviderFactory;

/// Activation request, constructed per call and discarded after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationRequest {
    app_name: String,
    provider_site_key: String,
    auto_refresh_enabled: bool,
}

impl ActivationRequest {
    /// Build a request. `app_name` must be non-empty; the site key is an
    /// opaque credential forwarded verbatim and may be empty.
    pub fn new(
        app_name: impl Into<String>,
        provider_site_key: impl Into<String>,
        auto_refresh_enabled: bool,
    ) -> BridgeResult<Self> {
        let app_name = app_name.into();
        if app_name.is_empty() {
            return Err(BridgeError::InvalidRequest(
                "app name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            app_name,
            provider_site_key: provider_site_key.into(),
            auto_refresh_enabled,
        })
    }

    /// Build a request resolving an unset auto-refresh flag from the host
    /// configuration's data-collection opt-in.
    pub fn with_config_default(
        app_name: impl Into<String>,
        provider_site_key: impl Into<String>,
        auto_refresh_enabled: Option<bool>,
        config: &Config,
    ) -> BridgeResult<Self> {
        let resolved =
            auto_refresh_enabled.unwrap_or(config.app.automatic_data_collection_enabled);
        Self::new(app_name, provider_site_key, resolved)
    }

    /// Name of the target app instance.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Opaque provider credential, forwarded verbatim.
    pub fn provider_site_key(&self) -> &str {
        &self.provider_site_key
    }

    /// Requested auto-refresh flag.
    pub fn auto_refresh_enabled(&self) -> bool {
        self.auto_refresh_enabled
    }
}

/// Bridge from the application layer onto the attestation runtime.
///
/// Holds a reference to the runtime handle and a fixed factory choice; it
/// retains no other state. The factory is installed as-is on every
/// activation: neither the request's site key nor its app name selects a
/// mechanism today, since a single shared handle exists per process.
pub struct AttestationBridge {
    handle: Arc<dyn ProviderHandle>,
    factory: Arc<dyn ProviderFactory>,
}

impl AttestationBridge {
    /// Create a bridge over an injected runtime handle with a fixed
    /// provider-factory choice.
    pub fn new(handle: Arc<dyn ProviderHandle>, factory: Arc<dyn ProviderFactory>) -> Self {
        Self { handle, factory }
    }

    /// Activate attestation for an app instance.
    ///
    /// Installs the bridge's provider factory on the runtime handle, then
    /// applies the requested auto-refresh flag. Both writes are
    /// process-wide. Resolves with no payload on success; any failure from
    /// either delegated call maps to the `internal-error` code with the
    /// underlying detail preserved.
    pub async fn activate(&self, request: &ActivationRequest) -> BridgeResult<()> {
        debug!(
            app = %request.app_name,
            factory = self.factory.name(),
            auto_refresh = request.auto_refresh_enabled,
            "activating attestation"
        );

        self.handle
            .install_provider_factory(Arc::clone(&self.factory))
            .map_err(|e| self.delegation_failed("install_provider_factory", e))?;

        self.handle
            .set_token_auto_refresh_enabled(request.auto_refresh_enabled)
            .map_err(|e| self.delegation_failed("set_token_auto_refresh_enabled", e))?;

        Ok(())
    }

    /// Set whether the runtime proactively renews tokens, overriding any
    /// value applied during [`activate`](Self::activate).
    ///
    /// `app_name` does not route: the flag lives on the single shared
    /// handle, and the last write wins.
    pub fn set_token_auto_refresh_enabled(
        &self,
        app_name: &str,
        enabled: bool,
    ) -> BridgeResult<()> {
        debug!(app = %app_name, enabled, "setting token auto-refresh");

        self.handle
            .set_token_auto_refresh_enabled(enabled)
            .map_err(|e| self.delegation_failed("set_token_auto_refresh_enabled", e))
    }

    fn delegation_failed(&self, call: &str, cause: attestgate_core::Error) -> BridgeError {
        warn!(call, %cause, "delegated runtime call failed");
        BridgeError::internal(cause.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CODE_INTERNAL_ERROR;
    use crate::handle::InMemoryHandle;
    use crate::provider::SoftwareProviderFactory;

    /// Handle fake whose delegated calls always fail, standing in for
    /// vendor runtime faults.
    struct FailingHandle;

    impl ProviderHandle for FailingHandle {
        fn install_provider_factory(
            &self,
            _factory: Arc<dyn ProviderFactory>,
        ) -> attestgate_core::Result<()> {
            Err(attestgate_core::Error::Provider(
                "install rejected by runtime".to_string(),
            ))
        }

        fn set_token_auto_refresh_enabled(&self, _enabled: bool) -> attestgate_core::Result<()> {
            Err(attestgate_core::Error::Provider(
                "flag rejected by runtime".to_string(),
            ))
        }
    }

    fn test_bridge(handle: Arc<dyn ProviderHandle>) -> AttestationBridge {
        AttestationBridge::new(handle, Arc::new(SoftwareProviderFactory::default()))
    }

    #[tokio::test]
    async fn activate_installs_factory_and_applies_flag() {
        let handle = Arc::new(InMemoryHandle::new());
        let bridge = test_bridge(handle.clone());
        let request = ActivationRequest::new("app1", "key-abc", true).unwrap();

        bridge.activate(&request).await.unwrap();

        assert_eq!(handle.installed_factory_name(), Some("software"));
        assert!(handle.auto_refresh_enabled());
    }

    #[tokio::test]
    async fn activate_failure_maps_to_internal_error_with_detail() {
        let bridge = test_bridge(Arc::new(FailingHandle));
        let request = ActivationRequest::new("app1", "key-abc", true).unwrap();

        let err = bridge.activate(&request).await.unwrap_err();

        assert_eq!(err.code(), CODE_INTERNAL_ERROR);
        assert!(err.to_string().contains("install rejected by runtime"));
    }

    #[tokio::test]
    async fn activate_with_different_app_names_is_indistinguishable() {
        let handle = Arc::new(InMemoryHandle::new());
        let bridge = test_bridge(handle.clone());

        let first = ActivationRequest::new("app1", "key-abc", true).unwrap();
        bridge.activate(&first).await.unwrap();
        let flag_after_first = handle.auto_refresh_enabled();
        let factory_after_first = handle.installed_factory_name();

        let second = ActivationRequest::new("app2", "key-abc", true).unwrap();
        bridge.activate(&second).await.unwrap();

        assert_eq!(handle.auto_refresh_enabled(), flag_after_first);
        assert_eq!(handle.installed_factory_name(), factory_after_first);
    }

    #[test]
    fn refresh_toggle_is_last_write_wins() {
        let handle = Arc::new(InMemoryHandle::new());
        let bridge = test_bridge(handle.clone());

        bridge.set_token_auto_refresh_enabled("app1", true).unwrap();
        bridge
            .set_token_auto_refresh_enabled("app1", false)
            .unwrap();

        assert!(!handle.auto_refresh_enabled());
    }

    #[test]
    fn refresh_toggle_failure_surfaces_typed_error() {
        let bridge = test_bridge(Arc::new(FailingHandle));

        let err = bridge
            .set_token_auto_refresh_enabled("app1", true)
            .unwrap_err();

        assert_eq!(err.code(), CODE_INTERNAL_ERROR);
        assert!(err.to_string().contains("flag rejected by runtime"));
    }

    #[test]
    fn empty_app_name_is_rejected_before_delegation() {
        let err = ActivationRequest::new("", "key-abc", true).unwrap_err();
        assert_eq!(err.code(), "invalid-request");
    }

    #[test]
    fn unset_auto_refresh_defaults_from_config() {
        let config = Config::default_config();

        let defaulted =
            ActivationRequest::with_config_default("app1", "key-abc", None, &config).unwrap();
        assert!(!defaulted.auto_refresh_enabled());

        let explicit =
            ActivationRequest::with_config_default("app1", "key-abc", Some(true), &config)
                .unwrap();
        assert!(explicit.auto_refresh_enabled());
    }
}
