//! Configuration management for AttestGate.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for a bridge host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// App-instance settings
    pub app: AppConfig,
}

/// Settings for the app instance the bridge targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name of the target app instance
    pub name: String,
    /// Host-level data collection opt-in. When an activation request leaves
    /// the auto-refresh flag unset, this value is used as the default.
    #[serde(default)]
    pub automatic_data_collection_enabled: bool,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Default configuration targeting the default app instance.
    pub fn default_config() -> Self {
        Self {
            app: AppConfig {
                name: "[DEFAULT]".to_string(),
                automatic_data_collection_enabled: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_disables_data_collection() {
        let config = Config::default_config();
        assert_eq!(config.app.name, "[DEFAULT]");
        assert!(!config.app.automatic_data_collection_enabled);
    }

    #[test]
    fn parses_minimal_toml_with_defaulted_flag() {
        let config: Config = toml::from_str("[app]\nname = \"secondary\"\n").unwrap();
        assert_eq!(config.app.name, "secondary");
        assert!(!config.app.automatic_data_collection_enabled);
    }

    #[test]
    fn parses_explicit_data_collection_flag() {
        let config: Config = toml::from_str(
            "[app]\nname = \"secondary\"\nautomatic_data_collection_enabled = true\n",
        )
        .unwrap();
        assert!(config.app.automatic_data_collection_enabled);
    }
}
