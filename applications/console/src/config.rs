/// Console configuration
use crate::error::{ConsoleError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use taller_client::{ClientConfig, DEFAULT_PROFILE_PATH, DEFAULT_UPDATE_PATH};
use taller_core::{Panel, MAX_PHOTO_BYTES};
use taller_dashboard::DashboardConfig;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_dashboard")]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_profile_path")]
    pub profile_path: String,

    #[serde(default = "default_update_path")]
    pub update_path: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardSettings {
    /// Routing key; unknown keys resolve to the default panel
    #[serde(default, deserialize_with = "panel_from_key")]
    pub default_panel: Panel,

    #[serde(default = "default_success_delay_ms")]
    pub success_delay_ms: u64,

    #[serde(default = "default_fallback_on_error")]
    pub fallback_on_error: bool,

    #[serde(default = "default_max_photo_bytes")]
    pub max_photo_bytes: u64,
}

impl ConsoleConfig {
    /// Load configuration from file and environment.
    ///
    /// `path` overrides the default `config.toml` lookup; an explicit path
    /// must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConsoleError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                // Load from config file if it exists
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (e.g. TALLER_API__BASE_URL)
        settings = settings.add_source(
            config::Environment::with_prefix("TALLER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConsoleError::Config(
                "API base URL is required (set TALLER_API__BASE_URL)".to_string(),
            ));
        }

        if self.dashboard.max_photo_bytes == 0 {
            return Err(ConsoleError::Config(
                "max_photo_bytes must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// HTTP client settings
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.base_url.clone())
            .with_paths(self.api.profile_path.clone(), self.api.update_path.clone())
            .with_timeout(Duration::from_secs(self.api.timeout_secs))
    }

    /// Dashboard behavior settings
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            default_panel: self.dashboard.default_panel,
            success_delay: Duration::from_millis(self.dashboard.success_delay_ms),
            fallback_on_error: self.dashboard.fallback_on_error,
            max_photo_bytes: self.dashboard.max_photo_bytes,
        }
    }
}

fn panel_from_key<'de, D>(deserializer: D) -> std::result::Result<Panel, D::Error>
where
    D: Deserializer<'de>,
{
    let key = String::deserialize(deserializer)?;
    let panel = Panel::from_key(&key);
    if Panel::try_from_key(&key).is_none() {
        tracing::warn!(key = %key, fallback = %panel, "Unknown default panel in config");
    }
    Ok(panel)
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        profile_path: default_profile_path(),
        update_path: default_update_path(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_profile_path() -> String {
    DEFAULT_PROFILE_PATH.to_string()
}

fn default_update_path() -> String {
    DEFAULT_UPDATE_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_dashboard() -> DashboardSettings {
    DashboardSettings {
        default_panel: Panel::default(),
        success_delay_ms: default_success_delay_ms(),
        fallback_on_error: default_fallback_on_error(),
        max_photo_bytes: default_max_photo_bytes(),
    }
}

fn default_success_delay_ms() -> u64 {
    1500
}

fn default_fallback_on_error() -> bool {
    true
}

fn default_max_photo_bytes() -> u64 {
    MAX_PHOTO_BYTES
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            dashboard: default_dashboard(),
        }
    }
}
