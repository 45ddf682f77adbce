//! Main Taller API client.

use crate::error::{ClientError, Result};
use crate::profile::ProfileClient;
use crate::types::ClientConfig;
use async_trait::async_trait;
use reqwest::Client;
use taller_core::{ApiError, ProfileApi, UserRecord};
use tracing::debug;

/// Client for the employee profile backend.
///
/// # Example
///
/// ```ignore
/// use taller_client::{ClientConfig, TallerClient};
///
/// let client = TallerClient::new(ClientConfig::new("http://localhost:8080"))?;
/// let user = client.profile().fetch().await?;
/// ```
#[derive(Debug, Clone)]
pub struct TallerClient {
    http: Client,
    config: ClientConfig,
}

impl TallerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;

        let normalized_config = ClientConfig {
            url,
            profile_path: normalize_path(&config.profile_path),
            update_path: normalize_path(&config.update_path),
            ..config
        };

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(normalized_config.timeout)
            .connect_timeout(normalized_config.connect_timeout)
            .user_agent(format!("Taller/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        debug!(url = %normalized_config.url, "Created profile client");

        Ok(Self {
            http,
            config: normalized_config,
        })
    }

    /// Get the server URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Get the active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get a client for the profile endpoints.
    pub fn profile(&self) -> ProfileClient<'_> {
        ProfileClient::new(
            &self.http,
            &self.config.url,
            &self.config.profile_path,
            &self.config.update_path,
        )
    }
}

#[async_trait]
impl ProfileApi for TallerClient {
    async fn fetch_profile(&self) -> std::result::Result<Option<UserRecord>, ApiError> {
        self.profile().fetch().await.map_err(ApiError::from)
    }

    async fn update_profile(&self, user: &UserRecord) -> std::result::Result<(), ApiError> {
        self.profile().update(user).await.map_err(ApiError::from)
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
