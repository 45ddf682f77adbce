//! Types for Taller API requests and responses.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Path of the profile read endpoint.
pub const DEFAULT_PROFILE_PATH: &str = "/empleados";

/// Path of the profile update endpoint.
pub const DEFAULT_UPDATE_PATH: &str = "/actualizar";

/// Configuration for connecting to the profile backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "http://localhost:8080")
    pub url: String,
    /// Path of the profile read endpoint
    pub profile_path: String,
    /// Path of the profile update endpoint
    pub update_path: String,
    /// Total request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a config with the default endpoint paths and timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            profile_path: DEFAULT_PROFILE_PATH.to_string(),
            update_path: DEFAULT_UPDATE_PATH.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Override the endpoint paths.
    pub fn with_paths(mut self, profile_path: impl Into<String>, update_path: impl Into<String>) -> Self {
        self.profile_path = profile_path.into();
        self.update_path = update_path.into();
        self
    }

    /// Override the total request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Response envelope shared by both endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}
