//! Employee profile endpoints.

use crate::error::{ClientError, Result};
use crate::types::ApiEnvelope;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use taller_core::UserRecord;
use tracing::{debug, info, warn};

/// Profile read/update client.
pub struct ProfileClient<'a> {
    http: &'a Client,
    profile_url: String,
    update_url: String,
}

impl<'a> ProfileClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &str, profile_path: &str, update_path: &str) -> Self {
        Self {
            http,
            profile_url: format!("{}{}", base_url, profile_path),
            update_url: format!("{}{}", base_url, update_path),
        }
    }

    /// Fetch the current employee profile.
    ///
    /// Returns `Ok(None)` when the server answers `success: true` without `data`.
    pub async fn fetch(&self) -> Result<Option<UserRecord>> {
        debug!(url = %self.profile_url, "Fetching profile");

        let response = self
            .http
            .get(&self.profile_url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let envelope: ApiEnvelope<UserRecord> = read_envelope(response, "profile").await?;

        if !envelope.success {
            warn!(message = ?envelope.message, "Profile fetch rejected by server");
            return Err(ClientError::Rejected {
                message: envelope.message,
            });
        }

        match &envelope.data {
            Some(user) => info!(user_id = ?user.id, "Profile loaded"),
            None => warn!("Server reported success without profile data"),
        }

        Ok(envelope.data)
    }

    /// Submit the full record as the new profile.
    pub async fn update(&self, user: &UserRecord) -> Result<()> {
        debug!(url = %self.update_url, user_id = ?user.id, "Submitting profile update");

        let response = self
            .http
            .post(&self.update_url)
            .json(user)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let envelope: ApiEnvelope<serde_json::Value> = read_envelope(response, "update").await?;

        if !envelope.success {
            warn!(message = ?envelope.message, "Profile update rejected by server");
            return Err(ClientError::Rejected {
                message: envelope.message,
            });
        }

        info!(user_id = ?user.id, "Profile updated");
        Ok(())
    }
}

/// Decode a response envelope, turning non-success statuses into errors.
///
/// Error bodies are searched for a `message` field; bodies that are not JSON
/// yield no message.
async fn read_envelope<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> Result<ApiEnvelope<T>> {
    let status = response.status();

    if status.is_success() {
        return response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse {} response: {}", what, e))
        });
    }

    let error_text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&error_text)
        .ok()
        .and_then(|envelope| envelope.message);

    warn!(status = %status, message = ?message, "{} request failed", what);

    Err(ClientError::ServerError {
        status: status.as_u16(),
        message,
    })
}
