/// Core traits for the Taller dashboard
use crate::error::ApiError;
use crate::types::UserRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// Backend operations behind the profile panels
///
/// Implementers translate transport details (HTTP status, envelopes,
/// connection failures) into [`ApiError`]. The dashboard never sees the
/// wire format.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch the signed-in employee's profile
    ///
    /// Returns `Ok(None)` when the backend reports success without a record.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-success status, or an
    /// explicit `success: false` answer
    async fn fetch_profile(&self) -> Result<Option<UserRecord>, ApiError>;

    /// Submit the full record as the new profile
    ///
    /// # Errors
    /// Returns an error on transport failure, non-success status, or an
    /// explicit `success: false` answer
    async fn update_profile(&self, user: &UserRecord) -> Result<(), ApiError>;
}

#[async_trait]
impl<T: ProfileApi + ?Sized> ProfileApi for Arc<T> {
    async fn fetch_profile(&self) -> Result<Option<UserRecord>, ApiError> {
        (**self).fetch_profile().await
    }

    async fn update_profile(&self, user: &UserRecord) -> Result<(), ApiError> {
        (**self).update_profile(user).await
    }
}
