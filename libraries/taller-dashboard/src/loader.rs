//! Profile loading
//!
//! The loader fetches the profile once per session. A failed fetch is shown
//! as a placeholder record rather than an error, unless fallback is disabled.

use crate::session::UserSlot;
use serde::{Deserialize, Serialize};
use taller_core::{today_joined_date, ApiError, ProfileApi, UserRecord};
use tracing::{info, warn};

/// Why a placeholder record is being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackReason {
    /// The fetch failed or the server answered `success: false`
    LoadFailed,
    /// The server answered `success: true` without a record
    NotFound,
}

/// Loader state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for the first fetch
    Loading,
    /// A record is in the slot
    Loaded {
        /// Set when the record is a placeholder
        fallback: Option<FallbackReason>,
    },
    /// The fetch failed and no placeholder was substituted
    Error(String),
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Fetches the profile into the user slot on first display
#[derive(Debug, Clone)]
pub struct ProfileLoader {
    state: LoadState,
    fallback_on_error: bool,
    last_error: Option<ApiError>,
}

impl Default for ProfileLoader {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ProfileLoader {
    pub fn new(fallback_on_error: bool) -> Self {
        Self {
            state: LoadState::Loading,
            fallback_on_error,
            last_error: None,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Failure behind the most recent placeholder or error state
    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    /// Ensure the slot holds a record.
    ///
    /// A record already in the slot is reused without contacting the server.
    pub async fn load(&mut self, api: &dyn ProfileApi, slot: &mut UserSlot) -> LoadState {
        if !slot.is_empty() {
            if !self.state.is_loaded() {
                self.state = LoadState::Loaded { fallback: None };
            }
            return self.state.clone();
        }

        self.state = LoadState::Loading;

        match api.fetch_profile().await {
            Ok(Some(user)) => {
                info!(user_id = ?user.id, "Profile loaded");
                slot.replace(user);
                self.last_error = None;
                self.state = LoadState::Loaded { fallback: None };
            }
            Ok(None) => {
                warn!("Profile response carried no record, showing placeholder");
                slot.replace(UserRecord::not_found());
                self.last_error = None;
                self.state = LoadState::Loaded {
                    fallback: Some(FallbackReason::NotFound),
                };
            }
            Err(e) if self.fallback_on_error => {
                warn!(error = %e, "Error fetching user data, showing placeholder");
                slot.replace(UserRecord::load_failed(today_joined_date()));
                self.last_error = Some(e);
                self.state = LoadState::Loaded {
                    fallback: Some(FallbackReason::LoadFailed),
                };
            }
            Err(e) => {
                warn!(error = %e, "Error fetching user data");
                self.state = LoadState::Error(e.to_string());
                self.last_error = Some(e);
            }
        }

        self.state.clone()
    }
}
