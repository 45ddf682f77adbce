//! Dashboard Events
//!
//! Event-based communication for UI synchronization. Events are queued by
//! the [`Dashboard`](crate::Dashboard) and drained by the front-end:
//! - View switches
//! - Profile load results (including placeholder fallbacks)
//! - Edit form lifecycle (photo selection, submission, cancellation)

use crate::loader::FallbackReason;
use serde::{Deserialize, Serialize};
use taller_core::Panel;

/// Events emitted by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardEvent {
    /// The selected panel changed
    ViewChanged {
        /// Previously selected panel
        from: Panel,
        /// Newly selected panel
        to: Panel,
    },

    /// The profile slot was filled
    ProfileLoaded {
        /// Set when a placeholder record was substituted
        fallback: Option<FallbackReason>,
    },

    /// The profile could not be loaded and no placeholder was used
    ProfileLoadFailed {
        /// Error message
        message: String,
    },

    /// The edit form opened with a fresh draft
    EditStarted,

    /// A photo was accepted into the draft
    PhotoAccepted {
        /// Name of the selected file
        file_name: String,
        /// File size in bytes
        size: u64,
    },

    /// A photo was rejected
    PhotoRejected {
        /// Message shown inline
        message: String,
    },

    /// An update request was sent
    SubmitStarted,

    /// The backend accepted the update
    SubmitSucceeded,

    /// The update was blocked by validation or failed on the backend
    SubmitFailed {
        /// Message shown inline
        message: String,
    },

    /// The edit form was closed without saving
    EditCancelled,
}
