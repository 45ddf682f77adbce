//! Error types for dashboard operations

use taller_core::{ApiError, PhotoError, ValidationError};
use thiserror::Error;

/// Dashboard errors
///
/// Display strings are what the panels show inline.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Draft failed the required-field checks
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Selected photo was rejected
    #[error(transparent)]
    Photo(#[from] PhotoError),

    /// The backend refused or failed the update
    #[error("{message}")]
    UpdateFailed {
        /// Message shown to the user
        message: String,
        /// Underlying API failure
        #[source]
        source: ApiError,
    },

    /// Inputs are locked while a submission is in flight or after it succeeded
    #[error("El formulario está bloqueado mientras se guardan los cambios")]
    Locked,

    /// No edit form is open
    #[error("No hay un perfil en edición")]
    NotEditing,

    /// No profile could be loaded to edit
    #[error("No hay un perfil cargado")]
    NoProfile,
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
