/// Core error types for the Taller dashboard
///
/// Display strings are the user-facing messages shown inline by the panels.
use thiserror::Error;

/// A record failed the checks required before an update is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `name` or `email` is empty
    #[error("Nombre y correo electrónico son obligatorios")]
    MissingRequiredFields,

    /// The record carries no identifier
    #[error("ID de usuario no encontrado")]
    MissingId,
}

/// A selected photo was rejected before being placed in the draft.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhotoError {
    /// The file's MIME type is not `image/*`
    #[error("Por favor selecciona un archivo de imagen válido")]
    NotAnImage {
        /// MIME type reported for the file
        mime_type: String,
    },

    /// The file exceeds the size ceiling
    #[error("La imagen debe ser menor a {}", format_limit(.limit))]
    TooLarge {
        /// Size of the file in bytes
        size: u64,
        /// Maximum accepted size in bytes
        limit: u64,
    },

    /// The file could not be read
    #[error("No se pudo leer la imagen: {0}")]
    Unreadable(String),
}

/// Failures reported by a [`crate::ProfileApi`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server could not be reached
    #[error("Servidor no disponible: {0}")]
    Unreachable(String),

    /// The server answered with a non-success HTTP status
    #[error("HTTP error! status: {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// `message` field of the response body, when present
        message: Option<String>,
    },

    /// The server answered `success: false`
    #[error("{}", .message.as_deref().unwrap_or("Error en la respuesta del servidor"))]
    Rejected {
        /// `message` field of the response body, when present
        message: Option<String>,
    },

    /// The response body could not be understood
    #[error("Respuesta inválida del servidor: {0}")]
    InvalidResponse(String),

    /// Any other transport failure
    #[error("Error de red: {0}")]
    Transport(String),
}

impl ApiError {
    /// Message supplied by the server, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Rejected { message } => message
                .as_deref()
                .filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }
}

fn format_limit(limit: &u64) -> String {
    let limit = *limit;
    const MIB: u64 = 1024 * 1024;
    if limit >= MIB && limit % MIB == 0 {
        format!("{}MB", limit / MIB)
    } else {
        format!("{}KB", limit.div_ceil(1024))
    }
}
