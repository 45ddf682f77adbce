//! Profile photo validation and inline encoding.
//!
//! A selected file is accepted only if its MIME type is `image/*` and it is
//! no larger than the configured ceiling ([`MAX_PHOTO_BYTES`] by default).
//! Accepted files are re-encoded as `data:<mime>;base64,<payload>` strings so
//! the record can carry them inline.

use crate::error::PhotoError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// Default size ceiling for profile photos (2 MB, inclusive).
pub const MAX_PHOTO_BYTES: u64 = 2 * 1024 * 1024;

/// A file picked by the user for the profile photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    file_name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl PhotoFile {
    /// Create from an explicit MIME type
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Create from raw bytes, guessing the MIME type from the file extension
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    /// Read a file from disk
    pub fn from_path(path: &Path) -> Result<Self, PhotoError> {
        let bytes = std::fs::read(path)
            .map_err(|e| PhotoError::Unreadable(format!("{}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::from_bytes(file_name, bytes))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Payload size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Whether the MIME type is an image type
    pub fn is_image(&self) -> bool {
        self.mime_type
            .to_ascii_lowercase()
            .starts_with("image/")
    }

    /// Check type first, then size
    pub fn validate(&self, max_bytes: u64) -> Result<(), PhotoError> {
        if !self.is_image() {
            return Err(PhotoError::NotAnImage {
                mime_type: self.mime_type.clone(),
            });
        }
        if self.size() > max_bytes {
            return Err(PhotoError::TooLarge {
                size: self.size(),
                limit: max_bytes,
            });
        }
        Ok(())
    }

    /// Encode as a `data:` URL without validating
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    /// Validate and encode in one step.
    pub fn into_data_url(self, max_bytes: u64) -> Result<String, PhotoError> {
        self.validate(max_bytes)?;
        Ok(self.to_data_url())
    }
}
