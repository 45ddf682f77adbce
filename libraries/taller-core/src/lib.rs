//! Taller Core
//!
//! Platform-agnostic domain types, validation and API traits for the Taller
//! administrative dashboard.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `Role`, `Status`, `Panel`
//! - **Photo handling**: `PhotoFile` validation and inline `data:` encoding
//! - **Core Traits**: `ProfileApi`, the seam between the dashboard and the backend
//! - **Error Handling**: `ValidationError`, `PhotoError`, `ApiError`
//!
//! # Example
//!
//! ```rust
//! use taller_core::{Panel, Status, UserId, UserRecord};
//!
//! let mut user = UserRecord::new("Ana López", "ana@empresa.com");
//! user.id = Some(UserId::from("42"));
//! user.status = Status::Active;
//! assert!(user.validate_for_update().is_ok());
//!
//! assert_eq!(Panel::from_key("machining"), Panel::Machining);
//! assert_eq!(Panel::from_key("nope"), Panel::Purchases);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod photo;
pub mod traits;
pub mod types;

pub use error::{ApiError, PhotoError, ValidationError};
pub use photo::{PhotoFile, MAX_PHOTO_BYTES};
pub use traits::ProfileApi;
pub use types::{
    format_joined_date, today_joined_date, Panel, Role, Status, UserId, UserRecord, DEFAULT_PHOTO,
};
