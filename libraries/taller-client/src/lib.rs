//! Taller Client
//!
//! HTTP client library for the employee profile endpoints behind the
//! Taller dashboard.
//!
//! # Endpoints
//!
//! - `GET /empleados` returns `{ success, data?, message? }`
//! - `POST /actualizar` takes the full record and returns `{ success, message? }`
//!
//! # Example
//!
//! ```ignore
//! use taller_client::{ClientConfig, TallerClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TallerClient::new(ClientConfig::new("http://localhost:8080"))?;
//!
//!     if let Some(mut user) = client.profile().fetch().await? {
//!         user.phone = "+52 55 0000 0000".into();
//!         client.profile().update(&user).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod profile;
mod types;

pub use client::TallerClient;
pub use error::{ClientError, Result};
pub use profile::ProfileClient;
pub use types::{ApiEnvelope, ClientConfig, DEFAULT_PROFILE_PATH, DEFAULT_UPDATE_PATH};
