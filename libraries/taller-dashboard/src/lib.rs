//! Taller Dashboard - View Routing and Profile Management
//!
//! Platform-agnostic state for the Taller administrative dashboard.
//!
//! This crate provides:
//! - View routing over the closed [`Panel`](taller_core::Panel) set
//! - A single owned user slot shared by the profile panels
//! - Profile loading with placeholder fallback records
//! - Profile editing: draft state, photo selection, validation, submission
//! - Event queue for UI synchronization
//!
//! # Architecture
//!
//! `taller-dashboard` knows nothing about HTTP or terminals:
//! - The backend is reached through the [`ProfileApi`](taller_core::ProfileApi) trait
//! - Front-ends drive a [`Dashboard`] and render its state
//!
//! # Example
//!
//! ```ignore
//! use taller_dashboard::{Dashboard, DashboardConfig};
//! use taller_core::Panel;
//!
//! let mut dashboard = Dashboard::new(api, DashboardConfig::default());
//!
//! // Loads the profile on first display
//! dashboard.open(Panel::Profile).await?;
//!
//! // Edit and save
//! dashboard.open(Panel::EditProfile).await?;
//! dashboard.edit_field(ProfileField::Phone, "+52 55 1234 5678")?;
//! dashboard.save_profile().await?;
//!
//! for event in dashboard.drain_events() {
//!     println!("{:?}", event);
//! }
//! ```

mod card;
mod config;
mod dashboard;
mod editor;
mod error;
pub mod events;
mod loader;
mod router;
mod session;

// Public exports
pub use card::{CardRow, ProfileCard};
pub use config::{DashboardConfig, DEFAULT_SUCCESS_DELAY};
pub use dashboard::Dashboard;
pub use editor::{EditorState, ProfileEditor, ProfileField, SUCCESS_MESSAGE};
pub use error::{DashboardError, Result};
pub use events::DashboardEvent;
pub use loader::{FallbackReason, LoadState, ProfileLoader};
pub use router::ViewRouter;
pub use session::UserSlot;
