//! Taller Console Library
//!
//! Terminal front-end for the Taller dashboard: configuration loading,
//! dashboard construction and text rendering of the panels.
//!
//! This library exposes the core components for testing purposes.

pub mod app;
pub mod config;
pub mod error;
pub mod render;

// Re-export commonly used types for convenience
pub use app::{build_dashboard, read_photo};
pub use config::ConsoleConfig;
pub use error::{ConsoleError, Result};
