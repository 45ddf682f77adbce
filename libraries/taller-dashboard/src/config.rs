use std::time::Duration;
use taller_core::{Panel, MAX_PHOTO_BYTES};

/// How long the success banner stays up before returning to the profile view.
pub const DEFAULT_SUCCESS_DELAY: Duration = Duration::from_millis(1500);

/// Dashboard behavior settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Panel shown at start-up and for unknown routing keys
    pub default_panel: Panel,

    /// Delay between a successful save and the switch back to the profile view
    pub success_delay: Duration,

    /// Substitute a placeholder record when the profile cannot be loaded.
    ///
    /// When disabled, a failed load leaves the slot empty and the loader in
    /// its error state.
    pub fallback_on_error: bool,

    /// Size ceiling for profile photos, in bytes
    pub max_photo_bytes: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_panel: Panel::Purchases,
            success_delay: DEFAULT_SUCCESS_DELAY,
            fallback_on_error: true,
            max_photo_bytes: MAX_PHOTO_BYTES,
        }
    }
}
