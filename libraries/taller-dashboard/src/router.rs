//! View routing
//!
//! The router holds the selected panel and the shared user slot. Switching
//! views is "last key wins"; unknown keys land on the fallback panel.

use crate::session::UserSlot;
use taller_core::Panel;
use tracing::debug;

/// Current view plus the user record shared by the profile panels
#[derive(Debug, Clone)]
pub struct ViewRouter {
    current: Panel,
    fallback: Panel,
    user: UserSlot,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new(Panel::default())
    }
}

impl ViewRouter {
    /// Create a router that starts on, and falls back to, `fallback`
    pub fn new(fallback: Panel) -> Self {
        Self {
            current: fallback,
            fallback,
            user: UserSlot::new(),
        }
    }

    /// Currently selected panel
    pub fn current(&self) -> Panel {
        self.current
    }

    /// Panel used for unknown routing keys
    pub fn fallback(&self) -> Panel {
        self.fallback
    }

    /// Select a panel, returning the previous one
    pub fn set_view(&mut self, panel: Panel) -> Panel {
        let previous = std::mem::replace(&mut self.current, panel);
        debug!(from = %previous, to = %panel, "View changed");
        previous
    }

    /// Resolve a routing key and select the resulting panel.
    ///
    /// Returns the panel that was selected.
    pub fn set_view_key(&mut self, key: &str) -> Panel {
        let panel = self.resolve(key);
        self.set_view(panel);
        panel
    }

    /// Resolve a routing key without switching
    pub fn resolve(&self, key: &str) -> Panel {
        Panel::try_from_key(key).unwrap_or(self.fallback)
    }

    pub fn user(&self) -> &UserSlot {
        &self.user
    }

    pub fn user_mut(&mut self) -> &mut UserSlot {
        &mut self.user
    }
}
