//! Dashboard orchestrator
//!
//! Ties the router, the profile loader and the profile editor together and
//! queues [`DashboardEvent`]s for the front-end.

use crate::card::ProfileCard;
use crate::config::DashboardConfig;
use crate::editor::{EditorState, ProfileEditor, ProfileField};
use crate::error::{DashboardError, Result};
use crate::events::DashboardEvent;
use crate::loader::{LoadState, ProfileLoader};
use crate::router::ViewRouter;
use taller_core::{Panel, PhotoFile, ProfileApi, Role, Status, UserRecord};
use tracing::{debug, info};

/// Dashboard state driven by a front-end
///
/// Only one panel is mounted at a time; the profile panels borrow the user
/// slot from the router for the duration of each operation.
pub struct Dashboard<A> {
    api: A,
    config: DashboardConfig,
    router: ViewRouter,
    loader: ProfileLoader,
    editor: Option<ProfileEditor>,

    // Event queue for UI synchronization
    pending_events: Vec<DashboardEvent>,
}

impl<A: ProfileApi> Dashboard<A> {
    /// Create a dashboard on the configured default panel
    pub fn new(api: A, config: DashboardConfig) -> Self {
        Self {
            api,
            router: ViewRouter::new(config.default_panel),
            loader: ProfileLoader::new(config.fallback_on_error),
            editor: None,
            config,
            pending_events: Vec::new(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Currently selected panel
    pub fn current_view(&self) -> Panel {
        self.router.current()
    }

    /// Committed user record, if loaded
    pub fn current_user(&self) -> Option<&UserRecord> {
        self.router.user().get()
    }

    /// Card for the committed user record
    pub fn profile_card(&self) -> Option<ProfileCard> {
        self.current_user().map(ProfileCard::from)
    }

    pub fn load_state(&self) -> &LoadState {
        self.loader.state()
    }

    pub fn loader(&self) -> &ProfileLoader {
        &self.loader
    }

    /// Open edit form, if any
    pub fn editor(&self) -> Option<&ProfileEditor> {
        self.editor.as_ref()
    }

    // ===== Navigation =====

    /// Switch to `panel` and run its entry action.
    ///
    /// - `Profile` loads the record unless one is already in the slot.
    /// - `EditProfile` does the same, then opens a draft. If no record can be
    ///   loaded the view falls back to `Profile` and `NoProfile` is returned.
    ///
    /// Leaving `EditProfile` discards the draft.
    pub async fn open(&mut self, panel: Panel) -> Result<()> {
        let previous = self.switch_view(panel);

        match panel {
            Panel::Profile => {
                self.ensure_profile().await;
                Ok(())
            }
            Panel::EditProfile => {
                if previous == Panel::EditProfile && self.editor.is_some() {
                    return Ok(());
                }
                self.ensure_profile().await;
                self.begin_edit()
            }
            _ => Ok(()),
        }
    }

    /// Resolve a routing key and open the resulting panel.
    ///
    /// Unknown keys open the default panel. Returns the panel opened.
    pub async fn open_key(&mut self, key: &str) -> Result<Panel> {
        let panel = self.router.resolve(key);
        if Panel::try_from_key(key).is_none() {
            debug!(key = %key, fallback = %panel, "Unknown view key");
        }
        self.open(panel).await?;
        Ok(panel)
    }

    // ===== Editing =====

    pub fn edit_field(&mut self, field: ProfileField, value: impl Into<String>) -> Result<()> {
        self.editor_mut()?.set_field(field, value)
    }

    pub fn set_role(&mut self, role: Role) -> Result<()> {
        self.editor_mut()?.set_role(role)
    }

    pub fn set_status(&mut self, status: Status) -> Result<()> {
        self.editor_mut()?.set_status(status)
    }

    /// Offer a photo to the edit form
    pub fn select_photo(&mut self, photo: PhotoFile) -> Result<()> {
        let file_name = photo.file_name().to_string();
        let size = photo.size();

        let result = self.editor_mut()?.select_photo(photo);
        match &result {
            Ok(()) => self.emit(DashboardEvent::PhotoAccepted { file_name, size }),
            Err(e) => self.emit(DashboardEvent::PhotoRejected {
                message: e.to_string(),
            }),
        }
        result
    }

    /// Submit the draft.
    ///
    /// On success the slot holds the draft, the success banner is shown for
    /// the configured delay, and the view returns to `Profile`. On failure
    /// the form stays open with the draft intact.
    pub async fn save_profile(&mut self) -> Result<()> {
        let editor = self.editor.as_mut().ok_or(DashboardError::NotEditing)?;

        let draft = match editor.begin_submit() {
            Ok(draft) => draft,
            Err(e) => {
                self.emit(DashboardEvent::SubmitFailed {
                    message: e.to_string(),
                });
                return Err(e);
            }
        };
        self.emit(DashboardEvent::SubmitStarted);

        let outcome = self.api.update_profile(&draft).await;

        let editor = self.editor.as_mut().ok_or(DashboardError::NotEditing)?;
        if let Err(e) = editor.complete_submit(outcome, self.router.user_mut()) {
            self.emit(DashboardEvent::SubmitFailed {
                message: e.to_string(),
            });
            return Err(e);
        }
        self.emit(DashboardEvent::SubmitSucceeded);

        tokio::time::sleep(self.config.success_delay).await;
        self.open(Panel::Profile).await
    }

    /// Close the edit form without saving and return to `Profile`
    pub async fn cancel_edit(&mut self) -> Result<()> {
        let state = self
            .editor
            .as_ref()
            .map(ProfileEditor::state)
            .ok_or(DashboardError::NotEditing)?;
        if state == EditorState::Submitting {
            return Err(DashboardError::Locked);
        }

        self.emit(DashboardEvent::EditCancelled);
        self.open(Panel::Profile).await
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events that have been emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<DashboardEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    fn switch_view(&mut self, panel: Panel) -> Panel {
        let previous = self.router.set_view(panel);
        if previous == Panel::EditProfile && panel != Panel::EditProfile {
            self.editor = None;
        }
        if previous != panel {
            info!(from = %previous, to = %panel, "Opened panel");
            self.emit(DashboardEvent::ViewChanged {
                from: previous,
                to: panel,
            });
        }
        previous
    }

    async fn ensure_profile(&mut self) {
        let was_empty = self.router.user().is_empty();
        let state = self.loader.load(&self.api, self.router.user_mut()).await;

        if !was_empty {
            return;
        }
        match state {
            LoadState::Loaded { fallback } => {
                self.emit(DashboardEvent::ProfileLoaded { fallback });
            }
            LoadState::Error(message) => {
                self.emit(DashboardEvent::ProfileLoadFailed { message });
            }
            LoadState::Loading => {}
        }
    }

    fn begin_edit(&mut self) -> Result<()> {
        let Some(user) = self.router.user().get() else {
            self.switch_view(Panel::Profile);
            return Err(DashboardError::NoProfile);
        };

        self.editor = Some(ProfileEditor::begin(user, self.config.max_photo_bytes));
        self.emit(DashboardEvent::EditStarted);
        Ok(())
    }

    fn editor_mut(&mut self) -> Result<&mut ProfileEditor> {
        self.editor.as_mut().ok_or(DashboardError::NotEditing)
    }

    fn emit(&mut self, event: DashboardEvent) {
        self.pending_events.push(event);
    }
}
