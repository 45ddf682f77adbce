//! Profile editing
//!
//! The editor works on a draft copied from the committed record. Nothing
//! reaches the shared slot until the backend accepts the submission.
//!
//! State transitions:
//! - `Editing -> Submitting` once the draft passes validation
//! - `Submitting -> Saved` on success (slot replaced with the draft)
//! - `Submitting -> Editing` on failure (draft kept, error shown)

use crate::error::{DashboardError, Result};
use crate::session::UserSlot;
use taller_core::{ApiError, PhotoFile, ProfileApi, Role, Status, UserRecord};
use tracing::{info, warn};

/// Banner shown after a successful save.
pub const SUCCESS_MESSAGE: &str = "¡Cambios guardados exitosamente!";

const UPDATE_STATUS_FALLBACK: &str = "Error al actualizar el perfil";
const UPDATE_REJECTED_FALLBACK: &str = "Error al guardar los cambios";
const UPDATE_GENERIC_FALLBACK: &str = "Ocurrió un error al guardar los cambios";

/// Editor state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Inputs accept changes
    Editing,
    /// An update request is in flight
    Submitting,
    /// The update succeeded; waiting to return to the profile view
    Saved,
}

/// Free-text fields of the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Department,
    Location,
}

impl ProfileField {
    /// Fields in form order
    pub const ALL: [ProfileField; 5] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Department,
        ProfileField::Location,
    ];

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Nombre",
            Self::Email => "Correo",
            Self::Phone => "Teléfono",
            Self::Department => "Departamento",
            Self::Location => "Ubicación",
        }
    }

    /// Current value of the field in `user`
    pub fn value<'a>(&self, user: &'a UserRecord) -> &'a str {
        match self {
            Self::Name => &user.name,
            Self::Email => &user.email,
            Self::Phone => &user.phone,
            Self::Department => &user.department,
            Self::Location => &user.location,
        }
    }

    fn slot<'a>(&self, user: &'a mut UserRecord) -> &'a mut String {
        match self {
            Self::Name => &mut user.name,
            Self::Email => &mut user.email,
            Self::Phone => &mut user.phone,
            Self::Department => &mut user.department,
            Self::Location => &mut user.location,
        }
    }
}

/// Edit form state for one profile
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    draft: UserRecord,
    state: EditorState,
    error: Option<String>,
    max_photo_bytes: u64,
}

impl ProfileEditor {
    /// Start editing a copy of `committed`
    pub fn begin(committed: &UserRecord, max_photo_bytes: u64) -> Self {
        Self {
            draft: committed.clone(),
            state: EditorState::Editing,
            error: None,
            max_photo_bytes,
        }
    }

    pub fn draft(&self) -> &UserRecord {
        &self.draft
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Inline error message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Success banner, shown once saved
    pub fn success_message(&self) -> Option<&'static str> {
        (self.state == EditorState::Saved).then_some(SUCCESS_MESSAGE)
    }

    /// Whether inputs are disabled
    pub fn is_locked(&self) -> bool {
        self.state != EditorState::Editing
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        *field.slot(&mut self.draft) = value.into();
        Ok(())
    }

    pub fn set_role(&mut self, role: Role) -> Result<()> {
        self.ensure_editable()?;
        self.draft.role = role;
        Ok(())
    }

    pub fn set_status(&mut self, status: Status) -> Result<()> {
        self.ensure_editable()?;
        self.draft.status = status;
        Ok(())
    }

    /// Validate a picked photo and place it in the draft as a `data:` URL.
    ///
    /// On rejection the draft's photo is left as it was and the error
    /// message is shown inline.
    pub fn select_photo(&mut self, photo: PhotoFile) -> Result<()> {
        self.ensure_editable()?;

        match photo.into_data_url(self.max_photo_bytes) {
            Ok(data_url) => {
                self.error = None;
                self.draft.photo = data_url;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Photo rejected");
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Validate the draft and move to `Submitting`.
    ///
    /// Returns the record to send. Validation failures keep the editor in
    /// `Editing` with the message shown; no request should be made.
    pub fn begin_submit(&mut self) -> Result<UserRecord> {
        self.ensure_editable()?;

        if let Err(e) = self.draft.validate_for_update() {
            self.error = Some(e.to_string());
            return Err(e.into());
        }

        self.error = None;
        self.state = EditorState::Submitting;
        Ok(self.draft.clone())
    }

    /// Apply the backend's answer to a submission started with
    /// [`begin_submit`](Self::begin_submit).
    pub fn complete_submit(
        &mut self,
        outcome: std::result::Result<(), ApiError>,
        slot: &mut UserSlot,
    ) -> Result<()> {
        if self.state != EditorState::Submitting {
            return Err(DashboardError::NotEditing);
        }

        match outcome {
            Ok(()) => {
                slot.replace(self.draft.clone());
                self.state = EditorState::Saved;
                info!(user_id = ?self.draft.id, "Profile changes saved");
                Ok(())
            }
            Err(e) => {
                let message = failure_message(&e);
                warn!(error = %e, message = %message, "Error saving profile");
                self.error = Some(message.clone());
                self.state = EditorState::Editing;
                Err(DashboardError::UpdateFailed { message, source: e })
            }
        }
    }

    /// Validate, send, and apply the answer in one step
    pub async fn submit(&mut self, api: &dyn ProfileApi, slot: &mut UserSlot) -> Result<()> {
        let draft = self.begin_submit()?;
        let outcome = api.update_profile(&draft).await;
        self.complete_submit(outcome, slot)
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.is_locked() {
            return Err(DashboardError::Locked);
        }
        Ok(())
    }
}

/// Server-provided message, or a fallback chosen by failure kind
fn failure_message(err: &ApiError) -> String {
    if let Some(message) = err.server_message() {
        return message.to_string();
    }
    match err {
        ApiError::Status { .. } => UPDATE_STATUS_FALLBACK,
        ApiError::Rejected { .. } => UPDATE_REJECTED_FALLBACK,
        _ => UPDATE_GENERIC_FALLBACK,
    }
    .to_string()
}
