//! Integration tests for the profile view/edit flow
//!
//! These tests drive a `Dashboard` against an in-memory backend and verify
//! what the panels would show and what reaches the server.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use taller_core::{
    ApiError, Panel, PhotoFile, ProfileApi, Role, Status, UserId, UserRecord, MAX_PHOTO_BYTES,
};
use taller_dashboard::{
    Dashboard, DashboardConfig, DashboardError, DashboardEvent, EditorState, FallbackReason,
    LoadState, ProfileCard, ProfileField, SUCCESS_MESSAGE,
};

// ===== Test Helpers =====

/// In-memory backend recording every call
struct MockApi {
    fetch_result: Result<Option<UserRecord>, ApiError>,
    update_result: Result<(), ApiError>,
    fetch_calls: AtomicUsize,
    submitted: Mutex<Vec<UserRecord>>,
}

impl MockApi {
    fn new(
        fetch_result: Result<Option<UserRecord>, ApiError>,
        update_result: Result<(), ApiError>,
    ) -> Arc<Self> {
        Arc::new(Self {
            fetch_result,
            update_result,
            fetch_calls: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
        })
    }

    fn healthy() -> Arc<Self> {
        Self::new(Ok(Some(employee())), Ok(()))
    }

    fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    fn submitted(&self) -> Vec<UserRecord> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileApi for MockApi {
    async fn fetch_profile(&self) -> Result<Option<UserRecord>, ApiError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.fetch_result.clone()
    }

    async fn update_profile(&self, user: &UserRecord) -> Result<(), ApiError> {
        self.submitted.lock().unwrap().push(user.clone());
        self.update_result.clone()
    }
}

fn employee() -> UserRecord {
    UserRecord {
        id: Some(UserId::from(21)),
        name: "Jorge Medina".to_string(),
        email: "jorge@empresa.com".to_string(),
        phone: "+52 55 4321 8765".to_string(),
        department: "Maquinado".to_string(),
        location: "Planta Norte".to_string(),
        role: Role::User,
        status: Status::Active,
        joined: "9/8/2019".to_string(),
        photo: "https://cdn.empresa.com/jorge.png".to_string(),
    }
}

fn dashboard(api: &Arc<MockApi>) -> Dashboard<Arc<MockApi>> {
    Dashboard::new(Arc::clone(api), DashboardConfig::default())
}

async fn editing_dashboard(api: &Arc<MockApi>) -> Dashboard<Arc<MockApi>> {
    let mut dashboard = dashboard(api);
    dashboard.open(Panel::EditProfile).await.unwrap();
    dashboard
}

// ===== Loading =====

#[tokio::test]
async fn test_profile_renders_fetched_fields() {
    let api = MockApi::healthy();
    let mut dashboard = dashboard(&api);

    dashboard.open(Panel::Profile).await.unwrap();

    assert_eq!(dashboard.current_view(), Panel::Profile);
    assert_eq!(dashboard.current_user(), Some(&employee()));
    assert_eq!(
        dashboard.profile_card(),
        Some(ProfileCard::from(&employee()))
    );
    assert_eq!(dashboard.load_state(), &LoadState::Loaded { fallback: None });

    let card = dashboard.profile_card().unwrap();
    assert_eq!(card.name, "Jorge Medina");
    assert_eq!(card.subtitle, "Usuario - Maquinado");
    assert_eq!(card.rows[0].value, "jorge@empresa.com");
    assert_eq!(card.rows[3].value, "9/8/2019");
}

#[tokio::test]
async fn test_fetch_failure_shows_fallback_record() {
    let api = MockApi::new(Err(ApiError::Unreachable("connection refused".into())), Ok(()));
    let mut dashboard = dashboard(&api);

    dashboard.open(Panel::Profile).await.unwrap();

    let user = dashboard.current_user().expect("placeholder record");
    assert_eq!(user.name, "Error al cargar datos");
    assert_eq!(user.email, "contacto@empresa.com");
    assert_eq!(user.status, Status::Inactive);
    assert!(!user.joined.is_empty());

    // No error state: the placeholder is shown as a loaded profile
    assert_eq!(
        dashboard.load_state(),
        &LoadState::Loaded {
            fallback: Some(FallbackReason::LoadFailed)
        }
    );
    assert!(dashboard.loader().last_error().is_some());
}

#[tokio::test]
async fn test_success_false_shows_fallback_record() {
    let api = MockApi::new(
        Err(ApiError::Rejected {
            message: Some("Sesión expirada".into()),
        }),
        Ok(()),
    );
    let mut dashboard = dashboard(&api);

    dashboard.open(Panel::Profile).await.unwrap();

    let card = dashboard.profile_card().unwrap();
    assert_eq!(card.name, "Error al cargar datos");
    assert_eq!(card.status, "Inactivo");
    assert!(!card.active);
}

#[tokio::test]
async fn test_success_without_data_shows_not_found_record() {
    let api = MockApi::new(Ok(None), Ok(()));
    let mut dashboard = dashboard(&api);

    dashboard.open(Panel::Profile).await.unwrap();

    assert_eq!(dashboard.current_user().unwrap().name, "Usuario no encontrado");
    assert_eq!(
        dashboard.drain_events().last(),
        Some(&DashboardEvent::ProfileLoaded {
            fallback: Some(FallbackReason::NotFound)
        })
    );
}

#[tokio::test]
async fn test_disabled_fallback_enters_error_state() {
    let api = MockApi::new(Err(ApiError::Unreachable("timeout".into())), Ok(()));
    let config = DashboardConfig {
        fallback_on_error: false,
        ..DashboardConfig::default()
    };
    let mut dashboard = Dashboard::new(Arc::clone(&api), config);

    dashboard.open(Panel::Profile).await.unwrap();
    assert!(matches!(dashboard.load_state(), LoadState::Error(_)));
    assert!(dashboard.current_user().is_none());

    let result = dashboard.open(Panel::EditProfile).await;
    assert!(matches!(result, Err(DashboardError::NoProfile)));
    assert_eq!(dashboard.current_view(), Panel::Profile);
    assert!(dashboard.editor().is_none());
}

#[tokio::test]
async fn test_cached_user_is_not_refetched() {
    let api = MockApi::healthy();
    let mut dashboard = dashboard(&api);

    dashboard.open(Panel::Profile).await.unwrap();
    dashboard.open(Panel::Inventory).await.unwrap();
    dashboard.open(Panel::Profile).await.unwrap();
    dashboard.open(Panel::EditProfile).await.unwrap();

    assert_eq!(api.fetch_calls(), 1);
}

#[tokio::test]
async fn test_edit_without_cached_user_loads_first() {
    let api = MockApi::healthy();
    let dashboard = editing_dashboard(&api).await;

    assert_eq!(api.fetch_calls(), 1);
    assert_eq!(dashboard.editor().unwrap().draft(), &employee());
}

// ===== Routing =====

#[tokio::test]
async fn test_unknown_key_opens_default_panel() {
    let api = MockApi::healthy();
    let mut dashboard = dashboard(&api);

    dashboard.open_key("machining").await.unwrap();
    assert_eq!(dashboard.current_view(), Panel::Machining);

    let opened = dashboard.open_key("reportes").await.unwrap();
    assert_eq!(opened, Panel::Purchases);
    assert_eq!(dashboard.current_view(), Panel::Purchases);
    assert_eq!(api.fetch_calls(), 0);
}

#[tokio::test]
async fn test_leaving_edit_discards_draft() {
    let api = MockApi::healthy();
    let mut dashboard = editing_dashboard(&api).await;

    dashboard
        .edit_field(ProfileField::Name, "Nombre sin guardar")
        .unwrap();
    dashboard.open(Panel::Projects).await.unwrap();
    assert!(dashboard.editor().is_none());

    dashboard.open(Panel::EditProfile).await.unwrap();
    assert_eq!(dashboard.editor().unwrap().draft().name, "Jorge Medina");
    assert_eq!(dashboard.current_user().unwrap().name, "Jorge Medina");
}

#[tokio::test]
async fn test_reopening_edit_keeps_draft() {
    let api = MockApi::healthy();
    let mut dashboard = editing_dashboard(&api).await;

    dashboard.edit_field(ProfileField::Phone, "+52 1").unwrap();
    dashboard.open_key("editProfile").await.unwrap();

    assert_eq!(dashboard.editor().unwrap().draft().phone, "+52 1");
}

// ===== Validation =====

#[tokio::test]
async fn test_empty_name_blocks_submission() {
    let api = MockApi::healthy();
    let mut dashboard = editing_dashboard(&api).await;

    dashboard.edit_field(ProfileField::Name, "").unwrap();
    let result = dashboard.save_profile().await;

    assert!(matches!(result, Err(DashboardError::Validation(_))));
    assert!(api.submitted().is_empty());

    let editor = dashboard.editor().unwrap();
    assert_eq!(editor.state(), EditorState::Editing);
    assert_eq!(
        editor.error(),
        Some("Nombre y correo electrónico son obligatorios")
    );
    assert_eq!(dashboard.current_view(), Panel::EditProfile);
}

#[tokio::test]
async fn test_empty_email_blocks_submission() {
    let api = MockApi::healthy();
    let mut dashboard = editing_dashboard(&api).await;

    dashboard.edit_field(ProfileField::Email, "").unwrap();

    assert!(dashboard.save_profile().await.is_err());
    assert!(api.submitted().is_empty());
    assert!(dashboard.editor().unwrap().error().is_some());
}

#[tokio::test]
async fn test_missing_id_blocks_submission() {
    let mut user = employee();
    user.id = None;
    let api = MockApi::new(Ok(Some(user)), Ok(()));
    let mut dashboard = editing_dashboard(&api).await;

    let result = dashboard.save_profile().await;

    assert!(matches!(result, Err(DashboardError::Validation(_))));
    assert!(api.submitted().is_empty());
    assert_eq!(
        dashboard.editor().unwrap().error(),
        Some("ID de usuario no encontrado")
    );
}

#[tokio::test]
async fn test_fallback_record_cannot_be_submitted() {
    let api = MockApi::new(Err(ApiError::Unreachable("down".into())), Ok(()));
    let mut dashboard = editing_dashboard(&api).await;

    assert!(dashboard.save_profile().await.is_err());
    assert!(api.submitted().is_empty());
}

// ===== Photo selection =====

#[tokio::test]
async fn test_non_image_photo_is_rejected() {
    let api = MockApi::healthy();
    let mut dashboard = editing_dashboard(&api).await;

    let file = PhotoFile::new("nomina.pdf", "application/pdf", vec![0x25, 0x50, 0x44, 0x46]);
    let result = dashboard.select_photo(file);

    assert!(matches!(result, Err(DashboardError::Photo(_))));
    let editor = dashboard.editor().unwrap();
    assert_eq!(editor.draft().photo, "https://cdn.empresa.com/jorge.png");
    assert_eq!(
        editor.error(),
        Some("Por favor selecciona un archivo de imagen válido")
    );
}

#[tokio::test]
async fn test_oversized_photo_is_rejected() {
    let api = MockApi::healthy();
    let mut dashboard = editing_dashboard(&api).await;

    let file = PhotoFile::new(
        "panorama.jpg",
        "image/jpeg",
        vec![0xFF; MAX_PHOTO_BYTES as usize + 1],
    );
    assert!(dashboard.select_photo(file).is_err());

    let editor = dashboard.editor().unwrap();
    assert_eq!(editor.draft().photo, "https://cdn.empresa.com/jorge.png");
    assert_eq!(editor.error(), Some("La imagen debe ser menor a 2MB"));
    assert!(matches!(
        dashboard.drain_events().last(),
        Some(DashboardEvent::PhotoRejected { .. })
    ));
}

#[tokio::test]
async fn test_accepted_photo_stays_in_draft_until_submit() {
    let api = MockApi::healthy();
    let mut dashboard = editing_dashboard(&api).await;

    let file = PhotoFile::from_bytes("avatar.png", vec![0x89, b'P', b'N', b'G']);
    dashboard.select_photo(file).unwrap();

    let draft_photo = dashboard.editor().unwrap().draft().photo.clone();
    assert!(draft_photo.starts_with("data:image/png;base64,"));
    assert_eq!(
        dashboard.current_user().unwrap().photo,
        "https://cdn.empresa.com/jorge.png"
    );
}

// ===== Submission =====

#[tokio::test(start_paused = true)]
async fn test_successful_update_commits_draft_and_returns_after_delay() {
    let api = MockApi::healthy();
    let mut dashboard = editing_dashboard(&api).await;

    dashboard
        .edit_field(ProfileField::Location, "Planta Sur")
        .unwrap();
    dashboard.set_status(Status::Inactive).unwrap();
    let draft = dashboard.editor().unwrap().draft().clone();
    dashboard.drain_events();

    let start = tokio::time::Instant::now();
    dashboard.save_profile().await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(1500));
    assert_eq!(api.submitted(), vec![draft.clone()]);
    assert_eq!(dashboard.current_user(), Some(&draft));
    assert_eq!(dashboard.current_view(), Panel::Profile);
    assert!(dashboard.editor().is_none());

    assert_eq!(
        dashboard.drain_events(),
        vec![
            DashboardEvent::SubmitStarted,
            DashboardEvent::SubmitSucceeded,
            DashboardEvent::ViewChanged {
                from: Panel::EditProfile,
                to: Panel::Profile
            },
        ]
    );
}

#[tokio::test]
async fn test_editor_shows_banner_once_saved() {
    let api = MockApi::healthy();
    let mut dashboard = editing_dashboard(&api).await;
    let mut slot = taller_dashboard::UserSlot::with_user(employee());

    let mut editor = dashboard.editor().unwrap().clone();
    editor.submit(&*api, &mut slot).await.unwrap();

    assert_eq!(editor.state(), EditorState::Saved);
    assert_eq!(editor.success_message(), Some(SUCCESS_MESSAGE));
    assert!(editor.is_locked());

    // The dashboard's own editor is untouched
    assert!(dashboard.cancel_edit().await.is_ok());
}

#[tokio::test]
async fn test_failed_update_keeps_draft_in_edit_mode() {
    let api = MockApi::new(
        Ok(Some(employee())),
        Err(ApiError::Rejected {
            message: Some("El correo ya está registrado".into()),
        }),
    );
    let mut dashboard = editing_dashboard(&api).await;

    dashboard
        .edit_field(ProfileField::Email, "otro@empresa.com")
        .unwrap();
    let draft = dashboard.editor().unwrap().draft().clone();

    let result = dashboard.save_profile().await;

    match result {
        Err(DashboardError::UpdateFailed { message, .. }) => {
            assert_eq!(message, "El correo ya está registrado");
        }
        other => panic!("Expected UpdateFailed, got: {:?}", other),
    }

    let editor = dashboard.editor().unwrap();
    assert_eq!(editor.draft(), &draft);
    assert_eq!(editor.state(), EditorState::Editing);
    assert_eq!(editor.error(), Some("El correo ya está registrado"));
    assert_eq!(dashboard.current_view(), Panel::EditProfile);
    assert_eq!(dashboard.current_user(), Some(&employee()));
    assert_eq!(api.submitted().len(), 1);
}

#[tokio::test]
async fn test_failed_update_without_message_uses_fallback_text() {
    let api = MockApi::new(
        Ok(Some(employee())),
        Err(ApiError::Status {
            status: 500,
            message: None,
        }),
    );
    let mut dashboard = editing_dashboard(&api).await;

    assert!(dashboard.save_profile().await.is_err());
    assert_eq!(
        dashboard.editor().unwrap().error(),
        Some("Error al actualizar el perfil")
    );

    // Still editable after the failure
    dashboard.set_role(Role::Administrator).unwrap();
    assert_eq!(dashboard.editor().unwrap().draft().role, Role::Administrator);
}

#[tokio::test]
async fn test_cancel_returns_to_profile_without_saving() {
    let api = MockApi::healthy();
    let mut dashboard = editing_dashboard(&api).await;

    dashboard.edit_field(ProfileField::Name, "Descartado").unwrap();
    dashboard.cancel_edit().await.unwrap();

    assert_eq!(dashboard.current_view(), Panel::Profile);
    assert!(dashboard.editor().is_none());
    assert_eq!(dashboard.current_user().unwrap().name, "Jorge Medina");
    assert!(api.submitted().is_empty());
    assert!(dashboard
        .drain_events()
        .contains(&DashboardEvent::EditCancelled));
}

#[tokio::test]
async fn test_editing_requires_open_form() {
    let api = MockApi::healthy();
    let mut dashboard = dashboard(&api);

    assert!(matches!(
        dashboard.edit_field(ProfileField::Name, "x"),
        Err(DashboardError::NotEditing)
    ));
    assert!(matches!(
        dashboard.save_profile().await,
        Err(DashboardError::NotEditing)
    ));
    assert!(matches!(
        dashboard.cancel_edit().await,
        Err(DashboardError::NotEditing)
    ));
}
