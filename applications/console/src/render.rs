//! Plain-text rendering of dashboard panels.

use std::fmt::Display;
use taller_core::Panel;
use taller_dashboard::{LoadState, ProfileCard, ProfileEditor, ProfileField};

const RULE: &str = "----------------------------------------";

/// Sidebar listing: routing key and title of every panel
pub fn panel_list() -> String {
    let mut out = String::new();
    for panel in Panel::ALL {
        out.push_str(&format!("{:<12} {}\n", panel.key(), panel.title()));
    }
    out
}

/// Heading for a panel
pub fn panel_heading(panel: Panel) -> String {
    format!("{}\n{}\n", panel.title(), RULE)
}

/// Profile card in view mode
pub fn profile_card(card: &ProfileCard) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", card.name));
    out.push_str(&format!("{}\n", card.subtitle));
    let badge = if card.active { "●" } else { "○" };
    out.push_str(&format!("[{} {}]\n", badge, card.status));
    out.push_str(&format!("{}\n", RULE));
    for row in &card.rows {
        field_line(&mut out, row.label, &row.value);
    }
    field_line(&mut out, "Foto", abbreviate_photo(&card.photo));
    out
}

/// Loader outcome when there is no card to show
pub fn load_state(state: &LoadState) -> String {
    match state {
        LoadState::Loading => "Cargando perfil...\n".to_string(),
        LoadState::Error(message) => format!("Error: {}\n", message),
        LoadState::Loaded { .. } => String::new(),
    }
}

/// Edit form with its inline banner
pub fn editor(editor: &ProfileEditor) -> String {
    let mut out = String::new();
    if let Some(error) = editor.error() {
        out.push_str(&format!("! {}\n", error));
    }
    if let Some(banner) = editor.success_message() {
        out.push_str(&format!("✓ {}\n", banner));
    }

    let draft = editor.draft();
    for field in ProfileField::ALL {
        field_line(&mut out, field.label(), field.value(draft));
    }
    field_line(&mut out, "Rol", draft.role.label());
    field_line(&mut out, "Estado", draft.status);
    field_line(&mut out, "Foto", abbreviate_photo(&draft.photo));
    out
}

fn field_line(out: &mut String, label: &str, value: impl Display) {
    let label = format!("{}:", label);
    out.push_str(&format!("{:<18} {}\n", label, value));
}

/// Inline `data:` URLs are reduced to their MIME type and payload size
fn abbreviate_photo(photo: &str) -> String {
    match photo.strip_prefix("data:") {
        Some(rest) => {
            let (mime, payload) = rest.split_once(";base64,").unwrap_or((rest, ""));
            format!("{} en línea ({} caracteres)", mime, payload.len())
        }
        None => photo.to_string(),
    }
}
