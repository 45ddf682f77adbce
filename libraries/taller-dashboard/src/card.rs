use taller_core::UserRecord;

/// One labelled line of the profile card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    pub label: &'static str,
    pub value: String,
}

/// View-only rendering model of a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub photo: String,
    pub name: String,
    /// `"<role> - <department>"`
    pub subtitle: String,
    pub status: String,
    /// Drives the green/red status badge
    pub active: bool,
    pub rows: Vec<CardRow>,
}

impl From<&UserRecord> for ProfileCard {
    fn from(user: &UserRecord) -> Self {
        Self {
            photo: user.photo.clone(),
            name: user.name.clone(),
            subtitle: format!("{} - {}", user.role.label(), user.department),
            status: user.status.as_str().to_string(),
            active: user.status.is_active(),
            rows: vec![
                CardRow {
                    label: "Correo",
                    value: user.email.clone(),
                },
                CardRow {
                    label: "Teléfono",
                    value: user.phone.clone(),
                },
                CardRow {
                    label: "Ubicación",
                    value: user.location.clone(),
                },
                CardRow {
                    label: "Fecha de ingreso",
                    value: user.joined.clone(),
                },
            ],
        }
    }
}
