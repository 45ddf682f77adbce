/// Dashboard panel identifiers
use serde::{Deserialize, Serialize};

/// A full-screen content view selectable from the header or sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Panel {
    /// Purchases summary (default panel)
    #[default]
    #[serde(rename = "purchases")]
    Purchases,
    /// File manager
    #[serde(rename = "FileManager")]
    FileManager,
    /// Project progress
    #[serde(rename = "projects")]
    Projects,
    /// Inventory charts
    #[serde(rename = "inventory")]
    Inventory,
    /// Machining progress
    #[serde(rename = "machining")]
    Machining,
    /// View-only user profile
    #[serde(rename = "profile")]
    Profile,
    /// User profile edit form
    #[serde(rename = "editProfile")]
    EditProfile,
}

impl Panel {
    /// Every panel, in sidebar order.
    pub const ALL: [Panel; 7] = [
        Panel::Purchases,
        Panel::FileManager,
        Panel::Projects,
        Panel::Inventory,
        Panel::Machining,
        Panel::Profile,
        Panel::EditProfile,
    ];

    /// Routing key used by navigation links
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Purchases => "purchases",
            Self::FileManager => "FileManager",
            Self::Projects => "projects",
            Self::Inventory => "inventory",
            Self::Machining => "machining",
            Self::Profile => "profile",
            Self::EditProfile => "editProfile",
        }
    }

    /// Heading shown at the top of the panel
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Purchases => "Compras",
            Self::FileManager => "Gestor de archivos",
            Self::Projects => "Progreso de proyectos",
            Self::Inventory => "Inventario",
            Self::Machining => "Progreso de maquinado",
            Self::Profile => "Perfil",
            Self::EditProfile => "Editar Perfil",
        }
    }

    /// Parse a routing key, returning `None` for unknown keys
    #[must_use]
    pub fn try_from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|panel| panel.key() == key)
    }

    /// Parse a routing key, falling back to the default panel
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::try_from_key(key).unwrap_or_default()
    }

    /// Whether the panel reads or writes the shared user record
    #[must_use]
    pub fn uses_profile(&self) -> bool {
        matches!(self, Self::Profile | Self::EditProfile)
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
