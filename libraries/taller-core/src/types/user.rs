/// User profile domain types
use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Placeholder photo used by fallback records (1x1 transparent PNG).
pub const DEFAULT_PHOTO: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// User identifier as issued by the backend.
///
/// The backend may send either a JSON number or a string; the original
/// representation is kept so updates echo it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    /// Numeric identifier
    Numeric(i64),
    /// String identifier
    Text(String),
}

impl UserId {
    /// Whether the identifier carries no usable value.
    ///
    /// `0` and the empty string are both treated as missing.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Numeric(id) => *id == 0,
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{}", id),
            Self::Text(id) => write!(f, "{}", id),
        }
    }
}

/// Role label.
///
/// Roles are stored with the same values as [`Status`]: administrators as
/// `"Activo"`, regular users as `"Inactivo"`. The display labels are also
/// accepted on read, and unrecognized values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Administrador
    Administrator,
    /// Usuario
    User,
    /// No role assigned
    #[default]
    Unassigned,
    /// A value outside the known label set
    Other(String),
}

impl Role {
    /// Stored value sent to the backend
    pub fn as_str(&self) -> &str {
        match self {
            Self::Administrator => "Activo",
            Self::User => "Inactivo",
            Self::Unassigned => "",
            Self::Other(value) => value,
        }
    }

    /// Label shown to the user
    pub fn label(&self) -> &str {
        match self {
            Self::Administrator => "Administrador",
            Self::User => "Usuario",
            Self::Unassigned => "",
            Self::Other(value) => value,
        }
    }

    /// Parse a role from its stored value or display label
    pub fn parse(value: &str) -> Self {
        match value {
            "Activo" | "Administrador" => Self::Administrator,
            "Inactivo" | "Usuario" => Self::User,
            "" => Self::Unassigned,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Activo
    #[serde(rename = "Activo")]
    Active,
    /// Inactivo
    #[default]
    #[serde(rename = "Inactivo")]
    Inactive,
}

impl Status {
    /// Stored value, which is also the display label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Activo",
            Self::Inactive => "Inactivo",
        }
    }

    /// Parse from the stored value (case-insensitive)
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "activo" => Some(Self::Active),
            "inactivo" => Some(Self::Inactive),
            _ => None,
        }
    }

    /// Whether the account is active
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Employee profile as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserRecord {
    /// Backend identifier, required for updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,

    /// Full name (required)
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Contact email (required)
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,

    /// Join date, already formatted for display
    #[serde(default, deserialize_with = "null_as_default")]
    pub joined: String,

    /// Remote URL or inline `data:` URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo: String,
}

impl UserRecord {
    /// Create a record with the two required text fields
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Placeholder shown when the profile could not be loaded.
    pub fn load_failed(joined: impl Into<String>) -> Self {
        Self {
            id: None,
            name: "Error al cargar datos".to_string(),
            email: "contacto@empresa.com".to_string(),
            phone: "+52 000 000 0000".to_string(),
            department: "Soporte".to_string(),
            location: "Oficina central".to_string(),
            role: Role::User,
            status: Status::Inactive,
            joined: joined.into(),
            photo: DEFAULT_PHOTO.to_string(),
        }
    }

    /// Placeholder shown when the backend answered without a record.
    pub fn not_found() -> Self {
        Self {
            name: "Usuario no encontrado".to_string(),
            status: Status::Inactive,
            photo: DEFAULT_PHOTO.to_string(),
            ..Self::default()
        }
    }

    /// Check the fields the backend requires before accepting an update.
    ///
    /// Name and email are checked before the identifier.
    pub fn validate_for_update(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        match &self.id {
            Some(id) if !id.is_blank() => Ok(()),
            _ => Err(ValidationError::MissingId),
        }
    }
}

/// Backends send unset columns as `null`; read those as the field default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Format a join date the way the es-MX locale does (`d/m/yyyy`).
pub fn format_joined_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// Today's local date formatted with [`format_joined_date`].
pub fn today_joined_date() -> String {
    format_joined_date(chrono::Local::now().date_naive())
}
