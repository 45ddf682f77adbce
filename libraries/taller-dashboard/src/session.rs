use taller_core::UserRecord;

/// Holder of the committed user record.
///
/// Owned by the router and lent to the profile panels; it is the only place
/// the committed record lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSlot {
    user: Option<UserRecord>,
}

impl UserSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with a record
    pub fn with_user(user: UserRecord) -> Self {
        Self { user: Some(user) }
    }

    pub fn get(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none()
    }

    /// Replace the record wholesale, returning the previous one
    pub fn replace(&mut self, user: UserRecord) -> Option<UserRecord> {
        self.user.replace(user)
    }
}
