//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and dashboards to coordinate login redirects and
//! identity-dependent rendering. Populated from `/api/me` after hydration.

use roster::{Me, Role};

/// Current session identity and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub me: Option<Me>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { me: None, loading: true }
    }
}

impl AuthState {
    pub fn has_role(&self, role: Role) -> bool {
        self.me.as_ref().is_some_and(|me| me.role == role)
    }

    pub fn username(&self) -> Option<&str> {
        self.me.as_ref().map(|me| me.username.as_str())
    }

    /// Whether the admin's attendance session is currently open.
    pub fn session_active(&self) -> bool {
        self.me
            .as_ref()
            .and_then(|me| me.session_active)
            .unwrap_or(false)
    }
}
