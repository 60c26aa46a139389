//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard routes apply identical redirect behavior once `/api/me` has
//! resolved: visitors without a session of the required role are sent to the
//! matching login page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use roster::Role;

use crate::state::auth::AuthState;

/// Login route for a role.
pub fn login_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/login_admin",
        Role::Student => "/login_student",
    }
}

/// `true` once auth has loaded and the current session lacks `role`.
pub fn should_redirect(state: &AuthState, role: Role) -> bool {
    !state.loading && !state.has_role(role)
}

/// `true` once `/api/me` has resolved to a session holding `role`.
pub fn session_confirmed(state: &AuthState, role: Role) -> bool {
    !state.loading && state.has_role(role)
}

/// Redirect to the role's login page whenever [`should_redirect`] holds.
pub fn install_role_redirect<F>(auth: RwSignal<AuthState>, role: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect(&auth.get(), role) {
            navigate(login_path(role), NavigateOptions::default());
        }
    });
}
