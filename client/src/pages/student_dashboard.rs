//! Student dashboard: greeting, heartbeat, logout-on-exit.
//!
//! Once `/api/me` confirms a student session, a heartbeat goes out
//! immediately and then every `HEARTBEAT_INTERVAL`, and leaving the page
//! fires a best-effort logout. Visitors without that session send neither.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use roster::{Role, endpoints};

use crate::components::theme_toggle::ThemeToggle;
use crate::state::auth::AuthState;
use crate::util::auth::{install_role_redirect, session_confirmed};
use crate::util::unload::install_logout_on_exit;

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_role_redirect(auth, Role::Student, use_navigate());

    let student_id = move || {
        auth.get()
            .me
            .and_then(|me| me.student_id)
            .unwrap_or_default()
    };

    view! {
        <Show
            when=move || session_confirmed(&auth.get(), Role::Student)
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <StudentPresence/>
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"Student Dashboard"</span>
                    <span class="toolbar__spacer"></span>
                    <ThemeToggle/>
                    <a class="btn toolbar__logout" href=endpoints::LOGOUT rel="external">
                        "Logout"
                    </a>
                </header>
                <section class="dashboard-page__welcome">
                    <h2>"Welcome, " {move || auth.get().username().unwrap_or_default().to_owned()} "!"</h2>
                    <p>"Student ID: " {student_id}</p>
                    <p>"You are marked present. Keep this page open to stay active."</p>
                </section>
            </div>
        </Show>
    }
}

/// Heartbeat and exit beacon, alive only while a confirmed student session is shown.
#[component]
fn StudentPresence() -> impl IntoView {
    install_logout_on_exit();

    #[cfg(feature = "hydrate")]
    start_heartbeat();
}

#[cfg(feature = "hydrate")]
fn start_heartbeat() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    let alive = Arc::new(AtomicBool::new(true));
    crate::util::heartbeat::spawn_heartbeat(alive.clone());
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}
