//! Admin dashboard: session control, live roster, attendance export.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated admin landing route. Visitors without an admin
//! session are redirected to `/login_admin` once `/api/me` resolves.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use roster::{Role, endpoints};

use crate::components::roster_table::RosterTable;
use crate::components::session_controls::SessionControls;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::auth::AuthState;
use crate::util::auth::{install_role_redirect, session_confirmed};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_role_redirect(auth, Role::Admin, use_navigate());

    view! {
        <Show
            when=move || session_confirmed(&auth.get(), Role::Admin)
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"Admin Dashboard"</span>
                    <span class="toolbar__spacer"></span>
                    <ThemeToggle/>
                    <span class="toolbar__self">
                        {move || auth.get().username().unwrap_or_default().to_owned()}
                    </span>
                </header>

                <SessionControls/>

                <section class="dashboard-page__roster">
                    <h2>"Students Present"</h2>
                    <RosterTable/>
                    <a class="btn" href=endpoints::DOWNLOAD_ATTENDANCE rel="external" download="attendance.csv">
                        "Download Attendance"
                    </a>
                </section>
            </div>
        </Show>
    }
}
