//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_login::AdminLoginPage, admin_register::AdminRegisterPage,
    home::HomePage, student_dashboard::StudentDashboardPage, student_login::StudentLoginPage,
    student_register::StudentRegisterPage,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, restores the persisted theme, resolves
/// the current session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let restored = crate::util::theme::browser().restore();
            ui.update(|u| u.theme = restored);
        });
        leptos::task::spawn_local(async move {
            let me = crate::net::api::fetch_me().await;
            auth.set(AuthState { me, loading: false });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/attendance.css"/>
        <Title text="Classroom Attendance"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login_admin") view=AdminLoginPage/>
                <Route path=StaticSegment("register_admin") view=AdminRegisterPage/>
                <Route path=StaticSegment("admin_dashboard") view=AdminDashboardPage/>
                <Route path=StaticSegment("login_student") view=StudentLoginPage/>
                <Route path=StaticSegment("register_student") view=StudentRegisterPage/>
                <Route path=StaticSegment("student_dashboard") view=StudentDashboardPage/>
            </Routes>
        </Router>
    }
}
