//! Landing page with links to every role's pages and the connected access point.

use leptos::prelude::*;
use roster::NetworkInfo;

use crate::components::theme_toggle::ThemeToggle;

/// Text shown for the detected access point.
pub fn bssid_label(info: Option<&NetworkInfo>) -> String {
    match info.and_then(|i| i.bssid.as_deref()) {
        Some(bssid) => bssid.to_owned(),
        None => "BSSID not found".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let network = RwSignal::new(None::<NetworkInfo>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        network.set(crate::net::api::fetch_network().await);
    });

    view! {
        <div class="home-page">
            <header class="toolbar">
                <span class="toolbar__title">"Classroom Attendance"</span>
                <span class="toolbar__spacer"></span>
                <ThemeToggle/>
            </header>
            <p class="home-page__network">
                "Connected access point: " {move || bssid_label(network.get().as_ref())}
            </p>
            <div class="home-page__links">
                <section>
                    <h2>"Students"</h2>
                    <a class="btn" href="/login_student">"Student Login"</a>
                    <a class="btn" href="/register_student">"Student Registration"</a>
                </section>
                <section>
                    <h2>"Admins"</h2>
                    <a class="btn" href="/login_admin">"Admin Login"</a>
                    <a class="btn" href="/register_admin">"Admin Registration"</a>
                </section>
            </div>
        </div>
    }
}
