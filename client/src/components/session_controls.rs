//! Start/End attendance session buttons.
//!
//! Each button POSTs the toggle, shows the server's message in an alert, and
//! reloads the page. The status code is not inspected: any parsed reply
//! counts. A failed request is only logged to the console.

use leptos::prelude::*;

use crate::net::api::SessionAction;
use crate::state::auth::AuthState;

#[component]
pub fn SessionControls() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let run = move |action: SessionAction| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::post_session(action).await {
                Ok(reply) => {
                    crate::util::page::alert(reply.display_text());
                    crate::util::page::reload();
                }
                Err(e) => log::error!("{} failed: {e}", action.label()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = action;
    };

    view! {
        <div class="session-controls">
            <span class=move || {
                if auth.get().session_active() {
                    "session-controls__state session-controls__state--active"
                } else {
                    "session-controls__state"
                }
            }>
                {move || if auth.get().session_active() { "Session active" } else { "Session inactive" }}
            </span>
            <button class="btn btn--primary" on:click=move |_| run(SessionAction::Start)>
                {SessionAction::Start.label()}
            </button>
            <button class="btn btn--danger" on:click=move |_| run(SessionAction::End)>
                {SessionAction::End.label()}
            </button>
        </div>
    }
}
