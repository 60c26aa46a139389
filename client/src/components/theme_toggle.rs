//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Flips the page theme and persists the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn theme-toggle"
            title="Toggle theme"
            on:click=move |_| {
                let next = crate::util::theme::browser().toggle();
                ui.update(|u| u.theme = Some(next));
            }
        >
            {move || ui.get().toggle_icon()}
        </button>
    }
}
