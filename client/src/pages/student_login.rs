//! Student login with face capture.
//!
//! The submit button stays disabled until a frame has been captured into the
//! hidden `face_image` field.

use leptos::prelude::*;
use roster::endpoints;

use crate::components::face_capture::FaceCapture;
use crate::components::flash::FlashMessage;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::capture::CaptureState;

#[component]
pub fn StudentLoginPage() -> impl IntoView {
    let capture = RwSignal::new(CaptureState::default());

    view! {
        <div class="login-page">
            <div class="login-card">
                <header class="login-card__header">
                    <h1>"Student Login"</h1>
                    <ThemeToggle/>
                </header>
                <FlashMessage/>
                <form class="login-form" method="post" action=endpoints::STUDENT_LOGIN>
                    <input class="login-input" type="text" name="username" placeholder="Username" required=true/>
                    <input class="login-input" type="password" name="password" placeholder="Password" required=true/>
                    <FaceCapture capture=capture/>
                    <button
                        id="login-btn"
                        class="login-button"
                        type="submit"
                        disabled=move || !capture.get().login_enabled
                    >
                        "Login"
                    </button>
                </form>
                <p class="login-card__subtitle">
                    "No account? " <a href="/register_student">"Register"</a>
                </p>
            </div>
        </div>
    }
}
