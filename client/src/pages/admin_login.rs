//! Admin login form.

use leptos::prelude::*;
use roster::endpoints;

use crate::components::flash::FlashMessage;
use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <header class="login-card__header">
                    <h1>"Admin Login"</h1>
                    <ThemeToggle/>
                </header>
                <FlashMessage/>
                <form class="login-form" method="post" action=endpoints::ADMIN_LOGIN>
                    <input class="login-input" type="text" name="username" placeholder="Username" required=true/>
                    <input class="login-input" type="password" name="password" placeholder="Password" required=true/>
                    <button class="login-button" type="submit">"Login"</button>
                </form>
                <p class="login-card__subtitle">
                    "No account? " <a href="/register_admin">"Register"</a>
                </p>
            </div>
        </div>
    }
}
