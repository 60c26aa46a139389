//! Admin registration form, gated by the registration secret key.

use leptos::prelude::*;
use roster::endpoints;

use crate::components::flash::FlashMessage;

#[component]
pub fn AdminRegisterPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Register Admin"</h1>
                <FlashMessage/>
                <form class="login-form" method="post" action=endpoints::ADMIN_REGISTER>
                    <input class="login-input" type="text" name="idname" placeholder="Admin ID" required=true/>
                    <input class="login-input" type="text" name="username" placeholder="Username" required=true/>
                    <input class="login-input" type="password" name="password" placeholder="Password" required=true/>
                    <input class="login-input" type="password" name="secret_key" placeholder="Secret Key" required=true/>
                    <button class="login-button" type="submit">"Register"</button>
                </form>
                <p class="login-card__subtitle">
                    "Already registered? " <a href="/login_admin">"Login"</a>
                </p>
            </div>
        </div>
    }
}
