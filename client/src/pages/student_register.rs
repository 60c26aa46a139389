//! Student registration form.

use leptos::prelude::*;
use roster::endpoints;

use crate::components::flash::FlashMessage;

#[component]
pub fn StudentRegisterPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Register Student"</h1>
                <FlashMessage/>
                <form class="login-form" method="post" action=endpoints::STUDENT_REGISTER>
                    <input class="login-input" type="text" name="student_id" placeholder="Student ID" required=true/>
                    <input class="login-input" type="text" name="username" placeholder="Username" required=true/>
                    <input class="login-input" type="password" name="password" placeholder="Password" required=true/>
                    <button class="login-button" type="submit">"Register"</button>
                </form>
                <p class="login-card__subtitle">
                    "Already registered? " <a href="/login_student">"Login"</a>
                </p>
            </div>
        </div>
    }
}
