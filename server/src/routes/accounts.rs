//! Registration and login forms, logout, and the `/api/me` probe.
//!
//! Form handlers answer with a `303 See Other` redirect. Failures go back to
//! the originating page with `?error=<message>`; successful registrations go
//! to the login page with `?notice=<message>`.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use roster::Role;
use uuid::Uuid;
use serde::Deserialize;

use super::auth::{AuthRejection, cleared_session_cookie, resolve_session, session_cookie};
use crate::services::account::{self, AccountError};
use crate::services::{attendance, session};
use crate::state::AppState;

pub(crate) const ADMIN_LOGIN_PAGE: &str = "/login_admin";
pub(crate) const ADMIN_REGISTER_PAGE: &str = "/register_admin";
pub(crate) const ADMIN_DASHBOARD_PAGE: &str = "/admin_dashboard";
pub(crate) const STUDENT_LOGIN_PAGE: &str = "/login_student";
pub(crate) const STUDENT_REGISTER_PAGE: &str = "/register_student";
pub(crate) const STUDENT_DASHBOARD_PAGE: &str = "/student_dashboard";

// =============================================================================
// FLASH REDIRECTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FlashKind {
    Error,
    Notice,
}

impl FlashKind {
    fn query_key(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Notice => "notice",
        }
    }
}

pub(crate) fn flash_location(path: &str, kind: FlashKind, text: &str) -> String {
    format!("{path}?{}={}", kind.query_key(), urlencoding::encode(text))
}

pub(crate) fn flash_redirect(path: &str, kind: FlashKind, text: &str) -> Redirect {
    Redirect::to(&flash_location(path, kind, text))
}

fn account_failure(path: &str, err: &AccountError) -> Response {
    if err.is_internal() {
        tracing::error!(error = %err, path, "account request failed");
    } else {
        tracing::info!(error = %err, path, "account request rejected");
    }
    flash_redirect(path, FlashKind::Error, &err.user_message()).into_response()
}

// =============================================================================
// FORMS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminRegisterForm {
    pub idname: String,
    pub username: String,
    pub password: String,
    pub secret_key: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminLoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudentRegisterForm {
    pub student_id: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudentLoginForm {
    pub username: String,
    pub password: String,
    pub face_image: String,
}

// =============================================================================
// REGISTRATION
// =============================================================================

async fn try_register_admin(state: &AppState, form: &AdminRegisterForm) -> Result<Uuid, AccountError> {
    account::check_registration_key(state.config.admin_registration_key.as_deref(), &form.secret_key)?;
    let idname = account::required("idname", &form.idname)?;
    let username = account::required("username", &form.username)?;
    let password = account::required_password(&form.password)?;
    account::register_admin(&state.pool, idname, username, password).await
}

async fn try_register_student(state: &AppState, form: &StudentRegisterForm) -> Result<Uuid, AccountError> {
    let student_id = account::required("student_id", &form.student_id)?;
    let username = account::required("username", &form.username)?;
    let password = account::required_password(&form.password)?;
    account::register_student(&state.pool, student_id, username, password).await
}

/// `POST /api/admin/register`
pub async fn register_admin(State(state): State<AppState>, Form(form): Form<AdminRegisterForm>) -> Response {
    match try_register_admin(&state, &form).await {
        Ok(admin_id) => {
            tracing::info!(%admin_id, "admin registered");
            flash_redirect(ADMIN_LOGIN_PAGE, FlashKind::Notice, "Admin registered successfully!").into_response()
        }
        Err(e) => account_failure(ADMIN_REGISTER_PAGE, &e),
    }
}

/// `POST /api/student/register`
pub async fn register_student(State(state): State<AppState>, Form(form): Form<StudentRegisterForm>) -> Response {
    match try_register_student(&state, &form).await {
        Ok(pk) => {
            tracing::info!(student = %pk, "student registered");
            flash_redirect(STUDENT_LOGIN_PAGE, FlashKind::Notice, "Student registered successfully!").into_response()
        }
        Err(e) => account_failure(STUDENT_REGISTER_PAGE, &e),
    }
}

// =============================================================================
// LOGIN
// =============================================================================

fn login_page(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_LOGIN_PAGE,
        Role::Student => STUDENT_LOGIN_PAGE,
    }
}

fn dashboard_page(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_DASHBOARD_PAGE,
        Role::Student => STUDENT_DASHBOARD_PAGE,
    }
}

/// Throttle, then check the password. Failures are counted against the username.
async fn login(state: &AppState, role: Role, username: &str, password: &str) -> Result<Uuid, Response> {
    let page = login_page(role);

    if let Err(e) = state.login_throttle.check_attempt(role, username) {
        tracing::warn!(error = %e, role = role.as_str(), "login throttled");
        return Err(flash_redirect(page, FlashKind::Error, e.user_message()).into_response());
    }

    match account::authenticate(&state.pool, role, username, password).await {
        Ok(id) => {
            state.login_throttle.clear(role, username);
            Ok(id)
        }
        Err(e) => {
            if matches!(e, AccountError::InvalidCredentials) {
                state.login_throttle.record_failure(role, username);
            }
            Err(account_failure(page, &e))
        }
    }
}

/// Start a cookie session and redirect to the role's dashboard.
async fn open_session(state: &AppState, jar: CookieJar, role: Role, id: Uuid) -> Response {
    match session::create_session(&state.pool, role, id).await {
        Ok(token) => {
            let jar = jar.add(session_cookie(token, state.config.cookie_secure));
            (jar, Redirect::to(dashboard_page(role))).into_response()
        }
        Err(e) => account_failure(login_page(role), &AccountError::Database(e)),
    }
}

/// `POST /api/admin/login`
pub async fn login_admin(State(state): State<AppState>, jar: CookieJar, Form(form): Form<AdminLoginForm>) -> Response {
    let checked = account::required("username", &form.username)
        .and_then(|username| Ok((username, account::required_password(&form.password)?)));
    let (username, password) = match checked {
        Ok(fields) => fields,
        Err(e) => return account_failure(ADMIN_LOGIN_PAGE, &e),
    };

    let admin_id = match login(&state, Role::Admin, username, password).await {
        Ok(id) => id,
        Err(response) => return response,
    };

    tracing::info!(%admin_id, "admin logged in");
    open_session(&state, jar, Role::Admin, admin_id).await
}

/// `POST /api/student/login`
///
/// The face capture is checked for shape before any credentials are.
pub async fn login_student(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<StudentLoginForm>,
) -> Response {
    let checked = account::required("username", &form.username).and_then(|username| {
        let password = account::required_password(&form.password)?;
        let image = account::check_face_image(&form.face_image)?;
        Ok((username, password, image))
    });
    let (username, password, image) = match checked {
        Ok(fields) => fields,
        Err(e) => return account_failure(STUDENT_LOGIN_PAGE, &e),
    };

    let student_pk = match login(&state, Role::Student, username, password).await {
        Ok(id) => id,
        Err(response) => return response,
    };

    if let Err(e) = attendance::mark_logged_in(&state.pool, student_pk).await {
        return account_failure(STUDENT_LOGIN_PAGE, &AccountError::Database(e));
    }

    tracing::info!(student = %student_pk, face_bytes = image.bytes.len(), "student logged in");
    open_session(&state, jar, Role::Student, student_pk).await
}

// =============================================================================
// LOGOUT
// =============================================================================

/// Revoke the current session, if any. Students are also marked logged out.
async fn end_current_session(state: &AppState, jar: &CookieJar) {
    let current = match resolve_session(state, jar).await {
        Ok(Some(current)) => current,
        Ok(None) => return,
        Err(_) => {
            tracing::warn!("logout could not resolve session");
            return;
        }
    };

    if current.identity.role == Role::Student {
        if let Err(e) = attendance::mark_logged_out(&state.pool, current.identity.subject_id).await {
            tracing::warn!(error = %e, "failed to mark student logged out");
        }
    }
    if let Err(e) = session::delete_session(&state.pool, &current.token).await {
        tracing::warn!(error = %e, "failed to delete session");
    }
}

/// `POST /logout`: beacon target; always 204.
pub async fn logout_beacon(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    end_current_session(&state, &jar).await;
    let jar = jar.add(cleared_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

/// `GET /logout`: link target; redirects to the student login page.
pub async fn logout_redirect(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    end_current_session(&state, &jar).await;
    let jar = jar.add(cleared_session_cookie(state.config.cookie_secure));
    (jar, flash_redirect(STUDENT_LOGIN_PAGE, FlashKind::Notice, "Logged out successfully!"))
}

// =============================================================================
// ME
// =============================================================================

/// `GET /api/me`: identity behind the cookie, or 401.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Response {
    let current = match resolve_session(&state, &jar).await {
        Ok(Some(current)) => current,
        Ok(None) => return StatusCode::UNAUTHORIZED.into_response(),
        Err(rejection) => return rejection.into_response(),
    };

    match account::load_me(&state.pool, current.identity).await {
        Ok(Some(me)) => Json(me).into_response(),
        Ok(None) => StatusCode::UNAUTHORIZED.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "profile lookup failed");
            AuthRejection::Internal.into_response()
        }
    }
}

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;
