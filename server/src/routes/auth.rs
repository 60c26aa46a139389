//! Session cookie plumbing and role-checking extractors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Logins set an HttpOnly `session_token` cookie. Protected handlers take
//! [`AdminUser`] or [`StudentUser`] as a parameter. A request whose session
//! is absent or has the wrong role gets `403 {"error":"Unauthorized"}`.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use roster::{MessageReply, Role};
use time::Duration;
use uuid::Uuid;

use crate::services::session::{self, SessionIdentity};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";
const SESSION_MAX_AGE: Duration = Duration::hours(12);

// =============================================================================
// REJECTION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    Unauthorized,
    Internal,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (StatusCode::FORBIDDEN, Json(MessageReply::error("Unauthorized"))).into_response(),
            Self::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(MessageReply::error("Internal server error"))).into_response()
            }
        }
    }
}

// =============================================================================
// COOKIES
// =============================================================================

pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(SESSION_MAX_AGE)
        .build()
}

pub(crate) fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// EXTRACTORS
// =============================================================================

/// A valid session of either role.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub identity: SessionIdentity,
    pub token: String,
}

/// Look up the session behind the request cookie, if any.
pub(crate) async fn resolve_session(state: &AppState, jar: &CookieJar) -> Result<Option<CurrentSession>, AuthRejection> {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if token.is_empty() {
        return Ok(None);
    }

    let identity = session::validate_session(&state.pool, token)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "session lookup failed");
            AuthRejection::Internal
        })?;

    Ok(identity.map(|identity| CurrentSession { identity, token: token.to_owned() }))
}

impl<S> FromRequestParts<S> for CurrentSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let app_state = AppState::from_ref(state);
        resolve_session(&app_state, &jar)
            .await?
            .ok_or(AuthRejection::Unauthorized)
    }
}

fn require_role(session: &CurrentSession, role: Role) -> Result<Uuid, AuthRejection> {
    if session.identity.role == role { Ok(session.identity.subject_id) } else { Err(AuthRejection::Unauthorized) }
}

/// Logged-in admin. Use as a handler parameter to require the admin role.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser {
    pub admin_id: Uuid,
}

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = CurrentSession::from_request_parts(parts, state).await?;
        Ok(Self { admin_id: require_role(&session, Role::Admin)? })
    }
}

/// Logged-in student. `student_pk` is the `students.id` primary key, not
/// the human-facing student ID.
#[derive(Debug, Clone, Copy)]
pub struct StudentUser {
    pub student_pk: Uuid,
}

impl<S> FromRequestParts<S> for StudentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = CurrentSession::from_request_parts(parts, state).await?;
        Ok(Self { student_pk: require_role(&session, Role::Student)? })
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
