//! Cookie session tokens for admins and students.
//!
//! ARCHITECTURE
//! ============
//! One `sessions` table serves both roles: each row maps a random token to a
//! `(role, subject_id)` pair, where `subject_id` is the primary key of the
//! matching `admins` or `students` row. Route extractors resolve the cookie
//! through [`validate_session`] and then check the role they require.

use std::fmt::Write;

use rand::Rng;
use roster::Role;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Who a session token belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionIdentity {
    pub role: Role,
    /// Primary key in `admins` or `students`, depending on `role`.
    pub subject_id: Uuid,
}

/// Create a session for the given account, returning the token.
pub async fn create_session(pool: &PgPool, role: Role, subject_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, role, subject_id) VALUES ($1, $2, $3)")
        .bind(&token)
        .bind(role.as_str())
        .bind(subject_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return its identity.
///
/// Expired tokens and rows with an unrecognized role resolve to `None`.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionIdentity>, sqlx::Error> {
    let row = sqlx::query("SELECT role, subject_id FROM sessions WHERE token = $1 AND expires_at > now()")
        .bind(token)
        .fetch_optional(pool)
        .await?;

    Ok(row.and_then(|r| {
        let role: String = r.get("role");
        Some(SessionIdentity { role: Role::parse(&role)?, subject_id: r.get("subject_id") })
    }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Drop expired rows. Returns how many were removed.
pub async fn purge_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Sweep expired sessions on a fixed interval for the life of the process.
pub fn spawn_purge_task(pool: PgPool, every: std::time::Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            match purge_expired(&pool).await {
                Ok(0) => {}
                Ok(removed) => tracing::debug!(removed, "purged expired sessions"),
                Err(e) => tracing::warn!(error = %e, "session purge failed"),
            }
        }
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
