//! Admin and student accounts: registration, password checks, profiles.
//!
//! DESIGN
//! ======
//! Passwords are stored as bcrypt hashes. Hashing and verification run on the
//! blocking pool since bcrypt is deliberately slow. Uniqueness of IDs and
//! usernames is left to the database constraints; a unique violation is
//! translated into [`AccountError::Duplicate`].

use roster::{FaceImage, FaceImageError, Me, Role};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::session::SessionIdentity;

const INTERNAL_MESSAGE: &str = "Something went wrong, please try again.";

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid secret key! Registration failed.")]
    InvalidSecretKey,
    #[error("{} ID or username already exists!", role_title(.0))]
    Duplicate(Role),
    #[error("Invalid username or password!")]
    InvalidCredentials,
    #[error("Face image is required.")]
    MissingFaceImage(#[source] FaceImageError),
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AccountError {
    /// Text safe to show back to the browser.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_internal() { INTERNAL_MESSAGE.to_owned() } else { self.to_string() }
    }

    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Hash(_) | Self::Database(_))
    }
}

fn role_title(role: &Role) -> &'static str {
    match *role {
        Role::Admin => "Admin",
        Role::Student => "Student",
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Trim `value` and reject it if nothing is left.
pub fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, AccountError> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(AccountError::MissingField(field)) } else { Ok(trimmed) }
}

/// Passwords are taken verbatim; only emptiness is rejected.
pub fn required_password(value: &str) -> Result<&str, AccountError> {
    if value.is_empty() { Err(AccountError::MissingField("password")) } else { Ok(value) }
}

/// Compare a submitted admin registration key against the configured one.
/// With no key configured every attempt is rejected.
pub fn check_registration_key(expected: Option<&str>, provided: &str) -> Result<(), AccountError> {
    match expected {
        Some(expected) if expected == provided => Ok(()),
        _ => Err(AccountError::InvalidSecretKey),
    }
}

/// Validate the webcam capture submitted with a student login.
pub fn check_face_image(data_url: &str) -> Result<FaceImage, AccountError> {
    FaceImage::parse(data_url).map_err(AccountError::MissingFaceImage)
}

// =============================================================================
// PASSWORDS
// =============================================================================

pub async fn hash_password(password: String) -> Result<String, AccountError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AccountError::Hash(e.to_string()))?
        .map_err(|e| AccountError::Hash(e.to_string()))
}

/// `false` for a wrong password and for a malformed stored hash.
pub async fn verify_password(password: String, hash: String) -> bool {
    match tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await {
        Ok(Ok(valid)) => valid,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "stored password hash is unreadable");
            false
        }
        Err(e) => {
            tracing::error!(error = %e, "password verification task failed");
            false
        }
    }
}

// =============================================================================
// REGISTRATION
// =============================================================================

fn map_insert_error(err: sqlx::Error, role: Role) -> AccountError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => AccountError::Duplicate(role),
        _ => AccountError::Database(err),
    }
}

pub async fn register_admin(pool: &PgPool, idname: &str, username: &str, password: &str) -> Result<Uuid, AccountError> {
    let hash = hash_password(password.to_owned()).await?;
    let row = sqlx::query("INSERT INTO admins (idname, username, password_hash) VALUES ($1, $2, $3) RETURNING id")
        .bind(idname)
        .bind(username)
        .bind(hash)
        .fetch_one(pool)
        .await
        .map_err(|e| map_insert_error(e, Role::Admin))?;
    Ok(row.get("id"))
}

pub async fn register_student(
    pool: &PgPool,
    student_id: &str,
    username: &str,
    password: &str,
) -> Result<Uuid, AccountError> {
    let hash = hash_password(password.to_owned()).await?;
    let row = sqlx::query("INSERT INTO students (student_id, username, password_hash) VALUES ($1, $2, $3) RETURNING id")
        .bind(student_id)
        .bind(username)
        .bind(hash)
        .fetch_one(pool)
        .await
        .map_err(|e| map_insert_error(e, Role::Student))?;
    Ok(row.get("id"))
}

// =============================================================================
// LOGIN
// =============================================================================

/// Check a username/password pair for `role`, returning the account's primary key.
pub async fn authenticate(pool: &PgPool, role: Role, username: &str, password: &str) -> Result<Uuid, AccountError> {
    let sql = match role {
        Role::Admin => "SELECT id, password_hash FROM admins WHERE username = $1",
        Role::Student => "SELECT id, password_hash FROM students WHERE username = $1",
    };
    let Some(row) = sqlx::query(sql).bind(username).fetch_optional(pool).await? else {
        return Err(AccountError::InvalidCredentials);
    };

    let hash: String = row.get("password_hash");
    if verify_password(password.to_owned(), hash).await {
        Ok(row.get("id"))
    } else {
        Err(AccountError::InvalidCredentials)
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// Resolve the identity behind a session into the `/api/me` payload.
pub async fn load_me(pool: &PgPool, identity: SessionIdentity) -> Result<Option<Me>, sqlx::Error> {
    match identity.role {
        Role::Admin => {
            let row = sqlx::query("SELECT username, session_active FROM admins WHERE id = $1")
                .bind(identity.subject_id)
                .fetch_optional(pool)
                .await?;
            Ok(row.map(|r| Me {
                role: Role::Admin,
                username: r.get("username"),
                student_id: None,
                session_active: Some(r.get("session_active")),
            }))
        }
        Role::Student => {
            let row = sqlx::query("SELECT student_id, username FROM students WHERE id = $1")
                .bind(identity.subject_id)
                .fetch_optional(pool)
                .await?;
            Ok(row.map(|r| Me {
                role: Role::Student,
                username: r.get("username"),
                student_id: Some(r.get("student_id")),
                session_active: None,
            }))
        }
    }
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
