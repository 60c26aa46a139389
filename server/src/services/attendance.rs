//! Class session state and student presence.
//!
//! SYSTEM CONTEXT
//! ==============
//! An admin opens and closes the class session; students log in against it
//! and keep their `last_seen_at` fresh with heartbeats. The admin dashboard
//! polls [`logged_in_students`] and can export the same list as CSV.
//!
//! DESIGN
//! ======
//! Elapsed times are computed by Postgres against its own clock so the roster
//! never mixes server and database time. Presence classification is a pure
//! function of the idle seconds and the configured threshold.

use std::borrow::Cow;

use roster::{Presence, StudentRecord, format_active_time};
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub const CSV_HEADER: &str = "Student ID,Username,Status,Active Time";

/// One logged-in student with elapsed times already resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresenceRow {
    pub student_id: String,
    pub username: String,
    /// Seconds since login.
    pub active_secs: i64,
    /// Seconds since the last heartbeat (or login, if none yet).
    pub idle_secs: i64,
}

impl PresenceRow {
    #[must_use]
    pub fn into_record(self, idle_threshold_secs: i64) -> StudentRecord {
        StudentRecord {
            status: presence(self.idle_secs, idle_threshold_secs),
            active_time: format_active_time(self.active_secs),
            student_id: self.student_id,
            username: self.username,
        }
    }
}

#[must_use]
pub fn presence(idle_secs: i64, idle_threshold_secs: i64) -> Presence {
    if idle_secs <= idle_threshold_secs { Presence::Active } else { Presence::Idle }
}

// =============================================================================
// ADMIN SESSION
// =============================================================================

/// Mark the admin's class session open.
pub async fn start_session(pool: &PgPool, admin_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE admins SET session_active = TRUE WHERE id = $1")
        .bind(admin_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Close the class session and log every student out.
///
/// Student cookie sessions are revoked in the same transaction, so a student
/// tab left open gets 403s on its next heartbeat. Returns how many students
/// were logged out.
pub async fn end_session(pool: &PgPool, admin_id: Uuid) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE admins SET session_active = FALSE WHERE id = $1")
        .bind(admin_id)
        .execute(&mut *tx)
        .await?;
    let logged_out = sqlx::query(
        "UPDATE students SET is_logged_in = FALSE, logged_in_at = NULL, last_seen_at = NULL WHERE is_logged_in",
    )
    .execute(&mut *tx)
    .await?
    .rows_affected();
    sqlx::query("DELETE FROM sessions WHERE role = 'student'")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(logged_out)
}

// =============================================================================
// STUDENT PRESENCE
// =============================================================================

pub async fn mark_logged_in(pool: &PgPool, student_pk: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE students SET is_logged_in = TRUE, logged_in_at = now(), last_seen_at = now() WHERE id = $1")
        .bind(student_pk)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn mark_logged_out(pool: &PgPool, student_pk: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE students SET is_logged_in = FALSE, logged_in_at = NULL, last_seen_at = NULL WHERE id = $1")
        .bind(student_pk)
        .execute(pool)
        .await?;
    Ok(())
}

/// Record a heartbeat. `false` if the student is not currently logged in.
pub async fn touch_activity(pool: &PgPool, student_pk: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE students SET last_seen_at = now() WHERE id = $1 AND is_logged_in")
        .bind(student_pk)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Logged-in students ordered by student ID.
pub async fn logged_in_students(pool: &PgPool, idle_threshold_secs: i64) -> Result<Vec<StudentRecord>, sqlx::Error> {
    let rows = sqlx::query(
        r"SELECT
              student_id,
              username,
              EXTRACT(EPOCH FROM (now() - COALESCE(logged_in_at, now())))::BIGINT AS active_secs,
              EXTRACT(EPOCH FROM (now() - COALESCE(last_seen_at, logged_in_at, now())))::BIGINT AS idle_secs
          FROM students
          WHERE is_logged_in
          ORDER BY student_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| {
            PresenceRow {
                student_id: r.get("student_id"),
                username: r.get("username"),
                active_secs: r.get("active_secs"),
                idle_secs: r.get("idle_secs"),
            }
            .into_record(idle_threshold_secs)
        })
        .collect())
}

// =============================================================================
// CSV EXPORT
// =============================================================================

/// Render the roster as CSV with a header row and CRLF line endings.
#[must_use]
pub fn render_csv(records: &[StudentRecord]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 2 + records.len() * 48);
    out.push_str(CSV_HEADER);
    out.push_str("\r\n");
    for record in records {
        let cells = record.cells();
        let line: Vec<Cow<'_, str>> = cells.iter().map(|c| csv_field(c)).collect();
        out.push_str(&line.join(","));
        out.push_str("\r\n");
    }
    out
}

/// Quote fields that need it, doubling embedded quotes.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
#[path = "attendance_test.rs"]
mod tests;
