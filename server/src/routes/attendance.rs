//! Dashboard endpoints: session toggle, roster, heartbeat, CSV export.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use roster::{MessageReply, StudentRecord};

use super::auth::{AdminUser, AuthRejection, StudentUser};
use crate::services::attendance;
use crate::state::AppState;

fn db_failure(context: &'static str, err: &sqlx::Error) -> AuthRejection {
    tracing::error!(error = %err, context, "attendance query failed");
    AuthRejection::Internal
}

/// `POST /start_session`
pub async fn start_session(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Json<MessageReply>, AuthRejection> {
    attendance::start_session(&state.pool, admin.admin_id)
        .await
        .map_err(|e| db_failure("start_session", &e))?;
    tracing::info!(admin_id = %admin.admin_id, "class session started");
    Ok(Json(MessageReply::message("Session started successfully!")))
}

/// `POST /end_session`: also logs every student out.
pub async fn end_session(State(state): State<AppState>, admin: AdminUser) -> Result<Json<MessageReply>, AuthRejection> {
    let logged_out = attendance::end_session(&state.pool, admin.admin_id)
        .await
        .map_err(|e| db_failure("end_session", &e))?;
    tracing::info!(admin_id = %admin.admin_id, logged_out, "class session ended");
    Ok(Json(MessageReply::message("Session ended and database reset!")))
}

/// `GET /active_students`
pub async fn active_students(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<StudentRecord>>, AuthRejection> {
    let students = attendance::logged_in_students(&state.pool, state.config.idle_threshold_secs)
        .await
        .map_err(|e| db_failure("active_students", &e))?;
    Ok(Json(students))
}

/// `POST /update_activity`: heartbeat from the student dashboard.
pub async fn update_activity(
    State(state): State<AppState>,
    student: StudentUser,
) -> Result<Json<serde_json::Value>, AuthRejection> {
    let touched = attendance::touch_activity(&state.pool, student.student_pk)
        .await
        .map_err(|e| db_failure("update_activity", &e))?;
    if !touched {
        return Err(AuthRejection::Unauthorized);
    }
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `GET /download_attendance`
pub async fn download_attendance(State(state): State<AppState>, _admin: AdminUser) -> Response {
    match attendance::logged_in_students(&state.pool, state.config.idle_threshold_secs).await {
        Ok(students) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"attendance.csv\""),
            ],
            attendance::render_csv(&students),
        )
            .into_response(),
        Err(e) => db_failure("download_attendance", &e).into_response(),
    }
}
