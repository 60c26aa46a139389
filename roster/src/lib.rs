//! Shared attendance wire schema for the dashboard client and the server.
//!
//! This crate owns the JSON shapes exchanged over the REST endpoints
//! (`StudentRecord`, `MessageReply`), the persisted theme value, and the
//! face-image data URL format submitted by the student login form.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Local-storage key holding the persisted theme string.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Page-level attribute that reflects the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Data URL scheme produced by the webcam capture (`canvas.toDataURL("image/jpeg")`).
pub const FACE_IMAGE_PREFIX: &str = "data:image/jpeg;base64,";

/// Name of the hidden form field carrying the captured face image.
pub const FACE_IMAGE_FIELD: &str = "face_image";

/// REST paths shared by the client and the server router.
pub mod endpoints {
    pub const START_SESSION: &str = "/start_session";
    pub const END_SESSION: &str = "/end_session";
    pub const ACTIVE_STUDENTS: &str = "/active_students";
    pub const UPDATE_ACTIVITY: &str = "/update_activity";
    pub const LOGOUT: &str = "/logout";
    pub const DOWNLOAD_ATTENDANCE: &str = "/download_attendance";
    pub const ME: &str = "/api/me";
    pub const NETWORK: &str = "/api/network";
    pub const ADMIN_REGISTER: &str = "/api/admin/register";
    pub const ADMIN_LOGIN: &str = "/api/admin/login";
    pub const STUDENT_REGISTER: &str = "/api/student/register";
    pub const STUDENT_LOGIN: &str = "/api/student/login";
}

// =============================================================================
// ROSTER
// =============================================================================

/// Liveness of a logged-in student as seen by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// Heartbeat or login seen within the idle threshold.
    Active,
    /// Logged in, but no heartbeat within the idle threshold.
    Idle,
}

impl Presence {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Idle => "idle",
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the active-student roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Institution-assigned student identifier.
    pub student_id: String,
    pub username: String,
    pub status: Presence,
    /// Time since login, formatted `HH:MM:SS`.
    pub active_time: String,
}

impl StudentRecord {
    /// Display cells in table column order: id, username, status, active time.
    #[must_use]
    pub fn cells(&self) -> [String; 4] {
        [
            self.student_id.clone(),
            self.username.clone(),
            self.status.to_string(),
            self.active_time.clone(),
        ]
    }
}

/// Format a duration in whole seconds as `HH:MM:SS`.
///
/// Hours are not capped; negative input clamps to zero.
#[must_use]
pub fn format_active_time(seconds: i64) -> String {
    let total = seconds.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

// =============================================================================
// SESSION REPLIES
// =============================================================================

/// Body returned by `/start_session` and `/end_session`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageReply {
    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Self { message: Some(text.into()), error: None }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { message: None, error: Some(text.into()) }
    }

    /// Text surfaced to the user: the message, else the error.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("No response message")
    }
}

/// Identity of the current browser session, returned by `/api/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Me {
    pub role: Role,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_active: Option<bool>,
}

/// Account kind behind a session cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "student" => Some(Self::Student),
            _ => None,
        }
    }
}

/// Body returned by `/api/network`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub bssid: Option<String>,
}

// =============================================================================
// THEME
// =============================================================================

/// Persisted page theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or attribute value. Only exact lowercase names match.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Next theme given the raw page attribute. Anything other than `dark`,
    /// including a missing attribute, flips to `dark`.
    #[must_use]
    pub fn next_from_attribute(current: Option<&str>) -> Self {
        if current == Some("dark") { Self::Light } else { Self::Dark }
    }
}

// =============================================================================
// FACE IMAGE
// =============================================================================

/// Error returned by [`FaceImage::parse`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FaceImageError {
    #[error("face image is empty")]
    Empty,
    #[error("face image is not a data URL")]
    NotDataUrl,
    #[error("face image is not base64-encoded")]
    NotBase64,
    #[error("unsupported face image type: {0}")]
    UnsupportedType(String),
    #[error("face image payload is empty")]
    EmptyPayload,
    #[error("face image payload is invalid base64: {0}")]
    InvalidPayload(String),
}

/// A decoded `data:image/...;base64,` face capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceImage {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FaceImage {
    /// Parse and decode a base64 image data URL.
    ///
    /// # Errors
    ///
    /// Returns a [`FaceImageError`] describing the first structural problem found.
    pub fn parse(data_url: &str) -> Result<Self, FaceImageError> {
        let trimmed = data_url.trim();
        if trimmed.is_empty() {
            return Err(FaceImageError::Empty);
        }
        let rest = trimmed.strip_prefix("data:").ok_or(FaceImageError::NotDataUrl)?;
        let (header, payload) = rest.split_once(',').ok_or(FaceImageError::NotDataUrl)?;
        let mime = header.strip_suffix(";base64").ok_or(FaceImageError::NotBase64)?;
        if !mime.starts_with("image/") {
            return Err(FaceImageError::UnsupportedType(mime.to_owned()));
        }
        if payload.is_empty() {
            return Err(FaceImageError::EmptyPayload);
        }
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| FaceImageError::InvalidPayload(e.to_string()))?;
        Ok(Self { mime: mime.to_owned(), bytes })
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
