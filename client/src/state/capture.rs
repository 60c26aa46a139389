//! Face-capture state for the student login form.
//!
//! The login control starts disabled and is enabled only by a successful
//! capture from a live camera stream. A camera failure never enables it.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use roster::FaceImage;

/// Status line shown under the video preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureStatus {
    CameraUnavailable,
    Captured,
    CaptureFailed,
}

impl CaptureStatus {
    pub fn text(self) -> &'static str {
        match self {
            Self::CameraUnavailable => "Error: Cannot access camera",
            Self::Captured => "Face captured! You can now login.",
            Self::CaptureFailed => "Error: Capture failed, try again",
        }
    }

    /// CSS color for the status text.
    pub fn color(self) -> &'static str {
        match self {
            Self::Captured => "green",
            Self::CameraUnavailable | Self::CaptureFailed => "red",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureState {
    pub status: Option<CaptureStatus>,
    /// Value of the hidden `face_image` field.
    pub image: String,
    pub login_enabled: bool,
    /// A camera stream is attached to the preview.
    pub stream_ready: bool,
}

impl CaptureState {
    /// Camera access was denied or failed.
    pub fn camera_failed(&mut self) {
        self.status = Some(CaptureStatus::CameraUnavailable);
        self.stream_ready = false;
    }

    /// The camera stream is attached and frames can be captured.
    pub fn camera_ready(&mut self) {
        self.stream_ready = true;
    }

    /// Record a snapshot data URL. Returns `true` if it was accepted.
    ///
    /// Without a live stream the canvas holds a blank frame, so any snapshot
    /// is refused. A rejected snapshot keeps any earlier capture and login
    /// state.
    pub fn captured(&mut self, data_url: String) -> bool {
        if !self.stream_ready || self.status == Some(CaptureStatus::CameraUnavailable) {
            return false;
        }
        if FaceImage::parse(&data_url).is_err() {
            self.status = Some(CaptureStatus::CaptureFailed);
            return false;
        }
        self.image = data_url;
        self.status = Some(CaptureStatus::Captured);
        self.login_enabled = true;
        true
    }

    /// Inline style for the status line.
    pub fn status_style(&self) -> String {
        self.status
            .map(|s| format!("color: {}", s.color()))
            .unwrap_or_default()
    }

    pub fn status_text(&self) -> &'static str {
        self.status.map(CaptureStatus::text).unwrap_or_default()
    }
}

/// Ownership of the camera stream across the capture component's lifetime.
///
/// Once released, any stream that arrives late is handed straight back so the
/// caller can stop it.
#[derive(Debug)]
pub struct StreamLease<T> {
    held: Option<T>,
    released: bool,
}

impl<T> Default for StreamLease<T> {
    fn default() -> Self {
        Self { held: None, released: false }
    }
}

impl<T> StreamLease<T> {
    /// Keep `stream` until release. Returns it back if the lease is already released.
    pub fn attach(&mut self, stream: T) -> Option<T> {
        if self.released {
            return Some(stream);
        }
        self.held = Some(stream);
        None
    }

    /// End the lease and hand over the held stream for stopping.
    pub fn release(&mut self) -> Option<T> {
        self.released = true;
        self.held.take()
    }
}
