use super::*;
use roster::FACE_IMAGE_PREFIX;

fn jpeg_url() -> String {
    format!("{FACE_IMAGE_PREFIX}/9j/4AAQSkZJRg==")
}

fn streaming() -> CaptureState {
    let mut state = CaptureState::default();
    state.camera_ready();
    state
}

#[test]
fn login_disabled_by_default() {
    let state = CaptureState::default();
    assert!(!state.login_enabled);
    assert!(state.image.is_empty());
    assert_eq!(state.status_text(), "");
}

#[test]
fn capture_enables_login_and_fills_hidden_field() {
    let mut state = streaming();
    assert!(state.captured(jpeg_url()));

    assert!(state.login_enabled);
    assert!(state.image.starts_with(FACE_IMAGE_PREFIX));
    assert!(state.image.len() > FACE_IMAGE_PREFIX.len());
    assert_eq!(state.status_text(), "Face captured! You can now login.");
    assert_eq!(state.status_style(), "color: green");
}

#[test]
fn camera_denial_shows_red_error_and_keeps_login_disabled() {
    let mut state = CaptureState::default();
    state.camera_failed();

    assert_eq!(state.status_text(), "Error: Cannot access camera");
    assert_eq!(state.status_style(), "color: red");
    assert!(!state.login_enabled);
}

#[test]
fn blank_frame_is_rejected() {
    let mut state = streaming();
    assert!(!state.captured("data:,".to_owned()));

    assert!(!state.login_enabled);
    assert!(state.image.is_empty());
    assert_eq!(state.status, Some(CaptureStatus::CaptureFailed));
    assert_eq!(state.status_style(), "color: red");
}

#[test]
fn recapture_overwrites_previous_image() {
    let mut state = streaming();
    state.captured(jpeg_url());
    let second = format!("{FACE_IMAGE_PREFIX}/9j/");
    assert!(state.captured(second.clone()));
    assert_eq!(state.image, second);
}

#[test]
fn failed_recapture_keeps_earlier_capture() {
    let mut state = streaming();
    state.captured(jpeg_url());
    assert!(!state.captured(String::new()));

    assert!(state.login_enabled);
    assert_eq!(state.image, jpeg_url());
}

#[test]
fn capture_after_camera_denial_keeps_login_disabled() {
    let mut state = CaptureState::default();
    state.camera_failed();

    assert!(!state.captured(jpeg_url()));
    assert!(!state.login_enabled);
    assert!(state.image.is_empty());
    assert_eq!(state.status_text(), "Error: Cannot access camera");
    assert_eq!(state.status_style(), "color: red");
}

#[test]
fn capture_before_stream_attaches_is_refused() {
    let mut state = CaptureState::default();

    assert!(!state.captured(jpeg_url()));
    assert!(!state.login_enabled);
    assert_eq!(state.status, None);
}

#[test]
fn camera_loss_after_capture_blocks_further_captures() {
    let mut state = streaming();
    assert!(state.captured(jpeg_url()));
    state.camera_failed();

    assert!(!state.stream_ready);
    assert!(!state.captured(format!("{FACE_IMAGE_PREFIX}/9j/")));
    assert_eq!(state.image, jpeg_url());
}

#[test]
fn lease_hands_back_held_stream_on_release() {
    let mut lease = StreamLease::default();
    assert_eq!(lease.attach("cam"), None);

    assert_eq!(lease.release(), Some("cam"));
    assert_eq!(lease.release(), None);
}

#[test]
fn stream_arriving_after_release_is_returned_for_stopping() {
    let mut lease = StreamLease::default();
    assert_eq!(lease.release(), None);

    assert_eq!(lease.attach("late"), Some("late"));
    assert_eq!(lease.release(), None);
}
