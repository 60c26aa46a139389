//! Webcam access and frame snapshot for face login.
//!
//! Browser-only: the stream comes from `navigator.mediaDevices.getUserMedia`
//! and the snapshot is drawn onto a fixed-size canvas, then encoded as a JPEG
//! data URL.

/// Snapshot canvas width in pixels.
pub const CAPTURE_WIDTH: u32 = 320;
/// Snapshot canvas height in pixels.
pub const CAPTURE_HEIGHT: u32 = 240;
/// Encoding requested from `canvas.toDataURL`.
pub const CAPTURE_MIME: &str = "image/jpeg";
/// `HTMLMediaElement.HAVE_CURRENT_DATA`: a frame is available to draw.
pub const HAVE_CURRENT_DATA: u16 = 2;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(feature = "hydrate")]
fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Request a video-only camera stream.
///
/// # Errors
///
/// Returns an error string when the browser has no media devices or the
/// user denies access.
#[cfg(feature = "hydrate")]
pub async fn open_stream() -> Result<web_sys::MediaStream, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    let devices = window.navigator().media_devices().map_err(js_error)?;
    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(js_error)?;
    let stream = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(js_error)?;
    stream.dyn_into::<web_sys::MediaStream>().map_err(js_error)
}

/// Draw the current video frame onto `canvas` and return it as a data URL.
///
/// # Errors
///
/// Returns an error string if the video has no frame yet, the 2D context is
/// unavailable, or encoding fails.
#[cfg(feature = "hydrate")]
pub fn snapshot(video: &web_sys::HtmlVideoElement, canvas: &web_sys::HtmlCanvasElement) -> Result<String, String> {
    if video.ready_state() < HAVE_CURRENT_DATA {
        return Err("no video frame available".to_owned());
    }
    canvas.set_width(CAPTURE_WIDTH);
    canvas.set_height(CAPTURE_HEIGHT);
    let context = canvas
        .get_context("2d")
        .map_err(js_error)?
        .ok_or_else(|| "2d context unavailable".to_owned())?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(js_error)?;
    context
        .draw_image_with_html_video_element_and_dw_and_dh(
            video,
            0.0,
            0.0,
            f64::from(CAPTURE_WIDTH),
            f64::from(CAPTURE_HEIGHT),
        )
        .map_err(js_error)?;
    canvas.to_data_url_with_type(CAPTURE_MIME).map_err(js_error)
}

/// Stop every track on `stream`, releasing the camera.
#[cfg(feature = "hydrate")]
pub fn stop_stream(stream: &web_sys::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
            track.stop();
        }
    }
}
