//! Webcam preview, snapshot button, and hidden `face_image` field.
//!
//! SYSTEM CONTEXT
//! ==============
//! Embedded in the student login form. The camera is requested once on
//! mount and released on unmount; a denial leaves the parent's login button
//! disabled. Each capture overwrites the hidden field, which is submitted
//! with the form.

use leptos::prelude::*;
use roster::FACE_IMAGE_FIELD;

#[cfg(feature = "hydrate")]
use crate::state::capture::StreamLease;
use crate::state::capture::CaptureState;
use crate::util::camera::{CAPTURE_HEIGHT, CAPTURE_WIDTH};

#[component]
pub fn FaceCapture(capture: RwSignal<CaptureState>) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let lease = StoredValue::new_local(StreamLease::<web_sys::MediaStream>::default());
        let requested = RwSignal::new(false);
        Effect::new(move || {
            let Some(video) = video_ref.get() else {
                return;
            };
            if requested.get_untracked() {
                return;
            }
            requested.set(true);
            leptos::task::spawn_local(async move {
                match crate::util::camera::open_stream().await {
                    Ok(stream) => {
                        let orphan = lease
                            .try_update_value(|l| l.attach(stream.clone()))
                            .unwrap_or(Some(stream.clone()));
                        if let Some(orphan) = orphan {
                            crate::util::camera::stop_stream(&orphan);
                            return;
                        }
                        video.set_src_object(Some(&stream));
                        capture.try_update(CaptureState::camera_ready);
                    }
                    Err(e) => {
                        log::error!("Error accessing camera: {e}");
                        capture.try_update(CaptureState::camera_failed);
                    }
                }
            });
        });
        on_cleanup(move || {
            if let Some(stream) = lease.try_update_value(StreamLease::release).flatten() {
                crate::util::camera::stop_stream(&stream);
            }
        });
    }

    let on_capture = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let (Some(video), Some(canvas)) = (video_ref.get_untracked(), canvas_ref.get_untracked()) else {
                return;
            };
            let data_url = crate::util::camera::snapshot(&video, &canvas).unwrap_or_else(|e| {
                log::error!("face capture failed: {e}");
                String::new()
            });
            capture.update(|c| {
                c.captured(data_url);
            });
        }
    };

    view! {
        <div class="face-capture">
            <video
                node_ref=video_ref
                id="video"
                class="face-capture__video"
                width=CAPTURE_WIDTH.to_string()
                height=CAPTURE_HEIGHT.to_string()
                autoplay=true
                playsinline=true
                muted=true
            ></video>
            <canvas
                node_ref=canvas_ref
                id="canvas"
                width=CAPTURE_WIDTH.to_string()
                height=CAPTURE_HEIGHT.to_string()
                hidden=true
            ></canvas>
            <button type="button" id="capture-btn" class="btn" on:click=on_capture>
                "Capture Face"
            </button>
            <p id="capture-status" class="face-capture__status" style=move || capture.get().status_style()>
                {move || capture.get().status_text()}
            </p>
            <input type="hidden" id="face-image" name=FACE_IMAGE_FIELD prop:value=move || capture.get().image />
        </div>
    }
}
