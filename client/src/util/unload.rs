//! Best-effort logout when the page is being unloaded.
//!
//! The request goes out through `navigator.sendBeacon`, which the browser
//! queues even as the document is torn down. Delivery is not guaranteed and
//! there is no response to handle.

/// Register the `beforeunload` logout beacon for the lifetime of the calling component.
pub fn install_logout_on_exit() {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::{on_cleanup, window_event_listener};

        let handle = window_event_listener(leptos::ev::beforeunload, |_| {
            if !crate::net::api::logout_beacon() {
                log::warn!("logout beacon was not queued");
            }
        });
        on_cleanup(move || handle.remove());
    }
}
