//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Session control
//! treats any resolved response as success, so status codes are not checked
//! there; the roster poll does check them, so a 403 leaves the table stale.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use roster::{Me, MessageReply, NetworkInfo, StudentRecord, endpoints};

/// Admin session toggle issued by the dashboard buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    End,
}

impl SessionAction {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Start => endpoints::START_SESSION,
            Self::End => endpoints::END_SESSION,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start Session",
            Self::End => "End Session",
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Fetch the current session identity from `/api/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_me() -> Option<Me> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoints::ME).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Me>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// POST a session toggle and parse the `{message}` reply.
///
/// Any resolved response is parsed, regardless of status code.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not JSON.
pub async fn post_session(action: SessionAction) -> Result<MessageReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(action.endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<MessageReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = action;
        Err("not available on server".to_owned())
    }
}

/// Fetch the current roster snapshot from `/active_students`.
///
/// # Errors
///
/// Returns an error string on network failure, a non-OK status, or a body
/// that is not a list of student records.
pub async fn fetch_active_students() -> Result<Vec<StudentRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoints::ACTIVE_STUDENTS)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("roster request", resp.status()));
        }
        resp.json::<Vec<StudentRecord>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Liveness ping via `POST /update_activity`. The response is discarded.
pub async fn send_heartbeat() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(endpoints::UPDATE_ACTIVITY)
            .send()
            .await;
    }
}

/// Queue `POST /logout` with `navigator.sendBeacon`.
///
/// Returns whether the browser accepted the beacon; delivery is not confirmed.
pub fn logout_beacon() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.navigator().send_beacon(endpoints::LOGOUT).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Fetch the Wi-Fi access point reported by the server.
pub async fn fetch_network() -> Option<NetworkInfo> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoints::NETWORK).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<NetworkInfo>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
