//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON/form endpoints and stitches them with Leptos
//! SSR rendering under a single Axum router. Page routes (`/login_admin`,
//! `/admin_dashboard`, ...) are GET-only and owned by Leptos; everything the
//! pages POST to lives here.

pub mod accounts;
pub mod attendance;
pub mod auth;
pub mod network;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use roster::endpoints;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Endpoints called by the dashboard scripts and login forms.
pub(crate) fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(endpoints::START_SESSION, post(attendance::start_session))
        .route(endpoints::END_SESSION, post(attendance::end_session))
        .route(endpoints::ACTIVE_STUDENTS, get(attendance::active_students))
        .route(endpoints::UPDATE_ACTIVITY, post(attendance::update_activity))
        .route(endpoints::DOWNLOAD_ATTENDANCE, get(attendance::download_attendance))
        .route(
            endpoints::LOGOUT,
            get(accounts::logout_redirect).post(accounts::logout_beacon),
        )
        .route(endpoints::ADMIN_REGISTER, post(accounts::register_admin))
        .route(endpoints::ADMIN_LOGIN, post(accounts::login_admin))
        .route(endpoints::STUDENT_REGISTER, post(accounts::register_student))
        .route(endpoints::STUDENT_LOGIN, post(accounts::login_student))
        .route(endpoints::ME, get(accounts::me))
        .route(endpoints::NETWORK, get(network::network_info))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR pages + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
