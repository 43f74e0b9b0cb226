//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the auth endpoints and stitches them with Leptos SSR
//! rendering under a single Axum router. The route guard wraps everything so
//! protected pages never render without a session cookie.

pub mod auth;
pub mod guard;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Host-owned routes: hosted auth redirects, identity proxy, health check.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/sign-in", get(auth::sign_in))
        .route("/sign-up", get(auth::sign_up))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Apply the session guard to `router`.
pub fn with_guard(router: Router, state: AppState) -> Router {
    router.layer(middleware::from_fn_with_state(state, guard::require_session))
}

/// Full site: API routes + Leptos SSR + `/pkg` assets, guarded and traced.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` / `LEPTOS_*` settings).
pub fn app(state: AppState) -> Result<Router, String> {
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

    let site = api_routes(state.clone())
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    Ok(with_guard(site, state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
