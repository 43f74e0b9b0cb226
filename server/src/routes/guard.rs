//! Route guard for write pages.
//!
//! Full page loads of a protected path without a provider session cookie are
//! redirected to `/sign-in` before SSR runs. Everything else passes through.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use content::endpoints::ROUTE_SIGN_IN;

use super::auth::session_token;
use crate::state::AppState;

/// `true` when `path` equals a prefix or sits below it on a segment boundary.
pub(crate) fn is_protected(path: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| {
        path.strip_prefix(prefix.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

pub async fn require_session(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if !is_protected(path, &state.config.protected_paths) {
        return next.run(request).await;
    }

    let jar = CookieJar::from_headers(request.headers());
    if session_token(&jar, &state.config.session_cookie).is_none() {
        tracing::debug!(%path, "no session for protected path");
        return Redirect::temporary(ROUTE_SIGN_IN).into_response();
    }
    next.run(request).await
}
