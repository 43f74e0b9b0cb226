//! Auth routes: hosted sign-in/sign-up redirects, current user, logout.
//!
//! The auth provider owns accounts and sessions. The host only forwards the
//! provider's session cookie and never stores identity itself.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::services::identity::{self, IdentityError};
use crate::state::AppState;

/// Non-empty value of the provider session cookie, if present.
pub(crate) fn session_token<'a>(jar: &'a CookieJar, cookie_name: &str) -> Option<&'a str> {
    jar.get(cookie_name)
        .map(Cookie::value)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn hosted_page(url: Option<&str>, label: &str) -> Response {
    match url {
        Some(url) => Redirect::temporary(url).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, format!("{label} is not configured")).into_response(),
    }
}

/// `GET /sign-in`: redirect to the provider's hosted sign-in page.
pub async fn sign_in(State(state): State<AppState>) -> Response {
    hosted_page(state.config.auth.sign_in_url.as_deref(), "Sign-in")
}

/// `GET /sign-up`: redirect to the provider's hosted sign-up page.
pub async fn sign_up(State(state): State<AppState>) -> Response {
    hosted_page(state.config.auth.sign_up_url.as_deref(), "Sign-up")
}

/// `GET /api/auth/me`: resolve the session cookie into the current user.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(userinfo_url) = state.config.auth.userinfo_url.as_deref() else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Auth provider not configured").into_response();
    };
    let Some(token) = session_token(&jar, &state.config.session_cookie) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    match identity::fetch_session_user(&state.http, userinfo_url, token).await {
        Ok(user) => Json(user).into_response(),
        Err(IdentityError::Rejected(status)) => {
            tracing::debug!(%status, "session rejected by provider");
            StatusCode::UNAUTHORIZED.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "identity lookup failed");
            (StatusCode::BAD_GATEWAY, "Failed to reach auth provider").into_response()
        }
    }
}

/// `POST /api/auth/logout`: clear the session cookie.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = Cookie::build((state.config.session_cookie.clone(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .max_age(Duration::ZERO);

    let jar = CookieJar::new().add(cookie);
    (jar, StatusCode::NO_CONTENT)
}
