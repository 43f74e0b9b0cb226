//! Fakes shared by route and service tests.

use std::net::SocketAddr;

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::json;

use crate::config::Config;
use crate::state::AppState;

pub const GOOD_TOKEN: &str = "sess_good";
pub const BROKEN_TOKEN: &str = "sess_broken";

/// Fake auth provider user-info endpoint.
///
/// `GOOD_TOKEN` resolves to a user, `BROKEN_TOKEN` yields a 500, anything
/// else a 401.
async fn userinfo(headers: HeaderMap) -> Response {
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or_default();
    match token {
        GOOD_TOKEN => axum::Json(json!({
            "sub": "user_1",
            "given_name": "Meera",
            "family_name": "Iyer",
            "name": "Meera Iyer"
        }))
        .into_response(),
        BROKEN_TOKEN => (StatusCode::INTERNAL_SERVER_ERROR, "upstream down").into_response(),
        _ => (StatusCode::UNAUTHORIZED, "bad session").into_response(),
    }
}

/// Serve the fake provider on an ephemeral port; returns its user-info URL.
pub async fn spawn_provider() -> String {
    let app = Router::new().route("/userinfo", get(userinfo));
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("bind fake provider");
    let addr = listener.local_addr().expect("fake provider addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/userinfo")
}

/// State with every provider piece configured; `userinfo_url` may be a fake.
pub fn configured_state(userinfo_url: Option<String>) -> AppState {
    let mut config = Config::default();
    config.auth.sign_in_url = Some("https://accounts.example.com/sign-in".to_owned());
    config.auth.sign_up_url = Some("https://accounts.example.com/sign-up".to_owned());
    config.auth.userinfo_url = userinfo_url;
    AppState::new(config)
}
