use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use tower::ServiceExt;

use super::*;
use crate::routes::with_guard;
use crate::test_support::configured_state;

fn prefixes() -> Vec<String> {
    ["/dashboard", "/profile", "/settings", "/add-blog"].iter().map(|p| (*p).to_owned()).collect()
}

fn guarded_app() -> Router {
    let pages = Router::new()
        .route("/add-blog", get(|| async { "compose" }))
        .route("/blogs", get(|| async { "list" }));
    with_guard(pages, configured_state(None))
}

fn page(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

#[test]
fn protected_matches_exact_and_nested_paths() {
    let p = prefixes();
    assert!(is_protected("/add-blog", &p));
    assert!(is_protected("/dashboard/stats", &p));
    assert!(is_protected("/settings/", &p));
}

#[test]
fn protected_respects_segment_boundaries() {
    let p = prefixes();
    assert!(!is_protected("/add-blogger", &p));
    assert!(!is_protected("/profiles", &p));
    assert!(!is_protected("/", &p));
    assert!(!is_protected("/blog/add-blog", &p));
}

#[tokio::test]
async fn protected_page_without_cookie_redirects_to_sign_in() {
    let resp = guarded_app().oneshot(page("/add-blog", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[header::LOCATION], "/sign-in");
}

#[tokio::test]
async fn protected_page_with_empty_cookie_redirects() {
    let resp = guarded_app().oneshot(page("/add-blog", Some("__session="))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn protected_page_with_session_passes() {
    let resp = guarded_app().oneshot(page("/add-blog", Some("__session=abc"))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn public_page_needs_no_session() {
    let resp = guarded_app().oneshot(page("/blogs", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
