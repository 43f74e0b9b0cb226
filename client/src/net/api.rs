//! REST API helpers for the remote content service and the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Content calls return [`ApiError`] so each page can pick its own message
//! (not-found vs. generic, sign-in redirect on 401). Auth calls degrade to
//! `None` so an unreachable provider just looks signed out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use content::NewComment;
#[cfg(any(test, feature = "hydrate"))]
use content::endpoints;
use content::{ApiError, BlogPost, Comment, SessionUser};

#[cfg(any(test, feature = "hydrate"))]
const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";
#[cfg(feature = "hydrate")]
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Base URL of the content service, fixed when the WASM bundle is built.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("CONTENT_API_URL").unwrap_or(content::endpoints::DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    endpoints::join(api_base(), path)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Local("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    match err {
        // fetch() rejects without a response on network failure, CORS denial
        // or an unreachable host.
        gloo_net::Error::JsError(_) => ApiError::NoResponse,
        other => ApiError::Local(other.to_string()),
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> ApiError {
    ApiError::Local(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(resp.status(), body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Local(e.to_string()))
}

/// Fetch all posts from `GET /api/blogs`.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures and non-2xx responses.
pub async fn fetch_blogs() -> Result<Vec<BlogPost>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url(endpoints::BLOGS_PATH))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Fetch one post from `GET /api/blogs/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`]; a missing post surfaces as a 404 status.
pub async fn fetch_blog(id: &str) -> Result<BlogPost, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&api_url(&endpoints::blog_path(id)))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(unavailable())
    }
}

/// Post a comment via `POST /api/blogs/comments/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures and non-2xx responses.
pub async fn add_comment(blog_id: &str, body: &str) -> Result<Comment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = NewComment { body: body.to_owned() };
        let resp = gloo_net::http::Request::post(&api_url(&endpoints::comments_path(blog_id)))
            .json(&payload)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (blog_id, body);
        Err(unavailable())
    }
}

/// Create a post via multipart `POST /api/blogs`.
///
/// # Errors
///
/// Returns an [`ApiError`]: `Local` when the form payload cannot be built,
/// `NoResponse` when the request gets no answer, `Status` otherwise.
#[cfg(feature = "hydrate")]
pub async fn create_blog(title: &str, body: &str, cover_photo: &web_sys::File) -> Result<BlogPost, ApiError> {
    use content::validate::{FIELD_BODY, FIELD_COVER_PHOTO, FIELD_TITLE};

    let form = web_sys::FormData::new().map_err(|e| js_error(&e))?;
    form.append_with_str(FIELD_TITLE, title).map_err(|e| js_error(&e))?;
    form.append_with_str(FIELD_BODY, body).map_err(|e| js_error(&e))?;
    form.append_with_blob_and_filename(FIELD_COVER_PHOTO, cover_photo, &cover_photo.name())
        .map_err(|e| js_error(&e))?;

    let resp = gloo_net::http::Request::post(&api_url(endpoints::BLOGS_PATH))
        .body(form)
        .map_err(transport_error)?
        .send()
        .await
        .map_err(transport_error)?;
    read_json(resp).await
}

/// Fetch the signed-in user from the site's `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the provider session by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::error!("Logout failed: {e}");
        }
    }
}
