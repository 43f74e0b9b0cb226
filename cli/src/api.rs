//! HTTP client for the remote content service.
//!
//! Failures are classified into [`ApiError`] so the CLI reports the same
//! messages as the web pages.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use content::endpoints::{self, BLOGS_PATH};
use content::validate::{FIELD_BODY, FIELD_COVER_PHOTO, FIELD_TITLE};
use content::{ApiError, BlogPost, Comment, NewComment};
use reqwest::multipart::{Form, Part};

/// A cover photo read from disk, ready to upload.
#[derive(Debug, Clone)]
pub struct CoverUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
    session_token: Option<String>,
}

fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        ApiError::NoResponse
    } else {
        ApiError::Local(err.to_string())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport_error)?;
    if !status.is_success() {
        return Err(ApiError::from_status(status.as_u16(), body));
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Local(format!("unexpected response body: {e}")))
}

impl ContentClient {
    #[must_use]
    pub fn new(base_url: &str, session_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            session_token: session_token.filter(|t| !t.trim().is_empty()),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// `GET /api/blogs`
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx responses.
    pub async fn list_blogs(&self) -> Result<Vec<BlogPost>, ApiError> {
        let resp = self.http.get(self.url(BLOGS_PATH)).send().await.map_err(transport_error)?;
        read_json(resp).await
    }

    /// `GET /api/blogs/{id}`
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx responses.
    pub async fn get_blog(&self, id: &str) -> Result<BlogPost, ApiError> {
        let resp = self
            .http
            .get(self.url(&endpoints::blog_path(id)))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(resp).await
    }

    /// `POST /api/blogs` as multipart `title`, `body`, `imageUrl`.
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx responses.
    pub async fn create_blog(&self, title: &str, body: &str, cover: CoverUpload) -> Result<BlogPost, ApiError> {
        let part = Part::bytes(cover.bytes)
            .file_name(cover.file_name)
            .mime_str(&cover.mime_type)
            .map_err(|e| ApiError::Local(e.to_string()))?;
        let form = Form::new()
            .text(FIELD_TITLE, title.to_owned())
            .text(FIELD_BODY, body.to_owned())
            .part(FIELD_COVER_PHOTO, part);

        let request = self.http.post(self.url(BLOGS_PATH)).multipart(form);
        let resp = self.authorize(request).send().await.map_err(transport_error)?;
        read_json(resp).await
    }

    /// `POST /api/blogs/comments/{id}` with `{ "body": ... }`.
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx responses.
    pub async fn add_comment(&self, blog_id: &str, body: &str) -> Result<Comment, ApiError> {
        let request = self
            .http
            .post(self.url(&endpoints::comments_path(blog_id)))
            .json(&NewComment { body: body.to_owned() });
        let resp = self.authorize(request).send().await.map_err(transport_error)?;
        read_json(resp).await
    }
}
