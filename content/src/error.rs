//! Failure taxonomy for calls to the remote content service.
//!
//! ERROR HANDLING
//! ==============
//! Transports (`gloo-net` in the browser, `reqwest` in the CLI) classify their
//! failures into [`ApiError`]; every user-facing message is derived here so
//! the web flows and the CLI report identical text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

pub const NOT_FOUND_MESSAGE: &str = "Blog not found";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load blog";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create blog";
pub const COMMENT_FAILED_MESSAGE: &str = "Failed to add comment";
pub const NO_RESPONSE_MESSAGE: &str = "No response from server. Please check if the server is running.";

/// A failed request against the content service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A response arrived with a non-success status.
    #[error("HTTP {status}")]
    Status { status: u16, body: String },
    /// The request was sent but nothing came back.
    #[error("No response from server. Please check if the server is running.")]
    NoResponse,
    /// The request never left, or the response could not be read.
    #[error("{0}")]
    Local(String),
}

impl ApiError {
    #[must_use]
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        Self::Status { status, body: body.into() }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 401 responses send the visitor to sign-in instead of showing a message.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Message for a failed single-post load.
    #[must_use]
    pub fn load_message(&self) -> &'static str {
        if self.is_not_found() { NOT_FOUND_MESSAGE } else { LOAD_FAILED_MESSAGE }
    }

    /// Message for a failed blog creation.
    ///
    /// Priority: the body's `error` field, its `message` field, the raw
    /// serialized body, the no-response notice, the local failure text.
    #[must_use]
    pub fn create_message(&self) -> String {
        match self {
            Self::Status { body, .. } => body_field(body, "error")
                .or_else(|| body_field(body, "message"))
                .or_else(|| serialized_body(body))
                .unwrap_or_else(|| CREATE_FAILED_MESSAGE.to_owned()),
            Self::NoResponse => NO_RESPONSE_MESSAGE.to_owned(),
            Self::Local(message) if !message.trim().is_empty() => message.clone(),
            Self::Local(_) => CREATE_FAILED_MESSAGE.to_owned(),
        }
    }

    /// Message for a failed comment write: the body's `error` field or a
    /// generic fallback.
    #[must_use]
    pub fn comment_message(&self) -> String {
        match self {
            Self::Status { body, .. } => body_field(body, "error"),
            _ => None,
        }
        .unwrap_or_else(|| COMMENT_FAILED_MESSAGE.to_owned())
    }
}

fn body_field(body: &str, key: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Compact JSON when the body parses, the trimmed text otherwise.
fn serialized_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value.to_string()),
        Err(_) => Some(trimmed.to_owned()),
    }
}
