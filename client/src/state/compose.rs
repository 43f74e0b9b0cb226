//! Blog creation form state.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use content::endpoints::blog_route;
use content::validate::validate_draft;
use content::{ApiError, BlogPost, CoverPhoto};

pub const SUBMIT_LABEL: &str = "Publish Blog";
pub const SUBMITTING_LABEL: &str = "Publishing...";

/// Byte count of a browser `File`, whose `size` is a JS number.
///
/// A real file size is a whole number below 2^53, so the cast is exact.
/// A negative or non-finite value reads as oversized and fails validation.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn file_byte_len(size: f64) -> u64 {
    if size.is_finite() && size >= 0.0 { size as u64 } else { u64::MAX }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposeState {
    pub error: Option<String>,
    pub submitting: bool,
}

/// Where the form goes after the create request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComposeOutcome {
    /// Open the new post's detail view.
    Navigate(String),
    RedirectSignIn,
    /// Stay on the form; `error` holds the message.
    Stay,
}

impl ComposeState {
    /// Validate the draft and mark the form as submitting.
    ///
    /// Returns `false` (nothing to send) while a submission is in flight or
    /// when validation fails; the failure message lands in `error`.
    pub fn begin_submit(&mut self, title: &str, body: &str, photo: Option<&CoverPhoto>) -> bool {
        if self.submitting {
            return false;
        }
        self.error = None;
        if let Err(err) = validate_draft(title, body, photo) {
            self.error = Some(err.to_string());
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn finish_submit(&mut self, result: Result<BlogPost, ApiError>) -> ComposeOutcome {
        self.submitting = false;
        match result {
            Ok(post) => ComposeOutcome::Navigate(blog_route(&post.id)),
            Err(err) if err.is_unauthorized() => ComposeOutcome::RedirectSignIn,
            Err(err) => {
                self.error = Some(err.create_message());
                ComposeOutcome::Stay
            }
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }
}
