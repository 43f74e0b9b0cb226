//! Single-post state for the `/blog/:id` page: load outcome and the comment
//! submission flow.
//!
//! DESIGN
//! ======
//! Comment submission is split into [`begin_comment`] (decides whether a
//! request is sent at all) and [`finish_comment`] (applies the response).
//! Every early exit happens in `begin_comment`, before any network call.

#[cfg(test)]
#[path = "blog_detail_test.rs"]
mod blog_detail_test;

use content::validate::validate_comment;
use content::{ApiError, BlogPost, Comment};

use super::auth::AuthState;

pub use content::format::EMPTY_COMMENTS_MESSAGE;

/// Outcome of the single post request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BlogLoad {
    #[default]
    Loading,
    Failed(&'static str),
    Loaded(BlogPost),
}

impl BlogLoad {
    #[must_use]
    pub fn from_result(result: Result<BlogPost, ApiError>) -> Self {
        match result {
            Ok(blog) => Self::Loaded(blog),
            Err(err) => Self::Failed(err.load_message()),
        }
    }

    #[must_use]
    pub fn blog(&self) -> Option<&BlogPost> {
        match self {
            Self::Loaded(blog) => Some(blog),
            _ => None,
        }
    }
}

/// What the comment form should do when submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommentStep {
    /// A submission is already in flight, or there is no post to comment on.
    Ignored,
    RedirectSignIn,
    /// Show an alert; nothing is sent.
    Alert(&'static str),
    Submit { blog_id: String, body: String, author_name: String },
}

/// Decide how to handle a comment submit.
///
/// Order: in-flight guard, signed-in identity, non-blank text.
#[must_use]
pub fn begin_comment(auth: &AuthState, load: &BlogLoad, draft: &str, pending: bool) -> CommentStep {
    if pending {
        return CommentStep::Ignored;
    }
    let Some(author_name) = auth.display_name() else {
        return CommentStep::RedirectSignIn;
    };
    let body = match validate_comment(draft) {
        Ok(body) => body,
        Err(message) => return CommentStep::Alert(message),
    };
    let Some(blog) = load.blog() else {
        return CommentStep::Ignored;
    };
    CommentStep::Submit { blog_id: blog.id.clone(), body: body.to_owned(), author_name }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommentOutcome {
    /// The comment was appended; the caller clears the input.
    Appended,
    RedirectSignIn,
    /// Show the message; the input keeps its text for a retry.
    Alert(String),
}

/// Apply the comment write response to the loaded post.
pub fn finish_comment(load: &mut BlogLoad, result: Result<Comment, ApiError>, author_name: &str) -> CommentOutcome {
    match result {
        Ok(comment) => {
            if let BlogLoad::Loaded(blog) = load {
                blog.append_comment(comment, author_name);
            }
            CommentOutcome::Appended
        }
        Err(err) if err.is_unauthorized() => CommentOutcome::RedirectSignIn,
        Err(err) => CommentOutcome::Alert(err.comment_message()),
    }
}

/// How the comments section renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CommentsView<'a> {
    Empty(&'static str),
    List(&'a [Comment]),
}

#[must_use]
pub fn comments_view(comments: &[Comment]) -> CommentsView<'_> {
    if comments.is_empty() {
        CommentsView::Empty(EMPTY_COMMENTS_MESSAGE)
    } else {
        CommentsView::List(comments)
    }
}
