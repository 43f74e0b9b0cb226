//! Shared blog content model for the site, its server host and the CLI.
//!
//! This crate owns the wire representation of the remote content service
//! (posts, comments, author references) and the client-side rules applied
//! before and after talking to it: cover-photo validation, failure
//! classification and display formatting. It performs no I/O so the browser
//! bundle, the server and the CLI can all depend on it.

pub mod endpoints;
pub mod error;
pub mod format;
pub mod types;
pub mod validate;

pub use error::ApiError;
pub use types::{Author, BlogPost, Comment, NewComment, SessionUser};
pub use validate::{CoverPhoto, CoverPhotoError, DraftError};
