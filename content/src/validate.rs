//! Client-side checks applied before any write reaches the content service.
//!
//! Checks run in a fixed order and stop at the first failure. None of them
//! touch the network, so a rejected draft has no side effects.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Largest accepted cover photo, in bytes. A file of exactly this size passes.
pub const MAX_COVER_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types accepted for cover photos.
pub const ALLOWED_COVER_PHOTO_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Multipart field names expected by `POST /api/blogs`.
pub const FIELD_TITLE: &str = "title";
pub const FIELD_BODY: &str = "body";
pub const FIELD_COVER_PHOTO: &str = "imageUrl";

/// The parts of a selected file that validation cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverPhoto {
    pub mime_type: String,
    pub size: u64,
}

impl CoverPhoto {
    #[must_use]
    pub fn new(mime_type: impl Into<String>, size: u64) -> Self {
        Self { mime_type: mime_type.into(), size }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoverPhotoError {
    #[error("Please select a cover photo")]
    Missing,
    #[error("Only JPG, PNG, and GIF files are allowed")]
    UnsupportedFormat,
    #[error("File size must be less than 5MB")]
    TooLarge,
}

/// Rejections for a new blog draft, in the order they are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Please enter a title")]
    MissingTitle,
    #[error("Please write some content")]
    MissingBody,
    #[error(transparent)]
    CoverPhoto(#[from] CoverPhotoError),
}

/// Validate the selected cover photo.
///
/// # Errors
///
/// Returns the first failing check: missing file, unsupported MIME type, then
/// size strictly greater than [`MAX_COVER_PHOTO_BYTES`].
pub fn validate_cover_photo(photo: Option<&CoverPhoto>) -> Result<(), CoverPhotoError> {
    let photo = photo.ok_or(CoverPhotoError::Missing)?;
    if !ALLOWED_COVER_PHOTO_TYPES.contains(&photo.mime_type.as_str()) {
        return Err(CoverPhotoError::UnsupportedFormat);
    }
    if photo.size > MAX_COVER_PHOTO_BYTES {
        return Err(CoverPhotoError::TooLarge);
    }
    Ok(())
}

/// Validate a complete blog draft: required text fields, then the cover photo.
///
/// # Errors
///
/// Returns the first failing check as a [`DraftError`].
pub fn validate_draft(title: &str, body: &str, photo: Option<&CoverPhoto>) -> Result<(), DraftError> {
    if title.trim().is_empty() {
        return Err(DraftError::MissingTitle);
    }
    if body.trim().is_empty() {
        return Err(DraftError::MissingBody);
    }
    validate_cover_photo(photo)?;
    Ok(())
}

/// Inline alert shown when a comment is submitted without text.
pub const EMPTY_COMMENT_MESSAGE: &str = "Please enter a comment";

/// Trim comment input, rejecting whitespace-only text.
///
/// # Errors
///
/// Returns [`EMPTY_COMMENT_MESSAGE`] when nothing but whitespace was entered.
pub fn validate_comment(raw: &str) -> Result<&str, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EMPTY_COMMENT_MESSAGE);
    }
    Ok(trimmed)
}
