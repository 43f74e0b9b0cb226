//! Display formatting for post cards and detail headers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Characters of body text shown on a list card before truncation.
pub const EXCERPT_CHARS: usize = 160;

/// Shown when a record carries no parseable timestamp.
pub const UNKNOWN_DATE: &str = "Unknown date";

pub const EMPTY_LIST_MESSAGE: &str = "No blogs available yet.";
pub const EMPTY_COMMENTS_MESSAGE: &str = "No comments yet. Be the first to share your thoughts!";

/// Format an RFC 3339 timestamp as a short `M/D/YYYY` date.
#[must_use]
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(|value| OffsetDateTime::parse(value.trim(), &Rfc3339).ok())
        .map_or_else(
            || UNKNOWN_DATE.to_owned(),
            |ts| format!("{}/{}/{}", u8::from(ts.month()), ts.day(), ts.year()),
        )
}

/// Truncate body text on a character boundary, appending an ellipsis when cut.
#[must_use]
pub fn excerpt(body: &str, max_chars: usize) -> String {
    let body = body.trim();
    match body.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", body[..cut].trim_end()),
        None => body.to_owned(),
    }
}
