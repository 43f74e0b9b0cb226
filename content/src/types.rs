//! Wire DTOs for the remote content service and the auth provider.
//!
//! DESIGN
//! ======
//! Upstream data is inconsistent about the `createby` author reference: it is
//! sometimes a populated record, sometimes a bare user-id string, sometimes
//! missing. [`Author`] resolves every shape once during deserialization so
//! render sites never see the raw variants.
//!
//! The same leniency applies to the rest of a post: `null` text fields decode
//! as empty strings, and `comments` entries that are not comment records
//! (unpopulated references) are skipped. One oddly shaped post must not fail a whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Display name used when a post or comment has no resolvable author.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Display name used when the signed-in user has neither a full nor a first name.
pub const FALLBACK_USER_NAME: &str = "User";

/// Author of a post or comment, already normalized for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
}

impl Author {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::named(ANONYMOUS_AUTHOR)
    }

    /// Resolve a raw `createby` value into an author.
    ///
    /// Only an object carrying a non-blank string `name` keeps its name,
    /// trimmed.
    /// Strings (unpopulated references), nulls and malformed objects all
    /// resolve to [`ANONYMOUS_AUTHOR`].
    #[must_use]
    pub fn resolve(raw: &Value) -> Self {
        match raw {
            Value::Object(map) => match map.get("name").and_then(Value::as_str) {
                Some(name) if !name.trim().is_empty() => Self::named(name.trim()),
                _ => Self::anonymous(),
            },
            _ => Self::anonymous(),
        }
    }
}

impl Default for Author {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl<'de> Deserialize<'de> for Author {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::resolve(&raw))
    }
}

/// A blog post as returned by `GET /api/blogs` and `GET /api/blogs/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub body: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "createby", default)]
    pub author: Author,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_comments")]
    pub comments: Vec<Comment>,
}

impl BlogPost {
    /// Append a freshly created comment to the in-memory copy of this post.
    ///
    /// The author is replaced by the locally known user so the post does not
    /// need to be fetched again after a successful write.
    pub fn append_comment(&mut self, mut comment: Comment, author_name: &str) {
        comment.author = Author::named(author_name);
        self.comments.push(comment);
    }
}

/// A comment attached to a blog post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub body: String,
    #[serde(rename = "createby", default)]
    pub author: Author,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// JSON body for `POST /api/blogs/comments/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub body: String,
}

/// Identity of the signed-in visitor as reported by the auth provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl SessionUser {
    /// Name shown on comments written by this user: the provider's full
    /// name, else the first name, else [`FALLBACK_USER_NAME`].
    #[must_use]
    pub fn display_name(&self) -> String {
        non_blank(self.full_name.as_deref())
            .or_else(|| non_blank(self.first_name.as_deref()))
            .unwrap_or(FALLBACK_USER_NAME)
            .to_owned()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A `null` text field reads as empty.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `comments` may be missing or `null` upstream; both mean "no comments".
/// Entries that do not read as a comment record (bare id references, for
/// instance) are skipped.
fn deserialize_comments<'de, D>(deserializer: D) -> Result<Vec<Comment>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| Comment::deserialize(entry).ok())
        .collect())
}
