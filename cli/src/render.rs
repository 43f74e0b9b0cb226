//! Plain-text rendering of posts for the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use content::BlogPost;
use content::format::{EMPTY_COMMENTS_MESSAGE, EMPTY_LIST_MESSAGE, EXCERPT_CHARS, excerpt, format_date};

/// One block per post: id and date, title, author, excerpt.
pub fn render_list(posts: &[BlogPost]) -> String {
    if posts.is_empty() {
        return format!("{EMPTY_LIST_MESSAGE}\n");
    }
    let mut out = String::new();
    for post in posts {
        let _ = writeln!(out, "[{}] {}", post.id, format_date(post.created_at.as_deref()));
        let _ = writeln!(out, "  {}", post.title);
        let _ = writeln!(out, "  by {}", post.author.name);
        let summary = excerpt(&post.body, EXCERPT_CHARS);
        if !summary.is_empty() {
            let _ = writeln!(out, "  {summary}");
        }
        out.push('\n');
    }
    out
}

/// Full post with its comment thread.
pub fn render_post(post: &BlogPost) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(out, "by {} on {}", post.author.name, format_date(post.created_at.as_deref()));
    if let Some(image) = &post.image_url {
        let _ = writeln!(out, "cover: {image}");
    }
    let _ = writeln!(out, "\n{}\n", post.body.trim());
    let _ = writeln!(out, "Comments ({})", post.comments.len());
    if post.comments.is_empty() {
        let _ = writeln!(out, "  {EMPTY_COMMENTS_MESSAGE}");
    }
    for comment in &post.comments {
        let _ = writeln!(
            out,
            "  - {} ({}): {}",
            comment.author.name,
            format_date(comment.created_at.as_deref()),
            comment.body.trim()
        );
    }
    out
}
