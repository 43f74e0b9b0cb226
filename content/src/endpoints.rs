//! Remote content service paths and client route targets.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Hosted content service used when no override is configured.
pub const DEFAULT_API_BASE: &str = "https://backedn-1-1by3.onrender.com";

pub const BLOGS_PATH: &str = "/api/blogs";

/// Site routes referenced by redirects and calls to action.
pub const ROUTE_HOME: &str = "/";
pub const ROUTE_BLOGS: &str = "/blogs";
pub const ROUTE_ADD_BLOG: &str = "/add-blog";
pub const ROUTE_SIGN_IN: &str = "/sign-in";
pub const ROUTE_SIGN_UP: &str = "/sign-up";
pub const ROUTE_CHAT: &str = "/chat";
pub const ROUTE_ABOUT: &str = "/about";

#[must_use]
pub fn blog_path(id: &str) -> String {
    format!("{BLOGS_PATH}/{id}")
}

#[must_use]
pub fn comments_path(blog_id: &str) -> String {
    format!("{BLOGS_PATH}/comments/{blog_id}")
}

/// Site route for a post's detail view.
#[must_use]
pub fn blog_route(id: &str) -> String {
    format!("/blog/{id}")
}

/// Join a base URL and an absolute path without doubling the slash.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
