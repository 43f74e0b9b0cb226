//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`blogs`, `blog_detail`, `compose`) plus the
//! read-only `auth` context. Each module keeps its transitions as plain
//! functions so pages only wire them to signals and network calls.

pub mod auth;
pub mod blog_detail;
pub mod blogs;
pub mod compose;
