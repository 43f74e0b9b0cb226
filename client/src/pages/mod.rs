//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Decisions live in `state` so they test without a DOM.

pub mod about;
pub mod add_blog;
pub mod blog;
pub mod blogs;
pub mod chat;
pub mod home;
