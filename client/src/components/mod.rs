//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and blog presentation while reading shared
//! state from Leptos context providers.

pub mod blog_card;
pub mod chat_cta;
pub mod chat_panel;
pub mod comment_list;
pub mod footer;
pub mod navbar;
