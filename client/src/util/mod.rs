//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (full-page navigation, alerts)
//! from page and component logic.

pub mod auth;
pub mod browser;
