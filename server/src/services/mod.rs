//! Services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own calls to external systems so route handlers can stay
//! focused on protocol translation and cookie plumbing.

pub mod identity;
