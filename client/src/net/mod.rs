//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls to the remote content service and to the site's
//! own auth endpoints. Wire types live in the shared `content` crate.

pub mod api;
