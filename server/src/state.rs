//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds immutable config and one pooled HTTP client for auth provider calls.

use std::sync::Arc;

use crate::config::Config;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; both fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config: Arc::new(config), http: reqwest::Client::new() }
    }
}
