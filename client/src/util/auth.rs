//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host guards write routes on full page loads; client-side navigation
//! into them needs the same redirect, applied here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use content::endpoints::ROUTE_SIGN_IN;
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::browser::hard_redirect;

/// `true` once auth has resolved without a signed-in user.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to sign-in whenever auth has loaded and no user is present.
pub fn install_unauth_redirect(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            hard_redirect(ROUTE_SIGN_IN);
        }
    });
}
