//! Auth-session state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written once by the app bootstrap (and cleared on logout); every page reads
//! it from context to decide between signed-in and signed-out affordances.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use content::SessionUser;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthState {
    /// State before the auth provider has answered.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn resolved(user: Option<SessionUser>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Display name of the signed-in user, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(SessionUser::display_name)
    }
}
