//! Thin wrappers over `window` APIs that no-op during SSR.

/// Full-page navigation, leaving the client router.
///
/// Sign-in and sign-up are served by the host as redirects to the auth
/// provider, so they cannot be reached through client-side routing.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Blocking browser alert, used for comment submission feedback.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
