use super::*;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn pending_is_loading_and_signed_out() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn resolved_with_user_is_signed_in() {
    let state = AuthState::resolved(Some(SessionUser {
        id: "user_1".to_owned(),
        first_name: Some("Meera".to_owned()),
        ..SessionUser::default()
    }));
    assert!(!state.loading);
    assert!(state.is_signed_in());
    assert_eq!(state.display_name().as_deref(), Some("Meera"));
}

#[test]
fn resolved_without_user_has_no_display_name() {
    let state = AuthState::resolved(None);
    assert!(!state.loading);
    assert!(state.display_name().is_none());
}
