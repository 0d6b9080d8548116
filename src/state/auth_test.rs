use super::*;
use crate::net::testing::session;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user().is_none());
    assert!(state.session().is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.is_loading());
}

#[test]
fn initial_state_loads_when_auth_enabled() {
    let state = AuthState::initial(false);
    assert!(state.is_loading());
    assert!(!state.is_signed_in());
}

#[test]
fn initial_state_is_settled_when_auth_disabled() {
    let state = AuthState::initial(true);
    assert!(!state.is_loading());
    assert!(state.user().is_none());
}

// =============================================================
// Session/user derivation
// =============================================================

#[test]
fn user_follows_applied_session() {
    let mut state = AuthState::initial(false);

    state.apply_session(Some(session("u-1")));
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u-1"));
    assert!(state.is_signed_in());

    state.apply_session(Some(session("u-2")));
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u-2"));

    state.apply_session(None);
    assert!(state.user().is_none());
    assert!(!state.is_signed_in());
}

#[test]
fn applying_session_does_not_touch_loading() {
    let mut state = AuthState::initial(false);
    state.apply_session(Some(session("u-1")));
    assert!(state.is_loading());
}

#[test]
fn finish_loading_reports_only_first_transition() {
    let mut state = AuthState::initial(false);
    assert!(state.finish_loading());
    assert!(!state.finish_loading());
    assert!(!state.is_loading());
}
