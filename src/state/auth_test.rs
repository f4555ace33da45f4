use super::*;

fn session(id: &str) -> Session {
    Session {
        subject_id: id.to_owned(),
        email: "a@b.com".to_owned(),
        external_account_id: "sp".to_owned(),
        issued_at: 0,
        expiry: "1h".to_owned(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_unknown() {
    let state = AuthState::default();
    assert_eq!(state.phase, SessionPhase::Unknown);
    assert!(!state.is_authenticated());
    assert!(state.last_error.is_none());
}

// =============================================================
// is_authenticated
// =============================================================

#[test]
fn authenticated_phase_exposes_session() {
    let state = AuthState { phase: SessionPhase::Authenticated(session("u1")), last_error: None };
    assert!(state.is_authenticated());
    assert_eq!(state.session().map(|s| s.subject_id.as_str()), Some("u1"));
}

#[test]
fn unauthenticated_phase_has_no_session() {
    let state = AuthState { phase: SessionPhase::Unauthenticated, last_error: Some("offline".to_owned()) };
    assert!(!state.is_authenticated());
    assert!(state.session().is_none());
}

// =============================================================
// failure_notice
// =============================================================

#[test]
fn failure_notice_reports_unreachable_server() {
    let state = AuthState {
        phase: SessionPhase::Unauthenticated,
        last_error: Some("request failed: offline".to_owned()),
    };
    let notice = state.failure_notice().unwrap();
    assert!(notice.contains("request failed: offline"));
}

#[test]
fn failure_notice_is_silent_without_error_or_with_session() {
    let no_session = AuthState { phase: SessionPhase::Unauthenticated, last_error: None };
    assert!(no_session.failure_notice().is_none());

    let resolving = AuthState { phase: SessionPhase::Unknown, last_error: Some("stale".to_owned()) };
    assert!(resolving.failure_notice().is_none());

    let signed_in = AuthState {
        phase: SessionPhase::Authenticated(session("u1")),
        last_error: Some("stale".to_owned()),
    };
    assert!(signed_in.failure_notice().is_none());
}
