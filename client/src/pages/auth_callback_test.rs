use coldmail::session::SessionUser;

use super::*;

fn signed_in() -> Session {
    let mut session = Session::signed_out();
    session.sign_in(
        SessionUser { email: "ada@example.com".to_owned(), user_id: "42".to_owned() },
        Some("abc123".to_owned()),
    );
    session
}

#[test]
fn error_param_means_cancelled() {
    assert_eq!(CallbackStatus::from_query(Some("access_denied")), Some(CallbackStatus::Cancelled));
    assert_eq!(CallbackStatus::from_query(Some("")), None);
    assert_eq!(CallbackStatus::from_query(None), None);
}

#[test]
fn cancellation_wins_over_session_state() {
    assert_eq!(CallbackStatus::resolve(Some("access_denied"), &signed_in()), CallbackStatus::Cancelled);
    assert_eq!(CallbackStatus::resolve(Some("x"), &Session::default()), CallbackStatus::Cancelled);
}

#[test]
fn waits_for_first_status_check() {
    assert_eq!(CallbackStatus::resolve(None, &Session::default()), CallbackStatus::Verifying);
}

#[test]
fn settled_session_decides_outcome() {
    assert_eq!(CallbackStatus::resolve(None, &signed_in()), CallbackStatus::Success);
    assert_eq!(CallbackStatus::resolve(None, &Session::signed_out()), CallbackStatus::Failed);
}

#[test]
fn only_terminal_happy_paths_redirect() {
    assert!(CallbackStatus::Success.redirects_home());
    assert!(CallbackStatus::Cancelled.redirects_home());
    assert!(!CallbackStatus::Failed.redirects_home());
    assert!(!CallbackStatus::Verifying.redirects_home());
}

#[test]
fn user_facing_messages() {
    assert_eq!(CallbackStatus::Cancelled.message(), "Authentication was cancelled");
    assert_eq!(CallbackStatus::Failed.message(), "Failed to verify authentication");
    assert_eq!(REDIRECT_DELAY, Duration::from_secs(2));
}
