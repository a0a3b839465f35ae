use super::*;

#[test]
fn url_param_wins_over_stored() {
    assert_eq!(
        resolve_carrier(Some("fresh"), Some("old")),
        SessionCarrier::UrlParam("fresh".to_owned())
    );
}

#[test]
fn stored_used_without_url_param() {
    assert_eq!(resolve_carrier(None, Some("old")), SessionCarrier::Stored("old".to_owned()));
}

#[test]
fn cookie_when_nothing_present() {
    assert_eq!(resolve_carrier(None, None), SessionCarrier::Cookie);
    assert_eq!(SessionCarrier::Cookie.session_id(), None);
}

#[test]
fn empty_url_param_falls_through_to_stored() {
    assert_eq!(resolve_carrier(Some(""), Some("old")), SessionCarrier::Stored("old".to_owned()));
    assert_eq!(resolve_carrier(Some("   "), None), SessionCarrier::Cookie);
}

#[test]
fn malformed_url_param_falls_through() {
    assert_eq!(
        resolve_carrier(Some("abc def"), Some("old")),
        SessionCarrier::Stored("old".to_owned())
    );
    assert_eq!(resolve_carrier(Some("undefined"), None), SessionCarrier::Cookie);
    assert_eq!(resolve_carrier(Some("null"), None), SessionCarrier::Cookie);
}

#[test]
fn malformed_stored_value_ignored() {
    assert_eq!(resolve_carrier(None, Some("a\u{0}b")), SessionCarrier::Cookie);
}

#[test]
fn normalize_trims_surrounding_whitespace() {
    assert_eq!(normalize_session_id("  abc123\n"), Some("abc123".to_owned()));
}

#[test]
fn carrier_exposes_id() {
    assert_eq!(SessionCarrier::UrlParam("a".to_owned()).session_id(), Some("a"));
    assert_eq!(SessionCarrier::Stored("b".to_owned()).session_id(), Some("b"));
}
