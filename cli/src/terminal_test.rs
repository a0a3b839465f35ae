use super::*;

#[test]
fn session_argument_is_the_session_param() {
    let browser = TerminalBrowser::new(Some("abc123".to_owned()));
    assert_eq!(browser.query_param("session"), Some("abc123".to_owned()));
    assert_eq!(browser.query_param("error"), None);
}

#[test]
fn no_argument_means_no_param() {
    assert_eq!(TerminalBrowser::default().query_param("session"), None);
}
