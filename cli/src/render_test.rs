use coldmail::session::SessionUser;

use super::*;

#[test]
fn describes_signed_in_user() {
    let mut session = Session::signed_out();
    session.sign_in(SessionUser { email: "ada@example.com".to_owned(), user_id: "42".to_owned() }, None);
    assert_eq!(describe_session(&session), "Signed in as ada@example.com (user 42)");
    assert_eq!(session_json(&session)["userId"], "42");
    assert_eq!(session_json(&session)["authenticated"], true);
}

#[test]
fn describes_signed_out_session() {
    let session = Session::signed_out();
    assert!(describe_session(&session).starts_with("Not signed in"));
    assert_eq!(session_json(&session)["email"], serde_json::Value::Null);
}

#[test]
fn successful_run_mentions_drafts() {
    let result = ProcessResult { total_processed: 2, success_count: 2, ..ProcessResult::default() };
    let text = render_result(&result);
    assert!(text.starts_with("Processing completed successfully\n"));
    assert!(text.contains("2 email drafts have been created"));
    assert!(!text.contains("Errors:\n"));
}

#[test]
fn missing_templates_replace_generic_errors() {
    let result = ProcessResult {
        total_processed: 1,
        error_count: 1,
        errors: vec!["Template not found for role FSE".to_owned()],
        missing_templates: vec![MissingAsset {
            role: "FSE".to_owned(),
            expected_path: "/templates/FSE.txt".to_owned(),
            suggestion: "Create FSE.txt".to_owned(),
            affected_emails: vec!["a@x.com".to_owned()],
        }],
        ..ProcessResult::default()
    };
    let text = render_result(&result);
    assert!(text.contains("Missing email templates:\n  - FSE.txt (1 email affected)"));
    assert!(!text.contains("Template not found for role FSE"));
}

#[test]
fn failure_result_lists_error_and_help() {
    let text = render_result(&ProcessResult::failed("Gmail quota exceeded"));
    assert!(text.starts_with("Processing completed with errors"));
    assert!(text.contains("Errors:\n  - Gmail quota exceeded"));
    assert!(text.contains("How to fix: "));
}

#[test]
fn raw_body_is_printed() {
    let result = ProcessResult { raw: Some("queued".to_owned()), ..ProcessResult::default() };
    assert!(render_result(&result).ends_with("\nqueued\n"));
}
