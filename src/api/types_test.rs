use super::*;

// =============================================================
// AuthStatus
// =============================================================

#[test]
fn auth_status_authenticated_yields_user() {
    let status: AuthStatus =
        serde_json::from_str(r#"{"authenticated":true,"email":"a@b.com","userId":"1"}"#).unwrap();
    let user = status.user().unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.user_id, "1");
}

#[test]
fn auth_status_numeric_user_id() {
    let status: AuthStatus =
        serde_json::from_str(r#"{"authenticated":true,"email":"a@b.com","userId":42}"#).unwrap();
    assert_eq!(status.user_id.as_deref(), Some("42"));
}

#[test]
fn auth_status_unauthenticated_has_no_user() {
    let status: AuthStatus =
        serde_json::from_str(r#"{"authenticated":false,"email":"a@b.com"}"#).unwrap();
    assert!(status.user().is_none());
}

#[test]
fn auth_status_minimal_payload() {
    let status: AuthStatus = serde_json::from_str(r#"{"authenticated":false}"#).unwrap();
    assert_eq!(status, AuthStatus::default());
}

#[test]
fn auth_status_authenticated_without_fields_still_has_user() {
    let status: AuthStatus = serde_json::from_str(r#"{"authenticated":true,"userId":null}"#).unwrap();
    let user = status.user().unwrap();
    assert!(user.email.is_empty());
    assert!(user.user_id.is_empty());
}

#[test]
fn auth_status_rejects_object_user_id() {
    let res = serde_json::from_str::<AuthStatus>(r#"{"authenticated":true,"userId":{}}"#);
    assert!(res.is_err());
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_extracts_url() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"authUrl":"https://accounts.google.com/o/oauth2/auth?x=1"}"#).unwrap();
    assert_eq!(
        resp.into_auth_url().unwrap(),
        "https://accounts.google.com/o/oauth2/auth?x=1"
    );
}

#[test]
fn login_response_missing_url() {
    let resp: LoginResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.into_auth_url(), Err(ApiError::MissingField("authUrl")));
}

#[test]
fn login_response_blank_url_counts_as_missing() {
    let resp = LoginResponse { auth_url: Some("  ".to_owned()) };
    assert_eq!(resp.into_auth_url(), Err(ApiError::MissingField("authUrl")));
}

// =============================================================
// ProcessResult
// =============================================================

fn sample_result() -> ProcessResult {
    serde_json::from_value(serde_json::json!({
        "totalProcessed": 5,
        "successCount": 3,
        "errorCount": 2,
        "errors": ["row 4: missing email", "row 5: missing role"],
        "warnings": [],
        "missingTemplates": [{
            "role": "FSE",
            "expectedPath": "templates/FSE.txt",
            "suggestion": "Add a template whose name contains FSE",
            "affectedEmails": ["x@y.com", "z@y.com"]
        }],
        "helpText": "See the template guide"
    }))
    .unwrap()
}

#[test]
fn process_result_decodes_with_defaults() {
    let result = sample_result();
    assert_eq!(result.total_processed, 5);
    assert_eq!(result.missing_templates[0].affected_emails.len(), 2);
    assert_eq!(result.missing_templates[0].expected_path, "templates/FSE.txt");
    assert!(result.missing_resumes.is_empty());
    assert_eq!(result.help_text.as_deref(), Some("See the template guide"));
    assert!(result.raw.is_none());
}

#[test]
fn overall_errors_dominate() {
    let mut result = sample_result();
    result.warnings.push("duplicate row".to_owned());
    assert_eq!(result.overall(), OverallStatus::Errors);
    assert_eq!(result.overall_message(), "Processing completed with errors");
}

#[test]
fn overall_warnings_without_errors() {
    let result = ProcessResult { warnings: vec!["w".to_owned()], ..ProcessResult::default() };
    assert_eq!(result.overall(), OverallStatus::Warnings);
}

#[test]
fn overall_success_when_clean() {
    assert_eq!(ProcessResult::default().overall(), OverallStatus::Success);
}

#[test]
fn draft_summary_pluralizes() {
    let mut result = ProcessResult::default();
    assert_eq!(result.draft_summary(), None);
    result.success_count = 1;
    assert_eq!(
        result.draft_summary().unwrap(),
        "1 email draft has been created in your Gmail drafts folder."
    );
    result.success_count = 3;
    assert_eq!(
        result.draft_summary().unwrap(),
        "3 email drafts have been created in your Gmail drafts folder."
    );
}

#[test]
fn generic_errors_hidden_when_grouped() {
    let result = sample_result();
    assert!(!result.shows_generic_errors());
    let failed = ProcessResult::failed("HTTP 500");
    assert!(failed.shows_generic_errors());
}

#[test]
fn failed_builds_single_error_result() {
    let result = ProcessResult::failed("Excel file unreadable");
    assert_eq!(result.total_processed, 0);
    assert_eq!(result.success_count, 0);
    assert_eq!(result.error_count, 1);
    assert_eq!(result.errors, vec!["Excel file unreadable".to_owned()]);
    assert_eq!(result.help_text.as_deref(), Some(PROCESS_FAILED_HELP));
}

#[test]
fn failed_with_blank_message_uses_fallback() {
    let result = ProcessResult::failed("");
    assert_eq!(result.errors, vec!["Processing failed. Please try again.".to_owned()]);
}
