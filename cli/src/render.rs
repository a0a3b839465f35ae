//! Plain-text rendering of session and processing results.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write;

use coldmail::api::types::{MissingAsset, ProcessResult};
use coldmail::session::{Session, SessionPhase};

pub fn describe_session(session: &Session) -> String {
    match session.phase() {
        SessionPhase::Authenticated(user) => format!("Signed in as {} (user {})", user.email, user.user_id),
        SessionPhase::Loading | SessionPhase::Unauthenticated => {
            "Not signed in. Run `coldmail login` to authenticate.".to_owned()
        }
    }
}

pub fn session_json(session: &Session) -> serde_json::Value {
    let user = session.user.as_ref();
    serde_json::json!({
        "authenticated": session.is_authenticated(),
        "email": user.map(|u| u.email.clone()),
        "userId": user.map(|u| u.user_id.clone()),
    })
}

fn push_assets(out: &mut String, heading: &str, item_suffix: &str, assets: &[MissingAsset]) {
    if assets.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{heading}:");
    for asset in assets {
        let count = asset.affected_emails.len();
        let plural = if count == 1 { "" } else { "s" };
        let _ = writeln!(out, "  - {}{item_suffix} ({count} email{plural} affected)", asset.role);
        let _ = writeln!(out, "    expected at: {}", asset.expected_path);
        let _ = writeln!(out, "    how to fix: {}", asset.suggestion);
        if !asset.affected_emails.is_empty() {
            let _ = writeln!(out, "    affected: {}", asset.affected_emails.join(", "));
        }
    }
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{heading}:");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

pub fn render_result(result: &ProcessResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.overall_message());
    let _ = writeln!(
        out,
        "Total processed: {}  Successful: {}  Errors: {}  Warnings: {}",
        result.total_processed,
        result.success_count,
        result.error_count,
        result.warnings.len()
    );
    if let Some(drafts) = result.draft_summary() {
        let _ = writeln!(out, "\n{drafts}");
    }
    push_assets(&mut out, "Missing email templates", ".txt", &result.missing_templates);
    push_assets(&mut out, "Missing resume files", " resume", &result.missing_resumes);
    if result.shows_generic_errors() {
        push_list(&mut out, "Errors", &result.errors);
    }
    push_list(&mut out, "Warnings", &result.warnings);
    if let Some(help) = &result.help_text {
        let _ = writeln!(out, "\nHow to fix: {help}");
    }
    if let Some(raw) = &result.raw {
        let _ = writeln!(out, "\n{raw}");
    }
    out
}
