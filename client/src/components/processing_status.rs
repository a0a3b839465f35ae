//! Result view for a processing run.
//!
//! Renders counts, the overall verdict, the drafts summary, missing
//! templates/resumes grouped by role, and the error/warning lists. Static
//! guidance text from the original screens is intentionally absent.

#[cfg(test)]
#[path = "processing_status_test.rs"]
mod processing_status_test;

use coldmail::api::types::{MissingAsset, OverallStatus, ProcessResult};
use coldmail::process::attachment_file_name;
use leptos::prelude::*;

/// Summary cards, in display order. The warnings card only appears when
/// there are warnings.
fn summary_cards(result: &ProcessResult) -> Vec<(&'static str, u64)> {
    let mut cards = vec![
        ("Total Processed", result.total_processed),
        ("Successful", result.success_count),
        ("Errors", result.error_count),
    ];
    if !result.warnings.is_empty() {
        cards.push(("Warnings", result.warnings.len() as u64));
    }
    cards
}

fn status_class(status: OverallStatus) -> &'static str {
    match status {
        OverallStatus::Success => "status-indicator success",
        OverallStatus::Warnings => "status-indicator warning",
        OverallStatus::Errors => "status-indicator error",
    }
}

fn affected_label(asset: &MissingAsset) -> String {
    let count = asset.affected_emails.len();
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} email{plural} affected")
}

fn missing_section(title: &'static str, item_suffix: &'static str, assets: Vec<MissingAsset>) -> impl IntoView {
    view! {
        <div class="status-section missing-section">
            <h3>{title}</h3>
            <ul class="missing-items-list">
                {assets
                    .into_iter()
                    .map(|asset| {
                        let affected = affected_label(&asset);
                        let name = format!("{}{item_suffix}", asset.role);
                        view! {
                            <li class="missing-item">
                                <span class="missing-name">{name}</span>
                                " "
                                <span class="affected-count">{affected}</span>
                                <div class="missing-path">"Expected location: " {asset.expected_path}</div>
                                <div class="missing-suggestion">"How to fix: " {asset.suggestion}</div>
                                <div class="email-list">{asset.affected_emails.join(", ")}</div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

fn message_list(title: &'static str, class: &'static str, messages: Vec<String>) -> impl IntoView {
    view! {
        <div class=format!("status-section {class}")>
            <h3>{title}</h3>
            <ul class="message-list">
                {messages.into_iter().map(|m| view! { <li class="message-item">{m}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn ProcessingStatus(result: ProcessResult) -> impl IntoView {
    let overall = result.overall();
    let verdict = result.overall_message();
    let cards = summary_cards(&result);
    let drafts = result.draft_summary();
    let generic_errors = result.shows_generic_errors().then(|| result.errors.clone());
    let example_name = attachment_file_name("John Smith", "FSE", "pdf");
    let ProcessResult { warnings, missing_templates, missing_resumes, help_text, raw, .. } = result;

    view! {
        <div class="processing-status">
            <h2>"Processing Results"</h2>
            <div class="status-summary">
                {cards
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="summary-card">
                                <div class="summary-number">{value}</div>
                                <div class="summary-label">{label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class=status_class(overall)>{verdict}</div>
            {drafts
                .map(|text| {
                    view! {
                        <div class="status-section success-section">
                            <p>{text}</p>
                            <p class="attachment-info">
                                "Resume attachments are renamed to Full_Name_Role.extension, e.g. "
                                <code>{example_name}</code>
                            </p>
                        </div>
                    }
                })}
            {(!missing_templates.is_empty())
                .then(|| missing_section("Missing Email Templates", ".txt", missing_templates))}
            {(!missing_resumes.is_empty()).then(|| missing_section("Missing Resume Files", " Resume", missing_resumes))}
            {generic_errors.map(|errors| message_list("Errors", "errors-section", errors))}
            {(!warnings.is_empty()).then(|| message_list("Warnings", "warnings-section", warnings))}
            {help_text
                .map(|text| {
                    view! {
                        <div class="status-section help-section">
                            <h3>"How to Fix"</h3>
                            <p>{text}</p>
                        </div>
                    }
                })}
            {raw.map(|text| view! { <pre class="status-section raw-response">{text}</pre> })}
        </div>
    }
}
