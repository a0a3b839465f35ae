use coldmail::process::ProcessForm;

use super::*;

#[test]
fn label_shows_human_size() {
    let file = BrowserFile::described("contacts.xlsx", "", 1536);
    assert_eq!(file.label(), "contacts.xlsx (1.5 KB)");
}

#[test]
fn upload_reports_metadata() {
    let file = BrowserFile::described("resume_FSE.pdf", "application/pdf", 2048);
    assert_eq!(file.file_name(), "resume_FSE.pdf");
    assert_eq!(file.mime_type(), "application/pdf");
    assert_eq!(file.size(), 2048);
}

#[test]
fn contact_selection_accepts_xlsx_by_name() {
    let mut form = ProcessForm::default();
    assert!(form.set_contact_file(BrowserFile::described("contacts.xlsx", "", 10)).is_ok());
    assert!(form.set_contact_file(BrowserFile::described("contacts.csv", "text/csv", 10)).is_err());
    assert_eq!(form.contact_file().map(Upload::file_name).as_deref(), Some("contacts.xlsx"));
}
