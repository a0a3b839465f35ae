use super::*;

#[test]
fn excel_detected_by_mime_or_name() {
    assert!(is_excel_file("contacts.bin", XLSX_MIME));
    assert!(is_excel_file("contacts.xlsx", ""));
    assert!(!is_excel_file("contacts.csv", "text/csv"));
    // Legacy `.xls` is accepted by the picker but rejected on selection.
    assert!(!is_excel_file("contacts.xls", "application/vnd.ms-excel"));
}

#[test]
fn mime_guess_by_extension() {
    assert_eq!(mime_for_file_name("Contacts.XLSX"), XLSX_MIME);
    assert_eq!(mime_for_file_name("resume_FSE.pdf"), "application/pdf");
    assert_eq!(
        mime_for_file_name("resume.docx"),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    assert_eq!(mime_for_file_name("FSE_template.txt"), "text/plain");
    assert_eq!(mime_for_file_name("README"), "application/octet-stream");
}

#[test]
fn file_size_formatting() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(500), "500 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(1_000_000), "976.56 KB");
    assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
}

#[test]
fn phone_numbers_accepted() {
    assert!(is_valid_phone_number("+1 (555) 123-4567"));
    assert!(is_valid_phone_number("5551234567"));
    assert!(is_valid_phone_number("+44 20 7946 0958"));
}

#[test]
fn phone_numbers_rejected() {
    assert!(!is_valid_phone_number(""));
    assert!(!is_valid_phone_number("0551234567"));
    assert!(!is_valid_phone_number("555-123"));
    assert!(!is_valid_phone_number("555.123.4567"));
    assert!(!is_valid_phone_number("++15551234567"));
    assert!(!is_valid_phone_number("1234567890123456789"));
}

#[test]
fn phone_number_length_bounds() {
    // Leading digit plus 7..=15 trailing characters.
    assert!(is_valid_phone_number("12345678"));
    assert!(!is_valid_phone_number("1234567"));
    assert!(is_valid_phone_number("1234567890123456"));
    assert!(!is_valid_phone_number("12345678901234567"));
}

#[test]
fn attachment_names_follow_full_name_role_rule() {
    assert_eq!(attachment_file_name("John Smith", "FSE", "pdf"), "John_Smith_FSE.pdf");
    assert_eq!(
        attachment_file_name("  Ada   King ", "Data Engineer", ".docx"),
        "Ada_King_Data_Engineer.docx"
    );
}

#[cfg(feature = "native")]
#[test]
fn local_file_reports_name_size_and_mime() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.xlsx");
    std::fs::write(&path, b"PK\x03\x04fake").unwrap();

    let file = LocalFile::open(&path).unwrap();
    assert_eq!(file.file_name(), "contacts.xlsx");
    assert_eq!(file.mime_type(), XLSX_MIME);
    assert_eq!(file.size(), 8);
    assert_eq!(file.path(), path.as_path());
}

#[cfg(feature = "native")]
#[test]
fn local_file_rejects_directories_and_missing_paths() {
    let dir = tempfile::tempdir().unwrap();
    assert!(LocalFile::open(dir.path()).is_err());
    assert!(LocalFile::open(dir.path().join("missing.xlsx")).is_err());
}
