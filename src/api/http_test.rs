use super::*;

fn form_with_contacts(dir: &std::path::Path) -> ProcessForm<LocalFile> {
    let contacts = dir.join("contacts.xlsx");
    std::fs::write(&contacts, b"PK\x03\x04").unwrap();
    let mut form = ProcessForm::default();
    form.full_name = "John Smith".to_owned();
    form.phone_number = "+15551234567".to_owned();
    form.set_contact_file(LocalFile::open(&contacts).unwrap()).unwrap();
    form
}

#[test]
fn builds_client_for_config() {
    let config = ApiConfig::new("http://localhost:8080/").unwrap();
    let backend = HttpBackend::new(config, Duration::from_secs(5)).unwrap();
    assert_eq!(backend.config().base_url(), "http://localhost:8080");
}

#[test]
fn multipart_form_reads_attachments() {
    let dir = tempfile::tempdir().unwrap();
    let form = form_with_contacts(dir.path());
    let body = multipart_form(&form).unwrap();
    assert!(body.boundary().len() > 8);
}

#[test]
fn multipart_form_reports_vanished_attachment() {
    let dir = tempfile::tempdir().unwrap();
    let form = form_with_contacts(dir.path());
    std::fs::remove_file(dir.path().join("contacts.xlsx")).unwrap();

    let err = multipart_form(&form).unwrap_err();
    let ApiError::Attachment { path, .. } = err else {
        panic!("expected attachment error, got {err:?}");
    };
    assert!(path.ends_with("contacts.xlsx"));
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    // Port 9 (discard) on loopback is closed in test environments.
    let config = ApiConfig::new("http://127.0.0.1:9").unwrap();
    let backend = HttpBackend::new(config, Duration::from_secs(2)).unwrap();
    let err = backend.auth_status(None).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}
