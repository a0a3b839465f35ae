use super::*;
use coldmail::config::API_BASE_URL_ENV;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("coldmail").chain(args.iter().copied()))
}

fn upload_args(dir: &Path) -> ProcessArgs {
    let contacts = dir.join("contacts.xlsx");
    let template = dir.join("FSE.txt");
    let resume = dir.join("resume_FSE.pdf");
    std::fs::write(&contacts, b"PK").unwrap();
    std::fs::write(&template, b"Hello {NAME}").unwrap();
    std::fs::write(&resume, b"%PDF").unwrap();
    ProcessArgs {
        contacts,
        full_name: "John Smith".to_owned(),
        phone: "+1 650 789 4084".to_owned(),
        linkedin: String::new(),
        templates_folder: None,
        templates: vec![template],
        resumes: vec![resume],
    }
}

#[test]
fn status_uses_defaults() {
    let cli = parse(&["status"]).unwrap();
    assert!(matches!(cli.command, Command::Status));
    assert_eq!(cli.timeout_secs, 120);
    assert!(!cli.json);
    assert!(cli.session.is_none());
    assert!(cli.base_url.is_none());
}

#[test]
fn global_flags_after_subcommand() {
    let cli = parse(&["status", "--session", "abc123", "--base-url", "https://api.example.com", "--json"]).unwrap();
    assert_eq!(cli.session.as_deref(), Some("abc123"));
    assert_eq!(cli.base_url.as_deref(), Some("https://api.example.com"));
    assert!(cli.json);
}

#[test]
fn process_accepts_repeated_files() {
    let cli = parse(&[
        "process", "--contacts", "c.xlsx", "--full-name", "John Smith", "--phone", "5551234567",
        "--template", "FSE.txt", "--template", "SRE.txt", "--resume", "resume.pdf",
    ])
    .unwrap();
    let Command::Process(args) = cli.command else {
        panic!("expected process command");
    };
    assert_eq!(args.templates.len(), 2);
    assert_eq!(args.resumes, vec![PathBuf::from("resume.pdf")]);
    assert!(args.templates_folder.is_none());
}

#[test]
fn folder_conflicts_with_uploads() {
    let err = parse(&[
        "process", "--contacts", "c.xlsx", "--full-name", "J", "--phone", "5551234567",
        "--templates-folder", "/srv/templates", "--template", "FSE.txt",
    ])
    .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn process_requires_contacts() {
    let err = parse(&["process", "--full-name", "J", "--phone", "5551234567"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn invalid_base_url_is_config_error() {
    let cli = parse(&["status", "--base-url", "ftp://example.com"]).unwrap();
    assert!(matches!(CliContext::from_cli(&cli), Err(CliError::Config(_))));
}

#[test]
fn base_url_comes_from_environment_unless_flagged() {
    unsafe { std::env::set_var(API_BASE_URL_ENV, "https://env.example.test/") };
    let from_env = CliContext::from_cli(&parse(&["status"]).unwrap()).unwrap();
    let flagged = CliContext::from_cli(&parse(&["status", "--base-url", "https://flag.example.test"]).unwrap()).unwrap();
    unsafe { std::env::remove_var(API_BASE_URL_ENV) };

    assert_eq!(from_env.config.base_url(), "https://env.example.test");
    assert_eq!(flagged.config.base_url(), "https://flag.example.test");
}

#[test]
fn explicit_session_file_wins() {
    let path = session_file_path(Some(PathBuf::from("/tmp/sid"))).unwrap();
    assert_eq!(path, PathBuf::from("/tmp/sid"));
}

#[test]
fn build_upload_form() {
    let dir = tempfile::tempdir().unwrap();
    let form = build_form(&upload_args(dir.path())).unwrap();
    assert_eq!(form.method, ProcessingMethod::Upload);
    assert_eq!(form.template_files.len(), 1);
    assert_eq!(form.resume_files.len(), 1);
    assert_eq!(form.summary(), "Method: File Upload | Files: 1 templates, 1 resumes");
}

#[test]
fn build_folder_form_ignores_upload_lists() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = upload_args(dir.path());
    args.templates_folder = Some("/srv/templates".to_owned());
    let form = build_form(&args).unwrap();
    assert_eq!(form.method, ProcessingMethod::Folder);
    assert!(form.template_files.is_empty());
    assert_eq!(form.templates_folder_path, "/srv/templates");
}

#[test]
fn build_form_rejects_csv_contacts() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = upload_args(dir.path());
    let csv = dir.path().join("contacts.csv");
    std::fs::write(&csv, b"a,b").unwrap();
    args.contacts = csv;
    assert!(matches!(build_form(&args), Err(CliError::Form(FormError::InvalidContactFile))));
}

#[test]
fn build_form_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = upload_args(dir.path());
    args.resumes = vec![dir.path().join("nope.pdf")];
    let Err(CliError::Io { path, .. }) = build_form(&args) else {
        panic!("expected io error");
    };
    assert!(path.ends_with("nope.pdf"));
}

#[test]
fn build_form_lists_validation_errors() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = upload_args(dir.path());
    args.full_name = "  ".to_owned();
    args.resumes.clear();
    let Err(CliError::InvalidForm(message)) = build_form(&args) else {
        panic!("expected validation failure");
    };
    assert_eq!(
        message,
        "Please fix the following errors:\nFull Name is required\nAt least one resume file is required for upload method"
    );
}
