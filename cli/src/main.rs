//! `coldmail`: command-line front-end for the cold email automation backend.
//!
//! Drives the same session resolver as the browser client, with the
//! `--session` argument standing in for the OAuth redirect's `?session=`
//! parameter and a file standing in for `localStorage`.

mod render;
mod terminal;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use coldmail::api::ApiError;
use coldmail::api::http::HttpBackend;
use coldmail::api::types::ProcessResult;
use coldmail::config::{ApiConfig, ConfigError};
use coldmail::process::{FormError, LocalFile, ProcessForm, ProcessOutcome, ProcessingMethod, validation_message};
use coldmail::session::{LocalSession, SessionResolver};
use coldmail::storage::{FileStore, SESSION_ID_KEY};

use crate::terminal::TerminalBrowser;

type CliResolver = SessionResolver<HttpBackend, FileStore, LocalSession, TerminalBrowser>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("{0}")]
    InvalidForm(String),
    #[error("cannot open {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("no config directory found; pass --session-file or set COLDMAIL_SESSION_FILE")]
    NoConfigDir,
    #[error("not signed in; run `coldmail login` first")]
    NotSignedIn,
    #[error("{0}")]
    Auth(String),
    #[error("session expired; run `coldmail login` again")]
    SessionExpired,
    #[error("processing failed")]
    ProcessingFailed,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "coldmail", about = "Cold email automation CLI")]
struct Cli {
    /// Backend base URL. Falls back to `COLDMAIL_API_BASE_URL`, then
    /// `http://localhost:8080`.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Where the session id is persisted between runs.
    #[arg(long, global = true, env = "COLDMAIL_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[arg(long, global = true, env = "COLDMAIL_TIMEOUT_SECS", default_value_t = 120)]
    timeout_secs: u64,

    /// Session id from the OAuth redirect address (`?session=...`).
    #[arg(long, global = true)]
    session: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe the backend's health endpoint.
    Health,
    /// Resolve the session and show who is signed in.
    Status,
    /// Start the Google sign-in flow.
    Login,
    /// Sign out and forget the stored session.
    Logout,
    /// Generate Gmail drafts from a contact list.
    Process(ProcessArgs),
}

#[derive(Args, Debug)]
struct ProcessArgs {
    /// Excel (.xlsx) contact list.
    #[arg(long)]
    contacts: PathBuf,

    #[arg(long)]
    full_name: String,

    #[arg(long)]
    phone: String,

    #[arg(long, default_value = "")]
    linkedin: String,

    /// Folder on the backend host holding templates and resumes.
    #[arg(long, conflicts_with_all = ["templates", "resumes"])]
    templates_folder: Option<String>,

    /// Template file to upload; repeat for several roles.
    #[arg(long = "template")]
    templates: Vec<PathBuf>,

    /// Resume file to upload; repeat for several roles.
    #[arg(long = "resume")]
    resumes: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
struct CliContext {
    config: ApiConfig,
    timeout: Duration,
    session_file: Option<PathBuf>,
    session: Option<String>,
    json: bool,
}

impl CliContext {
    fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let config = match cli.base_url.as_deref() {
            Some(url) => ApiConfig::new(url)?,
            None => ApiConfig::from_env()?,
        };
        Ok(Self {
            config,
            timeout: Duration::from_secs(cli.timeout_secs),
            session_file: cli.session_file.clone(),
            session: cli.session.clone(),
            json: cli.json,
        })
    }

    fn backend(&self) -> Result<HttpBackend, CliError> {
        Ok(HttpBackend::new(self.config.clone(), self.timeout)?)
    }

    fn resolver(&self) -> Result<CliResolver, CliError> {
        let path = session_file_path(self.session_file.clone())?;
        tracing::debug!(path = %path.display(), "using session file");
        Ok(SessionResolver::new(
            self.backend()?,
            FileStore::new(path),
            LocalSession::default(),
            TerminalBrowser::new(self.session.clone()),
        ))
    }
}

fn session_file_path(explicit: Option<PathBuf>) -> Result<PathBuf, CliError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    dirs::config_dir()
        .map(|dir| dir.join("coldmail").join(SESSION_ID_KEY))
        .ok_or(CliError::NoConfigDir)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = CliContext::from_cli(&cli)?;

    match cli.command {
        Command::Health => run_health(&ctx).await,
        Command::Status => run_status(&ctx).await,
        Command::Login => run_login(&ctx).await,
        Command::Logout => run_logout(&ctx).await,
        Command::Process(args) => run_process(&ctx, &args).await,
    }
}

async fn run_health(ctx: &CliContext) -> Result<(), CliError> {
    let body = ctx.backend()?.health().await?;
    println!("{}", body.trim());
    Ok(())
}

async fn run_status(ctx: &CliContext) -> Result<(), CliError> {
    let resolver = ctx.resolver()?;
    let carrier = resolver.bootstrap().await;
    tracing::info!(?carrier, "session resolved");

    let session = resolver.session();
    if ctx.json {
        return print_json(&render::session_json(&session));
    }
    println!("{}", render::describe_session(&session));
    Ok(())
}

async fn run_login(ctx: &CliContext) -> Result<(), CliError> {
    let resolver = ctx.resolver()?;
    resolver.login().await;
    if let Some(message) = resolver.session().error {
        return Err(CliError::Auth(message));
    }
    println!("After approving access, copy the `session` value from the address you land on and run:");
    println!("  coldmail status --session <value>");
    Ok(())
}

async fn run_logout(ctx: &CliContext) -> Result<(), CliError> {
    let resolver = ctx.resolver()?;
    resolver.logout().await;
    if let Some(message) = resolver.session().error {
        return Err(CliError::Auth(message));
    }
    println!("Signed out.");
    Ok(())
}

async fn run_process(ctx: &CliContext, args: &ProcessArgs) -> Result<(), CliError> {
    let form = build_form(args)?;

    let resolver = ctx.resolver()?;
    resolver.bootstrap().await;
    if !resolver.session().is_authenticated() {
        return Err(CliError::NotSignedIn);
    }

    eprintln!("{}", form.summary());
    eprintln!("Processing... This may take a few minutes depending on the number of contacts.");
    let session_id = resolver.current_session_id();
    let response = resolver.backend().process(session_id.as_deref(), &form).await;

    match ProcessOutcome::from_response(response) {
        ProcessOutcome::SessionExpired => {
            resolver.expire_session().await;
            Err(CliError::SessionExpired)
        }
        ProcessOutcome::Completed(result) => print_result(ctx, &result),
        ProcessOutcome::Failed(result) => {
            print_result(ctx, &result)?;
            Err(CliError::ProcessingFailed)
        }
    }
}

fn open_file(path: &Path) -> Result<LocalFile, CliError> {
    LocalFile::open(path).map_err(|source| CliError::Io { path: path.to_path_buf(), source })
}

fn build_form(args: &ProcessArgs) -> Result<ProcessForm<LocalFile>, CliError> {
    let mut form = ProcessForm::default();
    form.full_name.clone_from(&args.full_name);
    form.phone_number.clone_from(&args.phone);
    form.linkedin_url.clone_from(&args.linkedin);
    form.set_contact_file(open_file(&args.contacts)?)?;

    if let Some(folder) = &args.templates_folder {
        form.method = ProcessingMethod::Folder;
        form.templates_folder_path.clone_from(folder);
    } else {
        form.method = ProcessingMethod::Upload;
        form.template_files = args.templates.iter().map(|p| open_file(p)).collect::<Result<_, _>>()?;
        form.resume_files = args.resumes.iter().map(|p| open_file(p)).collect::<Result<_, _>>()?;
    }

    let errors = form.validate();
    if !errors.is_empty() {
        return Err(CliError::InvalidForm(validation_message(&errors)));
    }
    if !form.phone_number_looks_valid() {
        tracing::warn!(phone = %form.phone_number, "phone number does not look valid");
    }
    Ok(form)
}

fn print_result(ctx: &CliContext, result: &ProcessResult) -> Result<(), CliError> {
    if ctx.json {
        return print_json(&serde_json::to_value(result)?);
    }
    print!("{}", render::render_result(result));
    Ok(())
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
