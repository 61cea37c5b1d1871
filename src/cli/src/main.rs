//! CLI for the Bugzilla Bug ID field.
//!
//! Validates Bug IDs exactly as the revision field does when changes are
//! submitted, which is handy for checking configuration and API keys against
//! a live Bugzilla.

use bugzilla_bug_id_field::{
    load_config_file, BugzillaBugIdField, ConfigError, HttpBugzillaClient,
    InMemoryAccountDirectory, MozLogError, MozLogLayer, MozLogger, PendingChange, Settings,
    ValidationError, BUGZILLA_PROVIDER,
};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Bugzilla Bug ID field - Validate Bug IDs against Bugzilla.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bug IDs to validate, in submission order.
    #[arg(required = true)]
    bug_ids: Vec<String>,

    /// Path to the config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bugzilla base URL (overrides config and BUGZILLA_URL).
    #[arg(long)]
    bugzilla_url: Option<String>,

    /// Bugzilla automation API key (overrides config and BUGZILLA_AUTOMATION_API_KEY).
    #[arg(long)]
    api_key: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// PHID of the submitting user.
    #[arg(long, default_value = "PHID-USER-cli")]
    user: String,

    /// Bugzilla account ID linked to the user; repeat for several links.
    #[arg(long = "account-id")]
    account_ids: Vec<String>,

    /// Also write MozLog lines to the configured log file.
    #[arg(long)]
    mozlog: bool,

    /// MozLog file path (implies --mozlog).
    #[arg(long)]
    mozlog_path: Option<PathBuf>,
}

/// Errors that stop the CLI before any validation happens.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// MozLog sink errors.
    #[error(transparent)]
    MozLog(#[from] MozLogError),
}

fn main() -> ExitCode {
    // Parse arguments
    let args = Args::parse();

    // Settings come first: the MozLog layer needs them
    let setup = load_settings(&args).and_then(|settings| {
        let mozlog = open_mozlog(&args, &settings)?;
        Ok((settings, mozlog))
    });

    let (settings, mozlog) = match setup {
        Ok(setup) => setup,
        Err(e) => {
            init_tracing(None);
            error!(error = %e, "Critical failure");
            return ExitCode::from(2);
        }
    };

    // Initialize tracing
    init_tracing(mozlog);

    // Run the main logic
    let errors = run(&args, settings);
    print_summary(&args, &errors);

    if errors.is_empty() {
        ExitCode::from(0)
    } else {
        ExitCode::from(1)
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
/// - MozLog JSON lines when a MozLog layer is given
fn init_tracing(mozlog: Option<MozLogLayer<File>>) {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(mozlog)
        .init();
}

/// Layers config file, environment and flags into validated settings.
fn load_settings(args: &Args) -> Result<Settings, CliError> {
    let mut file = load_config_file(args.config.as_deref())?;

    if let Some(url) = &args.bugzilla_url {
        file.bugzilla_url = Some(url.clone());
    }
    if let Some(key) = &args.api_key {
        file.automation_api_key = Some(key.clone());
    }
    if let Some(secs) = args.timeout_secs {
        file.timeout_secs = Some(secs);
    }
    if let Some(path) = &args.mozlog_path {
        file.mozlog.path = path.clone();
    }

    Ok(file.resolve()?)
}

/// Opens the MozLog file when requested.
fn open_mozlog(args: &Args, settings: &Settings) -> Result<Option<MozLogLayer<File>>, CliError> {
    if !args.mozlog && args.mozlog_path.is_none() {
        return Ok(None);
    }
    let logger = MozLogger::open(settings.mozlog.clone())?;
    Ok(Some(MozLogLayer::new(Arc::new(logger))))
}

/// Validates every Bug ID as one batch of pending changes.
fn run(args: &Args, settings: Settings) -> Vec<ValidationError> {
    let client = HttpBugzillaClient::new(settings.bugzilla.clone());
    let field = BugzillaBugIdField::new(settings.bugzilla, client);

    let mut directory = InMemoryAccountDirectory::new();
    for account_id in &args.account_ids {
        directory.link(args.user.as_str(), BUGZILLA_PROVIDER, account_id.as_str());
    }

    let changes: Vec<_> = args
        .bug_ids
        .iter()
        .map(|bug_id| PendingChange::new(args.user.as_str(), bug_id.as_str()))
        .collect();

    info!(count = changes.len(), user = %args.user, "Validating Bug IDs");
    let mut errors = Vec::new();
    field.validate_transactions(&changes, &directory, &mut errors);
    errors
}

/// Prints the final validation summary.
fn print_summary(args: &Args, errors: &[ValidationError]) {
    println!("\nSummary:");
    println!("  Bug IDs checked: {}", args.bug_ids.len());
    println!("  Errors: {}", errors.len());

    for error in errors {
        println!("  - [{}] {error}", error.kind.as_str());
    }

    println!(
        "  Result: {}",
        if errors.is_empty() {
            "Accepted"
        } else {
            "Rejected"
        }
    );
}
