//! repo-warden - reconcile GitHub team access against YAML policies

use clap::{Parser, Subcommand};
use repo_warden::{
    auth::Credentials,
    commands::{connect, run_sync, run_validate},
    config::{LogFormat, load_config},
    policy::PolicySource,
    report::Console,
    sync::SyncOptions,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Reconcile GitHub team repository access against declarative YAML policies
#[derive(Parser, Debug)]
#[command(name = "repo-warden")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "REPO_WARDEN_CONFIG", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error); overrides logging.level
    #[arg(long, env = "REPO_WARDEN_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Grant declared teams their permission and revoke undeclared teams
    Sync {
        /// Directory of per-repository policy files
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Print the changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Check that every declared repository exists and is visible
    Validate {
        /// Aggregate manifest file
        #[arg(long, conflicts_with = "dir")]
        manifest: Option<PathBuf>,

        /// Validate a directory of per-repository files instead
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Parse CLI arguments
    let args = Args::parse();

    // Credentials are checked before touching any file
    let credentials = Credentials::from_env()?;

    // Load configuration
    let config = load_config(args.config.as_deref())?;

    // Initialize logging
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    init_logging(level, config.logging.format);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        organization = %credentials.organization,
        "Starting repo-warden"
    );

    // Create GitHub client
    let client = connect(&config, &credentials)
        .inspect_err(|e| error!(error = %e, "Failed to create GitHub client"))?;

    let mut console = Console::stdio();

    let summary = match args.command {
        Command::Sync { dir, dry_run } => {
            let dir = dir.unwrap_or_else(|| config.policy.repositories_dir.clone());
            let source = PolicySource::Directory(dir);
            run_sync(&client, &source, SyncOptions { dry_run }, &mut console).await?
        }
        Command::Validate { manifest, dir } => {
            let source = match dir {
                Some(dir) => PolicySource::Directory(dir),
                None => PolicySource::Manifest(
                    manifest.unwrap_or_else(|| config.policy.manifest.clone()),
                ),
            };
            run_validate(&client, &source, &mut console).await?
        }
    };

    if !summary.is_success() {
        error!(failures = summary.failures.len(), "Run finished with failures");
    }

    Ok(summary.exit_code())
}
