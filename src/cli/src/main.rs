//! CLI for the issue seeder.
//!
//! Reads a spreadsheet of tasks and creates one GitHub issue per row, skipping
//! rows whose issue already exists.

use clap::Parser;
use issue_seeder::{
    Credentials, RunSummary, Runner, RunnerConfig, RunnerError, SeedSettings, DEFAULT_API_URL,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue Seeder - Create GitHub issues from a spreadsheet, once per row.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task spreadsheet.
    #[arg(long, default_value = issue_seeder::runner::DEFAULT_SPREADSHEET_PATH)]
    file: PathBuf,

    /// Look up and ensure labels, but do not create issues.
    #[arg(long)]
    dry_run: bool,

    /// Where to write the CSV report.
    #[arg(long, default_value = issue_seeder::runner::DEFAULT_REPORT_PATH)]
    report: PathBuf,

    /// Optional settings file (labels, colors, pacing).
    #[arg(long)]
    config: Option<PathBuf>,

    /// GitHub token. Falls back to GH_TOKEN.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Target repository as owner/name.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// GitHub API root.
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // octocrab and rustls can each pull in a crypto backend; pick one.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr in compact form; `RUST_LOG` overrides the default
/// `info` level.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let credentials = Credentials::resolve(args.token, args.repository)?;
    let settings = SeedSettings::load(args.config.as_deref())?;

    let config = RunnerConfig::new(credentials, args.dry_run)
        .with_spreadsheet_path(args.file)
        .with_report_path(args.report)
        .with_api_url(args.api_url)
        .with_settings(settings);

    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Rows: {}", summary.rows);
    println!("  Created: {}", summary.created);
    println!("  Already existing: {}", summary.existing);
    if summary.dry_run {
        println!("  Would create: {}", summary.dry_run_rows);
    }
    println!("  Skipped: {}", summary.skipped);
    println!("  Failed: {}", summary.failed);
    println!("  Report: {}", summary.report_path.display());
}
