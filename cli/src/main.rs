//! CLI for the Issue Seeder.
//!
//! This tool reads markdown issue-definition files and creates the
//! corresponding issues and milestones in a GitHub repository.

use clap::Parser;
use issue_seeder::{Runner, RunnerConfig, RunnerError, SeedSummary};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue Seeder - Create GitHub issues and milestones from markdown definition files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing ISSUES_PHASE*.md definition files.
    #[arg(long, default_value = ".github/")]
    definitions_path: PathBuf,

    /// Path to the seed config file.
    #[arg(long, default_value = "seed.toml")]
    config: PathBuf,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: String,

    /// Preview changes without creating issues/milestones.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            // Per-issue and per-milestone failures are reported above but
            // don't fail the process; only environment errors do.
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<SeedSummary, RunnerError> {
    let config = RunnerConfig::new(args.definitions_path, args.config, args.token, args.dry_run);
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &SeedSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Definition files parsed: {}", summary.files_parsed);
    println!("  Issue records parsed: {}", summary.records_parsed);
    println!("  Already existing, skipped: {}", summary.existing_skipped);

    if !summary.dry_run {
        println!("  Milestones created: {}", summary.milestones_created);
        println!("  Milestones existing: {}", summary.milestones_existing);
        println!("  Milestones failed: {}", summary.milestones_failed);
        println!("  Issues created: {}", summary.issues_created);
        println!("  Issues skipped: {}", summary.issues_skipped);
        println!("  Issues failed: {}", summary.issues_failed);
    }
}
