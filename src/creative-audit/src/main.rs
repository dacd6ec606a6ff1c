//! Creative Audit: QA gate for generated ad creatives.
//!
//! Loads a creative template from JSON, runs the rule checks, prints a
//! report, and exits non-zero when the creative fails QA, so the binary can
//! sit in front of a publish pipeline.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use creative_core::{CreativeTemplate, QaConfig};
use creative_qa::{run_qa_checks, summary};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "creative-audit")]
#[command(about = "QA gate for generated ad creatives")]
#[command(version)]
struct Cli {
    /// Path to the creative template JSON file
    template: PathBuf,

    /// Optional QA config file (TOML); CREATIVE_AUDIT__* env vars override it
    #[arg(long, env = "CREATIVE_AUDIT_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Emit the full QA result as JSON instead of the human report
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Only set the exit code; print nothing
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "creative_audit=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => QaConfig::load(Some(path))
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => QaConfig::load(None).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config from environment, using defaults");
            QaConfig::default()
        }),
    };

    let raw = fs::read_to_string(&cli.template)
        .with_context(|| format!("reading template {}", cli.template.display()))?;
    let template: CreativeTemplate =
        serde_json::from_str(&raw).context("parsing template JSON")?;

    let result = run_qa_checks(&template, &config);
    info!(score = result.score, passed = result.passed, "audit complete");

    if !cli.quiet {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print!("{}", summary::render_report(&result));
        }
    }

    Ok(if result.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
