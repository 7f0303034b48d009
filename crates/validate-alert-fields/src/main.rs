mod report;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rule_data_utils::{AlertFieldError, alert_field_descriptors_from_rows};
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Validate and normalize an alert fields spreadsheet export
#[derive(Parser, Debug)]
#[command(name = "validate-alert-fields")]
#[command(about = "Validate an alert fields spreadsheet export", long_about = None)]
struct Args {
    /// Path to the JSON export (an array of rows keyed by column title)
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// How to report shape errors
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable explanation on stderr
    Text,
    /// Machine-readable diagnostics on stdout
    Json,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "validate_alert_fields=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;

    let rows: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", args.input.display()))?;

    tracing::info!(input = %args.input.display(), "validating alert field export");

    match alert_field_descriptors_from_rows(&rows) {
        Ok(descriptors) => {
            println!("{}", report::descriptors_json(&descriptors)?);
            tracing::info!(count = descriptors.len(), "alert field export is valid");
            Ok(())
        }
        Err(AlertFieldError::InvalidFormat(error)) => {
            match args.format {
                OutputFormat::Text => eprint!("{}", report::shape_error_text(&error)),
                OutputFormat::Json => println!("{}", report::shape_error_json(&error)?),
            }
            process::exit(1);
        }
        Err(e) => Err(e).with_context(|| format!("Invalid row in {}", args.input.display())),
    }
}
