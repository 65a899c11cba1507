//! Command-line adapter: argv in, stats and summary out.

pub mod args;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::{error, info};

use crate::ai::CapabilityLoader;
use crate::core::models::TextStats;
use crate::errors::BrieflyError;
use crate::summarizer::{TextSummarizer, compute_length_reduction, format_stats};

pub use args::{CliArgs, InputSource, USAGE, parse_cli_args, resolve_input};

/// What a successful CLI run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CliReport {
    pub summary: String,
    pub stats: TextStats,
    pub saved_to: Option<PathBuf>,
    /// Set when `--out` was given but the file could not be written.
    pub write_error: Option<String>,
}

/// Runs one CLI invocation, printing to `out`.
///
/// Argument, input, and summarization failures are returned. A failed `--out`
/// write is reported inline and does not fail the run.
pub async fn run<L, W>(
    raw_args: &[String],
    loader: &L,
    out: &mut W,
) -> Result<CliReport, BrieflyError>
where
    L: CapabilityLoader,
    W: Write,
{
    let args = parse_cli_args(raw_args)?;
    let input = resolve_input(&args.positionals)?;

    if let InputSource::File { path, .. } = &input {
        writeln!(out, "Reading text from file: {}", path.display())?;
    }

    let config = args.config();
    info!(
        model = %config.model_identifier,
        max_length = config.max_length,
        min_length = config.min_length,
        "Starting CLI summarization"
    );

    let summarizer = TextSummarizer::load(config, loader).await?;
    let summary = summarizer.summarize(input.text()).await?;
    let stats = compute_length_reduction(input.text(), &summary);

    writeln!(out, "=== STATS ===")?;
    writeln!(out, "{}", format_stats(&stats))?;

    let mut saved_to = None;
    let mut write_error = None;
    if let Some(path) = &args.output {
        match fs::write(path, &summary) {
            Ok(()) => {
                writeln!(out, "\nSummary saved to: {}", path.display())?;
                saved_to = Some(path.clone());
            }
            Err(e) => {
                error!(path = %path.display(), "Failed to write summary: {}", e);
                writeln!(out, "Error writing to file: {}", e)?;
                write_error = Some(e.to_string());
            }
        }
    }

    writeln!(out, "\n=== SUMMARY ===")?;
    writeln!(out, "{}", summary)?;

    Ok(CliReport {
        summary,
        stats,
        saved_to,
        write_error,
    })
}

/// Process exit status for a finished run.
#[must_use]
pub fn exit_status(result: &Result<CliReport, BrieflyError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
