// siftsh/src/commands/scan.rs
//! Scan command implementation: read input, run the extraction pipeline,
//! render the report, and optionally persist a masked JSON report.

use anyhow::{Context, Result};
use chrono::Utc;
use is_terminal::IsTerminal;
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use siftsh_core::{ExtractionEngine, ExtractionResult};

use crate::cli::ScanCommand;
use crate::report::render_report;

/// Options for the scan operation, resolved from CLI arguments.
pub struct ScanOptions {
    pub input: String,
    pub source_id: String,
    pub show_raw: bool,
    pub json_out: Option<PathBuf>,
    pub quiet: bool,
}

impl ScanOptions {
    /// Resolves CLI arguments into scan options, reading the input file or
    /// stdin.
    pub fn from_command(cmd: ScanCommand, quiet: bool) -> Result<Self> {
        let (input, source_id) = match &cmd.input_file {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read input file: {}", path.display()))?;
                (text, path.display().to_string())
            }
            None => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read input from stdin")?;
                (text, "stdin".to_string())
            }
        };

        Ok(Self {
            input,
            source_id,
            show_raw: cmd.show_raw,
            json_out: cmd.json_out,
            quiet,
        })
    }
}

/// The JSON report wrapper the CLI owns. The embedded result is always the
/// masked copy, regardless of the on-screen `--show-raw` policy.
#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    source: &'a str,
    #[serde(flatten)]
    result: ExtractionResult,
}

/// Helper for printing info messages to stderr.
fn info_msg(msg: impl AsRef<str>, quiet: bool) {
    if !quiet {
        let _ = writeln!(io::stderr(), "{}", msg.as_ref());
    }
}

/// The main operation runner for the `scan` command.
pub fn run_scan(opts: ScanOptions) -> Result<()> {
    info!("Starting scan of '{}'.", opts.source_id);
    info_msg(
        format!(
            "Processing {} characters from {}...",
            opts.input.chars().count(),
            opts.source_id
        ),
        opts.quiet,
    );

    let engine = ExtractionEngine::new().context("Failed to initialize extraction engine")?;
    let result = engine.extract_all(&opts.input);
    debug!(
        "Scan complete. Safe: {}, warnings: {}.",
        result.security.is_safe,
        result.security.warnings.len()
    );

    let stdout = io::stdout();
    let use_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    writeln!(writer, "{}", render_report(&result, opts.show_raw, use_color))?;

    if let Some(path) = &opts.json_out {
        write_json_report(path, &result, &opts.source_id)?;
        info_msg(
            format!("Extraction report saved to '{}'.", path.display()),
            opts.quiet,
        );
    }

    info!("Scan operation completed.");
    Ok(())
}

fn write_json_report(path: &Path, result: &ExtractionResult, source_id: &str) -> Result<()> {
    let report = JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        source: source_id,
        result: result.masked(),
    };
    let json = serde_json::to_string_pretty(&report)
        .context("Failed to serialize extraction report")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    Ok(())
}
