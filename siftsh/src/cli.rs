// siftsh/src/cli.rs
//! This file defines the command-line interface (CLI) for the siftsh
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use siftsh_core::Category;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "siftsh",
    version = env!("CARGO_PKG_VERSION"),
    about = "Screen text for injection signatures and extract structured data",
    long_about = "Siftsh is a command-line utility that screens free-text input for content \
patterns associated with injection attacks and, only when the input is judged safe, extracts \
structured items of several recognized categories (email addresses, URLs, phone numbers, \
payment-card numbers, hashtags, HTML tags, currency symbols). Sensitive values are masked \
before they are displayed or stored.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `siftsh` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Screens an input file or stdin and extracts recognized data categories.
    #[command(about = "Screens an input file or stdin and extracts recognized data categories.")]
    Scan(ScanCommand),

    /// Masks a single sensitive value for display or storage.
    #[command(about = "Masks a single sensitive value for display or storage.")]
    Mask(MaskCommand),
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write a JSON report to this file. The persisted report is always masked.
    #[arg(long = "json", value_name = "FILE", help = "Write a masked JSON report to a specified file.")]
    pub json_out: Option<PathBuf>,

    /// Display raw sensitive values instead of masked ones.
    #[arg(long = "show-raw", help = "Display raw sensitive values instead of masked ones.")]
    pub show_raw: bool,
}

/// Arguments for the `mask` command.
#[derive(Parser, Debug)]
pub struct MaskCommand {
    /// The sensitive category of the value.
    #[arg(long, short = 'c', value_enum, value_name = "CATEGORY", help = "The sensitive category of the value.")]
    pub category: MaskCategory,

    /// The raw value to mask.
    #[arg(value_name = "VALUE", help = "The raw value to mask.")]
    pub value: String,
}

/// The categories accepted by the `mask` command, named with the same
/// canonical snake_case scheme the core uses everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MaskCategory {
    #[value(name = "email")]
    Email,
    #[value(name = "credit_card")]
    CreditCard,
}

impl From<MaskCategory> for Category {
    fn from(value: MaskCategory) -> Self {
        match value {
            MaskCategory::Email => Category::Email,
            MaskCategory::CreditCard => Category::CreditCard,
        }
    }
}
