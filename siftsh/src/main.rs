// siftsh/src/main.rs
//! Siftsh entry point.
//!
//! Parses arguments, initializes logging, and dispatches to the command
//! implementations.

use anyhow::Result;
use clap::Parser;

use siftsh::cli::{Cli, Commands};
use siftsh::commands::{mask, scan};
use siftsh::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else {
        logger::init_logger(None);
    }

    match args.command {
        Commands::Scan(cmd) => {
            let opts = scan::ScanOptions::from_command(cmd, args.quiet)?;
            scan::run_scan(opts)
        }
        Commands::Mask(cmd) => mask::run_mask(cmd),
    }
}
