// siftsh/src/commands/mask.rs
//! Mask command implementation: direct access to the core masking entry
//! point for scripting collaborators.

use anyhow::Result;
use std::io::{self, Write};

use siftsh_core::mask;

use crate::cli::MaskCommand;

/// Masks a single value and prints the display-safe form to stdout.
pub fn run_mask(cmd: MaskCommand) -> Result<()> {
    let masked = mask(&cmd.value, cmd.category.into());
    writeln!(io::stdout(), "{}", masked)?;
    Ok(())
}
