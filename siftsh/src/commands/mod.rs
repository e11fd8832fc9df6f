// siftsh/src/commands/mod.rs
//! Command implementations for the siftsh CLI.

pub mod mask;
pub mod scan;
