// siftsh/src/lib.rs
//! # Siftsh CLI Application
//!
//! This crate provides the command-line interface for the siftsh
//! screening-and-extraction pipeline: reading input from a file or stdin,
//! rendering the human-readable report, and persisting the masked JSON
//! report. All screening, extraction, and masking logic lives in
//! `siftsh-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod report;
