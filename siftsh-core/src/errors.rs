//! errors.rs - Custom error types for the siftsh-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! Ordinary malformed input is never an error: unsafe input becomes a
//! first-class [`crate::screener::SecurityVerdict`], and candidates that
//! fail a validator are silently dropped. The variants here cover the
//! programmer-defect and environment classes only.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use crate::category::Category;

/// This enum represents all possible error types in the `siftsh-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SiftError {
    #[error("Failed to compile matcher for category '{0}': {1}")]
    MatcherCompilationError(Category, regex::Error),

    #[error("Category '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(Category, usize, usize),

    #[error("Failed to serialize extraction result: {0}")]
    SerializationError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
