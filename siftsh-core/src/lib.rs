// siftsh-core/src/lib.rs
//! # siftsh Core Library
//!
//! `siftsh-core` provides the fundamental, platform-independent logic for
//! security-screened text extraction. It scans arbitrary free-text input
//! for content patterns associated with injection attacks and — only if
//! the input is judged safe — extracts structured items of several
//! recognized categories (email addresses, URLs, phone numbers,
//! payment-card numbers, hashtags, HTML tags, currency symbols), masking
//! sensitive values before they are surfaced.
//!
//! The library is designed to be pure and stateless: one call in, one
//! structured result out, with no I/O, no shared mutable state, and no
//! cross-call state. Concurrent callers may invoke the pipeline in
//! parallel with no synchronization.
//!
//! ## Modules
//!
//! * `category`: The canonical [`Category`] vocabulary used end to end.
//! * `screener`: Dangerous-content signatures and size/repetition limits.
//! * `matchers`: The immutable, compile-once category matcher registry.
//! * `validators`: Programmatic validation (email structure, Luhn checksum).
//! * `redaction`: On-demand masking of sensitive values.
//! * `engine`: The pipeline orchestrator composing screen -> extract -> mask.
//! * `errors`: The structured [`SiftError`] type.
//!
//! ## Public API
//!
//! The core exposes exactly two entry points to its collaborators:
//!
//! * [`extract_all`]: the primary pipeline entry point.
//! * [`mask`]: invoked whenever a raw sensitive value must be shown or stored.
//!
//! ## Usage Example
//!
//! ```rust
//! use siftsh_core::{extract_all, mask, Category};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let input = "Email john@example.com, site https://example.com, tag #sale, price $20";
//!     let result = extract_all(input)?;
//!
//!     assert!(result.security.is_safe);
//!     for email in &result.categories[&Category::Email] {
//!         println!("{}", mask(email, Category::Email));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Unsafe input is not an error: it is a first-class verdict
//! (`is_safe = false` with warnings) that halts extraction. Candidates
//! failing a validator are dropped silently. [`SiftError`] covers only
//! programmer-defect and environment conditions (matcher compilation,
//! serialization, I/O).
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod category;
pub mod engine;
pub mod errors;
pub mod matchers;
pub mod redaction;
pub mod screener;
pub mod validators;

/// Re-exports the canonical category vocabulary.
pub use category::Category;

/// Re-exports the custom error type for clear error reporting.
pub use errors::SiftError;

/// Re-exports the pipeline types and the primary one-shot entry point.
pub use engine::{extract_all, ExtractionEngine, ExtractionResult, Gate, HALT_MESSAGE};

/// Re-exports the screening types and limits.
pub use screener::{screen, SecurityVerdict, Signature, MAX_CHAR_RUN, MAX_INPUT_CHARS, SIGNATURES};

/// Re-exports the masking entry point.
pub use redaction::mask;

/// Re-exports the matcher registry types for advanced usage.
pub use matchers::{compile_matchers, CompiledMatcher, CompiledMatchers, MatcherDef, MATCHER_DEFS};
