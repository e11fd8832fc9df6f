// siftsh-core/src/engine.rs
//! The pipeline orchestrator: screen, then extract, then hand back one
//! immutable result.
//!
//! The screen-to-extract transition is modeled as an explicit [`Gate`]
//! rather than ad-hoc early returns, so the halt contract is testable in
//! isolation: an unsafe verdict halts the whole pipeline and no extractor
//! runs; a safe verdict runs every category matcher independently over the
//! same text. There is no partial-failure mode.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use strip_ansi_escapes::strip;

use crate::category::Category;
use crate::errors::SiftError;
use crate::matchers::{shared_matchers, CompiledMatcher, CompiledMatchers};
use crate::redaction::mask;
use crate::screener::{self, SecurityVerdict};
use crate::validators;

/// Message attached to a result whose extraction was halted by the screener.
pub const HALT_MESSAGE: &str =
    "Input contains potentially dangerous content. Extraction aborted.";

/// The two-state control flow between screening and extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// The screener found at least one violation; extraction must not run.
    Halted(SecurityVerdict),
    /// The input is safe; extraction may proceed.
    Proceed(SecurityVerdict),
}

impl Gate {
    /// Classifies a verdict into the pipeline control state.
    pub fn from_verdict(verdict: SecurityVerdict) -> Self {
        if verdict.is_safe {
            Gate::Proceed(verdict)
        } else {
            Gate::Halted(verdict)
        }
    }
}

/// The result of one pipeline invocation. Produced exactly once per call;
/// `categories` is populated if and only if the verdict is safe.
///
/// Serialized with the external report keys: `security_status`,
/// `extracted_data`, and (on halt) `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(rename = "security_status")]
    pub security: SecurityVerdict,
    #[serde(rename = "extracted_data")]
    pub categories: BTreeMap<Category, Vec<String>>,
    #[serde(rename = "message", skip_serializing_if = "Option::is_none", default)]
    pub halt_message: Option<String>,
}

impl ExtractionResult {
    /// Returns a copy with every sensitive-category match masked, suitable
    /// for display or persistence.
    pub fn masked(&self) -> ExtractionResult {
        let categories = self
            .categories
            .iter()
            .map(|(category, matches)| {
                let values = matches.iter().map(|m| mask(m, *category)).collect();
                (*category, values)
            })
            .collect();
        ExtractionResult {
            security: self.security.clone(),
            categories,
            halt_message: self.halt_message.clone(),
        }
    }

    /// Serializes the result as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SiftError> {
        serde_json::to_string_pretty(self).map_err(|e| SiftError::SerializationError(e.to_string()))
    }
}

/// The extraction engine: the shared compiled matcher set plus the
/// screening gate, behind the single `extract_all` entry point.
///
/// Engines are cheap to construct (the matcher set is compiled once per
/// process) and safe to share across threads.
#[derive(Debug)]
pub struct ExtractionEngine {
    matchers: Arc<CompiledMatchers>,
}

impl ExtractionEngine {
    /// Creates an engine over the shared compiled matcher set.
    pub fn new() -> Result<Self, SiftError> {
        Ok(Self {
            matchers: shared_matchers()?,
        })
    }

    /// Screens raw text without extracting anything.
    pub fn screen(&self, text: &str) -> SecurityVerdict {
        screener::screen(text)
    }

    /// The primary pipeline entry point: screen, then — only if safe —
    /// run every category matcher over the same text.
    ///
    /// Matches preserve first-appearance order and are not deduplicated.
    /// `email` and `credit_card` candidates must additionally pass their
    /// programmatic validators; failing candidates are dropped, not
    /// reported. Values in the result are raw; callers route sensitive
    /// categories through [`mask`] (or [`ExtractionResult::masked`])
    /// before surfacing them.
    pub fn extract_all(&self, text: &str) -> ExtractionResult {
        // Terminal-captured input may carry ANSI escapes; match on the
        // stripped text so color codes cannot split a token.
        let stripped_bytes = strip(text.as_bytes());
        let content = String::from_utf8_lossy(&stripped_bytes);

        match Gate::from_verdict(screener::screen(&content)) {
            Gate::Halted(security) => {
                info!(
                    "Screening halted extraction with {} warning(s).",
                    security.warnings.len()
                );
                ExtractionResult {
                    security,
                    categories: BTreeMap::new(),
                    halt_message: Some(HALT_MESSAGE.to_string()),
                }
            }
            Gate::Proceed(security) => {
                let mut categories: BTreeMap<Category, Vec<String>> = Category::ALL
                    .iter()
                    .map(|category| (*category, Vec::new()))
                    .collect();

                for matcher in &self.matchers.matchers {
                    let hits: Vec<String> = matcher
                        .regex
                        .find_iter(&content)
                        .map(|m| m.as_str().to_string())
                        .filter(|candidate| run_programmatic_validator(matcher, candidate))
                        .collect();
                    debug!("Category '{}' produced {} match(es).", matcher.category, hits.len());
                    categories.insert(matcher.category, hits);
                }

                ExtractionResult {
                    security,
                    categories,
                    halt_message: None,
                }
            }
        }
    }
}

fn run_programmatic_validator(matcher: &CompiledMatcher, candidate: &str) -> bool {
    if !matcher.programmatic_validation {
        return true;
    }
    match matcher.category {
        Category::Email => validators::is_valid_email(candidate),
        Category::CreditCard => validators::is_valid_credit_card(candidate),
        _ => true,
    }
}

/// Fully processes an input string in a single, one-shot call.
///
/// This convenience wrapper is the primary entry point for callers that do
/// not need to hold an engine across invocations.
pub fn extract_all(text: &str) -> Result<ExtractionResult, SiftError> {
    let engine = ExtractionEngine::new()?;
    Ok(engine.extract_all(text))
}
