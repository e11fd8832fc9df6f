// siftsh-core/src/matchers.rs
//! Manages the compilation and sharing of category matchers.
//!
//! This module turns the static [`MatcherDef`] catalogue into
//! [`CompiledMatchers`] optimized for repeated application. The compiled
//! set is built once per process and shared read-only across concurrent
//! invocations; there is no mutable matcher state anywhere.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};
use std::sync::Arc;

use crate::category::Category;
use crate::errors::SiftError;

/// Maximum allowed length for a matcher pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// The definition of a single category matcher.
///
/// A definition with no pattern is a reserved category: it stays part of
/// the public vocabulary but compiles to nothing and always yields an
/// empty match list.
#[derive(Debug)]
pub struct MatcherDef {
    /// The category this matcher feeds.
    pub category: Category,
    /// The regex pattern string, or `None` for reserved categories.
    pub pattern: Option<&'static str>,
    /// If true, matches of this category require programmatic validation
    /// before inclusion in a result.
    pub programmatic_validation: bool,
}

/// The built-in matcher catalogue. One entry per category.
pub static MATCHER_DEFS: &[MatcherDef] = &[
    MatcherDef {
        category: Category::Email,
        pattern: Some(r"\b[a-zA-Z0-9][a-zA-Z0-9._%+-]*@[a-zA-Z0-9][a-zA-Z0-9.-]*\.[a-zA-Z]{2,}\b"),
        programmatic_validation: true,
    },
    MatcherDef {
        category: Category::Url,
        pattern: Some(
            r"(?i)\bhttps://(?:[a-zA-Z0-9-]+\.)*[a-zA-Z0-9-]+\.[a-zA-Z]{2,}(?::[0-9]{1,5})?(?:/[^\s]*)?",
        ),
        programmatic_validation: false,
    },
    MatcherDef {
        // North-American numbering plan: optional +1 prefix, area code in
        // parentheses or bare, `-`/`.`/space separators. The inner `\b`
        // keeps ten-digit tails of longer digit runs from matching.
        category: Category::Phone,
        pattern: Some(r"(?:\+?1[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b"),
        programmatic_validation: false,
    },
    MatcherDef {
        // Visa (13 or 16 digits) and MasterCard (16 digits) prefixes.
        category: Category::CreditCard,
        pattern: Some(r"\b(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14})\b"),
        programmatic_validation: true,
    },
    MatcherDef {
        category: Category::Hashtag,
        pattern: Some(r"#[a-zA-Z0-9_]{1,50}\b"),
        programmatic_validation: false,
    },
    MatcherDef {
        category: Category::HtmlTag,
        pattern: Some(r"</?[a-zA-Z][a-zA-Z0-9]*(?:\s+[^<>]*)?/?>"),
        programmatic_validation: false,
    },
    MatcherDef {
        category: Category::Currency,
        pattern: Some(r"\$"),
        programmatic_validation: false,
    },
    MatcherDef {
        // Reserved: no matching rule is defined for `time` yet.
        category: Category::Time,
        pattern: None,
        programmatic_validation: false,
    },
];

/// Represents a single compiled category matcher.
#[derive(Debug)]
pub struct CompiledMatcher {
    /// The category this matcher feeds.
    pub category: Category,
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// A flag indicating if matches require programmatic validation.
    pub programmatic_validation: bool,
}

/// Represents the full compiled matcher set for efficient extraction.
#[derive(Debug)]
pub struct CompiledMatchers {
    /// Compiled matchers, in catalogue order.
    pub matchers: Vec<CompiledMatcher>,
}

/// Compiles the matcher catalogue into [`CompiledMatchers`].
///
/// Reserved definitions (missing pattern) are skipped with a log entry;
/// any compilation failure is a defect in the static catalogue and is
/// reported as an error rather than silently dropped.
pub fn compile_matchers(defs: &[MatcherDef]) -> Result<CompiledMatchers, SiftError> {
    debug!("Starting compilation of {} matcher definitions.", defs.len());

    let mut matchers = Vec::new();
    for def in defs {
        let Some(pattern) = def.pattern else {
            warn!(
                "Skipping matcher for reserved category '{}' because its pattern is missing.",
                def.category
            );
            continue;
        };

        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(SiftError::PatternLengthExceeded(
                def.category,
                pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
        }

        let regex = RegexBuilder::new(pattern)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build()
            .map_err(|e| SiftError::MatcherCompilationError(def.category, e))?;

        debug!("Matcher for category '{}' compiled successfully.", def.category);
        matchers.push(CompiledMatcher {
            category: def.category,
            regex,
            programmatic_validation: def.programmatic_validation,
        });
    }

    debug!("Finished compiling matchers. Total compiled: {}.", matchers.len());
    Ok(CompiledMatchers { matchers })
}

/// The process-wide compiled matcher set.
static SHARED_MATCHERS: OnceCell<Arc<CompiledMatchers>> = OnceCell::new();

/// Returns the shared compiled matcher set, compiling it on first use.
///
/// Returns an `Arc` to allow cheap sharing across engines and threads.
pub fn shared_matchers() -> Result<Arc<CompiledMatchers>, SiftError> {
    SHARED_MATCHERS
        .get_or_try_init(|| compile_matchers(MATCHER_DEFS).map(Arc::new))
        .map(Arc::clone)
}
