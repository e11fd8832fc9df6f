// siftsh-core/src/screener.rs
//! The security screener: dangerous-content signature matching and input
//! size/repetition limits.
//!
//! Screening is a pure function of the input text. Every signature is
//! evaluated independently — screening never stops at the first hit — and
//! each hit contributes one warning naming the violated signature. The
//! verdict is safe iff zero warnings were produced.
//!
//! The signature catalogue is intentionally a fixed static slice: it is
//! compiled once per process and shared read-only across concurrent
//! invocations.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Inputs longer than this many characters are rejected by the screener.
///
/// The limit caps worst-case pattern-matching cost on hostile input and is
/// enforced before any category extractor runs.
pub const MAX_INPUT_CHARS: usize = 1_000_000;

/// The longest allowed run of a single repeated character. A run of
/// `MAX_CHAR_RUN + 1` or more identical consecutive characters produces a
/// repetition warning.
pub const MAX_CHAR_RUN: usize = 100;

/// A fixed pattern whose presence in text indicates a known attack
/// technique.
#[derive(Debug)]
pub struct Signature {
    /// Short, snake_case identifier used in warnings and logs.
    pub name: &'static str,
    /// The regex string, compiled once at first use.
    pub pattern: &'static str,
    /// If true, the dot character `.` will match newlines.
    pub dot_matches_new_line: bool,
}

/// The built-in dangerous-content signature catalogue, in evaluation order.
///
/// Signatures 1-6 are case-insensitive via inline `(?i)` flags; the path
/// traversal and percent-encoded control signatures are case-sensitive.
pub static SIGNATURES: &[Signature] = &[
    Signature {
        name: "script_tag",
        pattern: r"(?i)<script[^>]*>.*?</script>",
        dot_matches_new_line: true,
    },
    Signature {
        name: "javascript_uri",
        pattern: r"(?i)javascript:",
        dot_matches_new_line: false,
    },
    Signature {
        name: "event_handler",
        pattern: r"(?i)on\w+\s*=",
        dot_matches_new_line: false,
    },
    Signature {
        name: "eval_call",
        pattern: r"(?i)eval\s*\(",
        dot_matches_new_line: false,
    },
    Signature {
        name: "exec_call",
        pattern: r"(?i)\bexec\s*\(",
        dot_matches_new_line: false,
    },
    Signature {
        name: "sql_keywords",
        pattern: r"(?i)(?:union|select|insert|delete|update|drop|alter|create)\s+(?:select|from|where|table)",
        dot_matches_new_line: false,
    },
    Signature {
        name: "path_traversal",
        pattern: r"\.\./|\.\.\\",
        dot_matches_new_line: false,
    },
    Signature {
        name: "encoded_control_chars",
        pattern: r"%00|%0d|%0a",
        dot_matches_new_line: false,
    },
];

lazy_static! {
    /// Compiled signature set, shared read-only. The patterns are static
    /// and covered by `all_signatures_compile`; failure here is a defect.
    static ref COMPILED_SIGNATURES: Vec<(&'static Signature, Regex)> = SIGNATURES
        .iter()
        .map(|sig| {
            let regex = RegexBuilder::new(sig.pattern)
                .dot_matches_new_line(sig.dot_matches_new_line)
                .build()
                .expect("static signature pattern must compile");
            (sig, regex)
        })
        .collect();
}

/// The outcome of screening one input text. Immutable once produced.
///
/// `is_safe` is `false` iff at least one warning was collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityVerdict {
    pub is_safe: bool,
    pub warnings: Vec<String>,
}

impl SecurityVerdict {
    fn from_warnings(warnings: Vec<String>) -> Self {
        Self {
            is_safe: warnings.is_empty(),
            warnings,
        }
    }
}

/// Screens raw input text against the signature catalogue and the
/// size/repetition limits.
///
/// All checks always run; warnings are collected in catalogue order,
/// followed by the size warning and the repetition warning.
pub fn screen(text: &str) -> SecurityVerdict {
    let mut warnings = Vec::new();

    for (sig, regex) in COMPILED_SIGNATURES.iter() {
        if regex.is_match(text) {
            log::debug!("signature '{}' matched during screening", sig.name);
            warnings.push(format!(
                "Potentially dangerous pattern found: {}",
                sig.name
            ));
        }
    }

    if text.chars().count() > MAX_INPUT_CHARS {
        warnings.push(format!(
            "Text length exceeds {} characters.",
            MAX_INPUT_CHARS
        ));
    }

    if has_excessive_repetition(text) {
        warnings.push("Detected excessive repetition of a single character.".to_string());
    }

    SecurityVerdict::from_warnings(warnings)
}

/// Returns true if any single character repeats more than [`MAX_CHAR_RUN`]
/// times consecutively.
///
/// The `regex` crate has no backreferences, so this is a linear run-length
/// scan rather than a `(.)\1{100,}` pattern.
fn has_excessive_repetition(text: &str) -> bool {
    let mut run_char: Option<char> = None;
    let mut run_len = 0usize;

    for c in text.chars() {
        if run_char == Some(c) {
            run_len += 1;
            if run_len > MAX_CHAR_RUN {
                return true;
            }
        } else {
            run_char = Some(c);
            run_len = 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_signatures_compile() {
        for sig in SIGNATURES {
            RegexBuilder::new(sig.pattern)
                .dot_matches_new_line(sig.dot_matches_new_line)
                .build()
                .unwrap_or_else(|e| panic!("signature '{}' failed to compile: {e}", sig.name));
        }
    }

    #[test]
    fn signature_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for sig in SIGNATURES {
            assert!(seen.insert(sig.name), "duplicate signature name: {}", sig.name);
        }
    }

    #[test]
    fn clean_text_is_safe() {
        let verdict = screen("Email john@example.com, site https://example.com, tag #sale");
        assert!(verdict.is_safe);
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn script_tag_spanning_lines_is_flagged() {
        let verdict = screen("before <script type=\"text/javascript\">\nalert(1)\n</script> after");
        assert!(!verdict.is_safe);
        assert!(verdict.warnings.iter().any(|w| w.contains("script_tag")));
    }

    #[test]
    fn each_signature_fires_on_its_probe() {
        let probes = [
            ("script_tag", "<script>alert(1)</script>"),
            ("javascript_uri", "click JAVASCRIPT:void(0)"),
            ("event_handler", "<img onerror = alert(1)>"),
            ("eval_call", "please eval (payload)"),
            ("exec_call", "then exec(cmd)"),
            ("sql_keywords", "UNION SELECT password"),
            ("path_traversal", "open ../../etc/passwd"),
            ("encoded_control_chars", "a%00b"),
        ];
        for (name, probe) in probes {
            let verdict = screen(probe);
            assert!(!verdict.is_safe, "probe for '{}' judged safe", name);
            assert!(
                verdict.warnings.iter().any(|w| w.contains(name)),
                "probe for '{}' did not produce its warning: {:?}",
                name,
                verdict.warnings
            );
        }
    }

    #[test]
    fn exec_requires_word_boundary() {
        assert!(screen("reexec(1)").is_safe);
        assert!(!screen("exec(1)").is_safe);
    }

    #[test]
    fn screening_collects_all_warnings() {
        let verdict = screen("<script>eval(x)</script> javascript: ../");
        assert!(!verdict.is_safe);
        // script_tag, javascript_uri, eval_call, path_traversal
        assert!(verdict.warnings.len() >= 4, "warnings: {:?}", verdict.warnings);
    }

    #[test]
    fn oversized_input_is_flagged() {
        let text = "ab".repeat(MAX_INPUT_CHARS / 2 + 1);
        let verdict = screen(&text);
        assert!(!verdict.is_safe);
        assert!(verdict.warnings.iter().any(|w| w.contains("length")));
    }

    #[test]
    fn repetition_limit_is_exclusive_at_one_hundred() {
        let exactly_hundred = "x".repeat(MAX_CHAR_RUN);
        assert!(screen(&exactly_hundred).is_safe);

        let over = "x".repeat(MAX_CHAR_RUN + 1);
        let verdict = screen(&over);
        assert!(!verdict.is_safe);
        assert!(verdict.warnings.iter().any(|w| w.contains("repetition")));
    }

    #[test]
    fn screening_is_pure() {
        let text = "drop table users";
        assert_eq!(screen(text), screen(text));
    }
}
