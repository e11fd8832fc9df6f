// siftsh/src/report.rs
//! Human-readable report rendering for extraction results.
//!
//! The security status always comes first, and extracted data is refused
//! whenever the verdict is unsafe. Sensitive categories are shown masked
//! unless the caller explicitly asked for raw values.

use owo_colors::OwoColorize;
use siftsh_core::{mask, Category, ExtractionResult};

const RULE_HEAVY: &str =
    "======================================================================";
const RULE_LIGHT: &str =
    "----------------------------------------------------------------------";

/// Display entries of this category beyond the cap are summarized, not listed.
const HTML_TAG_DISPLAY_CAP: usize = 10;

/// Renders the full extraction report as a string.
///
/// * `show_raw` - when true, sensitive values are displayed unmasked.
/// * `use_color` - when true, the status line is colored for terminals.
pub fn render_report(result: &ExtractionResult, show_raw: bool, use_color: bool) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push(RULE_HEAVY.to_string());
    out.push("DATA EXTRACTION RESULTS".to_string());
    out.push(RULE_HEAVY.to_string());
    out.push(String::new());

    out.push("SECURITY STATUS:".to_string());
    out.push(RULE_LIGHT.to_string());
    out.push(format!("Safe: {}", render_status(result.security.is_safe, use_color)));
    if !result.security.warnings.is_empty() {
        out.push("Warnings:".to_string());
        for warning in &result.security.warnings {
            out.push(format!("  - {}", warning));
        }
    }
    out.push(String::new());

    if !result.security.is_safe {
        if let Some(message) = &result.halt_message {
            out.push(message.clone());
        }
        out.push("Processing halted due to security concerns.".to_string());
        return out.join("\n");
    }

    out.push("EXTRACTED DATA:".to_string());
    out.push(String::new());
    for category in Category::ALL {
        let matches = result
            .categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default();
        render_section(&mut out, *category, matches, show_raw);
    }

    out.push(RULE_HEAVY.to_string());
    out.push("END OF REPORT".to_string());
    out.push(RULE_HEAVY.to_string());

    out.join("\n")
}

fn render_status(is_safe: bool, use_color: bool) -> String {
    match (is_safe, use_color) {
        (true, true) => format!("{}", "true".green()),
        (false, true) => format!("{}", "false".red()),
        (safe, false) => safe.to_string(),
    }
}

fn render_section(out: &mut Vec<String>, category: Category, matches: &[String], show_raw: bool) {
    out.push(format!("{} FOUND: {}", section_label(category), matches.len()));
    out.push(RULE_LIGHT.to_string());

    if matches.is_empty() {
        out.push("  None found".to_string());
        out.push(String::new());
        return;
    }

    if category.is_sensitive() && !show_raw {
        out.push("  SENSITIVE DATA - shown masked".to_string());
    }
    if category == Category::HtmlTag {
        out.push("  Note: HTML tags are extracted, never rendered".to_string());
    }

    let display_cap = if category == Category::HtmlTag {
        HTML_TAG_DISPLAY_CAP
    } else {
        matches.len()
    };

    for value in matches.iter().take(display_cap) {
        let shown = if category.is_sensitive() && !show_raw {
            mask(value, category)
        } else {
            value.clone()
        };
        out.push(format!("  {}", shown));
    }
    if matches.len() > display_cap {
        out.push(format!("  ... and {} more", matches.len() - display_cap));
    }
    out.push(String::new());
}

fn section_label(category: Category) -> &'static str {
    match category {
        Category::Email => "EMAILS",
        Category::Url => "URLS",
        Category::Phone => "PHONE NUMBERS",
        Category::CreditCard => "CREDIT CARDS",
        Category::Hashtag => "HASHTAGS",
        Category::HtmlTag => "HTML TAGS",
        Category::Currency => "CURRENCY SYMBOLS",
        Category::Time => "TIME VALUES",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siftsh_core::extract_all;

    #[test]
    fn unsafe_report_refuses_extracted_data() {
        let result = extract_all("<script>alert(1)</script> john@example.com").unwrap();
        let report = render_report(&result, false, false);
        assert!(report.contains("Safe: false"));
        assert!(report.contains("Processing halted"));
        assert!(!report.contains("EXTRACTED DATA"));
        assert!(!report.contains("john@example.com"));
    }

    #[test]
    fn safe_report_masks_sensitive_values_by_default() {
        let result = extract_all("john@example.com paid with 4111111111111111").unwrap();
        let report = render_report(&result, false, false);
        assert!(report.contains("Safe: true"));
        assert!(report.contains("j***@example.com"));
        assert!(report.contains("****-****-****-1111"));
        assert!(!report.contains("john@example.com"));
        assert!(!report.contains("4111111111111111"));
    }

    #[test]
    fn show_raw_displays_unmasked_values() {
        let result = extract_all("john@example.com").unwrap();
        let report = render_report(&result, true, false);
        assert!(report.contains("john@example.com"));
    }

    #[test]
    fn every_category_section_is_present_when_safe() {
        let result = extract_all("nothing to see").unwrap();
        let report = render_report(&result, false, false);
        for category in Category::ALL {
            assert!(
                report.contains(section_label(*category)),
                "missing section for {}",
                category
            );
        }
    }

    #[test]
    fn html_tag_section_is_capped() {
        let text = (0..15).map(|_| "<p>").collect::<Vec<_>>().join(" ");
        let result = extract_all(&text).unwrap();
        let report = render_report(&result, false, false);
        assert!(report.contains("HTML TAGS FOUND: 15"));
        assert!(report.contains("... and 5 more"));
    }
}
