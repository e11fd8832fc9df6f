// siftsh-core/src/redaction.rs
//! Masking of sensitive values before they leave the pipeline.
//!
//! A masked value is computed on demand at presentation time and never
//! stored; callers that display or persist `email` or `credit_card`
//! matches are expected to route them through [`mask`] first.

use crate::category::Category;

/// Masks a single validated value for display or storage.
///
/// * `credit_card`: separators are stripped and only the last four digits
///   survive, as `****-****-****-1234`. Callers must guarantee the Luhn
///   validator ran first; for inputs with fewer than four digits the
///   output is unspecified (but never panics).
/// * `email`: the local part is reduced to its first character, as
///   `j***@example.com`. Values that do not split into exactly two
///   non-empty halves around `@` are returned unmodified.
/// * Any other category is returned unmodified.
///
/// Masking is idempotent: applying [`mask`] to an already-masked value
/// returns it unchanged.
pub fn mask(value: &str, category: Category) -> String {
    match category {
        Category::CreditCard => mask_credit_card(value),
        Category::Email => mask_email(value),
        _ => value.to_string(),
    }
}

fn mask_credit_card(value: &str) -> String {
    let stripped: Vec<char> = value
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    let tail_start = stripped.len().saturating_sub(4);
    let tail: String = stripped[tail_start..].iter().collect();
    format!("****-****-****-{}", tail)
}

fn mask_email(value: &str) -> String {
    match value.split_once('@') {
        Some((local, domain)) if value.chars().filter(|&c| c == '@').count() == 1 => {
            match local.chars().next() {
                Some(first) => format!("{}***@{}", first, domain),
                // Defensive fallback: empty local part.
                None => value.to_string(),
            }
        }
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_credit_card_to_last_four() {
        assert_eq!(mask("4111111111111111", Category::CreditCard), "****-****-****-1111");
        assert_eq!(mask("4111-1111-1111-1111", Category::CreditCard), "****-****-****-1111");
    }

    #[test]
    fn masks_email_local_part() {
        assert_eq!(mask("john@example.com", Category::Email), "j***@example.com");
    }

    #[test]
    fn masking_is_idempotent() {
        let card = mask("4111111111111111", Category::CreditCard);
        assert_eq!(mask(&card, Category::CreditCard), card);

        let email = mask("john@example.com", Category::Email);
        assert_eq!(mask(&email, Category::Email), email);
    }

    #[test]
    fn malformed_email_passes_through() {
        assert_eq!(mask("not-an-email", Category::Email), "not-an-email");
        assert_eq!(mask("a@b@c.com", Category::Email), "a@b@c.com");
        assert_eq!(mask("@example.com", Category::Email), "@example.com");
    }

    #[test]
    fn other_categories_pass_through() {
        assert_eq!(mask("#sale", Category::Hashtag), "#sale");
        assert_eq!(mask("https://example.com", Category::Url), "https://example.com");
        assert_eq!(mask("$", Category::Currency), "$");
    }
}
