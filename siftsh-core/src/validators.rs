// File: siftsh-core/src/validators.rs
//! Programmatic validation functions for specific extraction categories.
//!
//! This module provides additional validation logic beyond regular expression
//! matching for candidates produced by the category matchers. These functions
//! help reduce false positives by applying structural and checksum checks:
//! a coarse well-formedness check for email addresses and the Luhn checksum
//! for payment-card numbers. Candidates that fail are dropped from the
//! result set, never surfaced.
//!
//! License: MIT OR APACHE 2.0

/// Maximum total length of a valid email address candidate.
const MAX_EMAIL_LENGTH: usize = 254;

/// Helper function to validate an email candidate structurally.
///
/// This is a coarse sanity check, not full address-grammar validation:
/// it enforces the length cap, exactly one `@`, no consecutive dots, no
/// leading or trailing dot, and a non-empty local part and domain.
///
/// # Arguments
///
/// * `candidate` - The email string slice to validate.
///
/// # Returns
///
/// `true` if the candidate passes the structural checks, `false` otherwise.
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    if candidate.chars().filter(|&c| c == '@').count() != 1 {
        return false;
    }
    if candidate.contains("..") || candidate.starts_with('.') || candidate.ends_with('.') {
        return false;
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty()
}

/// Validates a number using the Luhn algorithm.
///
/// The Luhn algorithm, also known as the Mod 10 algorithm, is a simple
/// checksum formula used to validate a variety of identification numbers,
/// such as credit card numbers.
///
/// # Arguments
///
/// * `num_str` - A string slice containing only digits.
///
/// # Returns
///
/// `true` if the number is valid according to the Luhn algorithm, `false` otherwise.
pub fn is_valid_luhn(num_str: &str) -> bool {
    let mut sum = 0;
    let mut alternate = false;

    for c in num_str.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else { return false; };

        if alternate {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        alternate = !alternate;
    }

    sum % 10 == 0
}

/// Helper function to validate credit card numbers based on the Luhn algorithm.
///
/// Hyphen and whitespace separators are stripped first; the remaining
/// string must be non-empty and composed entirely of digits before the
/// Luhn checksum is applied.
///
/// # Arguments
///
/// * `candidate` - The credit card number string slice to validate.
///
/// # Returns
///
/// `true` if the number is valid according to the Luhn algorithm, `false` otherwise.
pub fn is_valid_credit_card(candidate: &str) -> bool {
    let digits: String = candidate
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    is_valid_luhn(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_accepts_known_good_number() {
        assert!(is_valid_luhn("4111111111111111"));
    }

    #[test]
    fn luhn_rejects_off_by_one() {
        assert!(!is_valid_luhn("4111111111111112"));
    }

    #[test]
    fn luhn_is_idempotent() {
        // Re-running yields the same verdict.
        assert_eq!(
            is_valid_luhn("4111111111111111"),
            is_valid_luhn("4111111111111111")
        );
    }

    #[test]
    fn luhn_rejects_non_digit_input() {
        assert!(!is_valid_luhn("4111-1111-1111-1111"));
    }

    #[test]
    fn credit_card_strips_separators() {
        assert!(is_valid_credit_card("4111-1111-1111-1111"));
        assert!(is_valid_credit_card("4111 1111 1111 1111"));
        assert!(is_valid_credit_card("5500005555555559"));
    }

    #[test]
    fn credit_card_rejects_garbage() {
        assert!(!is_valid_credit_card(""));
        assert!(!is_valid_credit_card("----"));
        assert!(!is_valid_credit_card("4111x1111y1111z1111"));
    }

    #[test]
    fn email_accepts_simple_address() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("john.doe+tag@example.co.uk"));
    }

    #[test]
    fn email_rejects_consecutive_dots() {
        assert!(!is_valid_email("a..b@c.com"));
    }

    #[test]
    fn email_rejects_leading_and_trailing_dot() {
        assert!(!is_valid_email(".a@b.com"));
        assert!(!is_valid_email("a@b.com."));
    }

    #[test]
    fn email_rejects_wrong_at_count() {
        assert!(!is_valid_email("ab.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn email_rejects_empty_local_part() {
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@"));
    }

    #[test]
    fn email_rejects_overlong_address() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(!is_valid_email(&long));
    }
}
