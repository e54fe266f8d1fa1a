//! Count rules - minimum number of uppercase letters and of digits.
//!
//! A character is only credited when it belongs to the reference alphabet
//! of the class AND to the currently allowed subset, so shrinking the
//! allowed set shrinks what these rules count. Duplicates count each
//! occurrence.

use super::{RuleFailure, RuleKind, RuleOutcome};
use crate::classify::{count_members, DIGITS, UPPER_LETTERS};
use crate::config::PolicyConfig;

/// Fails when the password holds fewer allowed uppercase letters than
/// configured.
pub(crate) fn minimum_uppercase_count(config: &PolicyConfig, password: &str) -> RuleOutcome {
    let creditable = intersect(config.allowed_upper_letters(), UPPER_LETTERS);
    let count = count_members(&creditable, password) as u32;
    if count < config.minimum_uppercase_count() {
        return Some(RuleFailure::new(
            RuleKind::MinimumUppercaseCount,
            f64::from(config.minimum_uppercase_count()),
            f64::from(count),
        ));
    }
    None
}

/// Fails when the password holds fewer allowed digits than configured.
pub(crate) fn minimum_digit_count(config: &PolicyConfig, password: &str) -> RuleOutcome {
    let creditable = intersect(config.allowed_digits(), DIGITS);
    let count = count_members(&creditable, password) as u32;
    if count < config.minimum_digit_count() {
        return Some(RuleFailure::new(
            RuleKind::MinimumDigitCount,
            f64::from(config.minimum_digit_count()),
            f64::from(count),
        ));
    }
    None
}

/// Characters of `allowed` that are members of `reference`.
fn intersect(allowed: &str, reference: &str) -> String {
    allowed.chars().filter(|c| reference.contains(*c)).collect()
}
