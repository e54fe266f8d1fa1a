//! Composition rules - every character of a class must come from the
//! allowed subset of that class.
//!
//! Each check works by elimination: strip the characters belonging to the
//! other two reference alphabets, then count what remains outside the
//! allowed set of the class under test. Stripping uses the fixed reference
//! alphabets, never the allowed sets, so an allowed set can be a strict
//! subset of its reference alphabet without characters leaking between
//! classes. Characters outside every reference alphabet survive the
//! stripping and count against whichever class is being checked.

use super::{RuleFailure, RuleKind, RuleOutcome};
use crate::classify::{count_outside, strip_members, DIGITS, LETTERS, SYMBOLS};
use crate::config::PolicyConfig;

/// Fails when the password contains letters outside the allowed letter set.
pub(crate) fn letters_composition(config: &PolicyConfig, password: &str) -> RuleOutcome {
    let residue = strip_members(&strip_members(password, DIGITS), SYMBOLS);
    let outside = count_outside(&residue, config.allowed_letters());
    if outside > 0 {
        return Some(RuleFailure::new(RuleKind::Letters, 0.0, outside as f64));
    }
    None
}

/// Fails when the password contains digits outside the allowed digit set.
pub(crate) fn digits_composition(config: &PolicyConfig, password: &str) -> RuleOutcome {
    let residue = strip_members(&strip_members(password, LETTERS), SYMBOLS);
    let outside = count_outside(&residue, config.allowed_digits());
    if outside > 0 {
        return Some(RuleFailure::new(RuleKind::Digits, 0.0, outside as f64));
    }
    None
}

/// Fails when the password contains symbols outside the allowed symbol set.
pub(crate) fn symbols_composition(config: &PolicyConfig, password: &str) -> RuleOutcome {
    let residue = strip_members(&strip_members(password, LETTERS), DIGITS);
    let outside = count_outside(&residue, config.allowed_symbols());
    if outside > 0 {
        return Some(RuleFailure::new(RuleKind::Symbols, 0.0, outside as f64));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_within_allowed_set() {
        let mut config = PolicyConfig::default();
        config.set_allowed_symbols("$%-");
        assert_eq!(symbols_composition(&config, "x-X-x"), None);
    }

    #[test]
    fn test_symbols_outside_allowed_set() {
        let mut config = PolicyConfig::default();
        config.set_allowed_symbols("$%");
        let failure = symbols_composition(&config, "x-X-x").unwrap();
        assert_eq!(failure.rule, RuleKind::Symbols);
        assert_eq!(failure.expected, 0.0);
        assert_eq!(failure.actual, 2.0);
    }

    #[test]
    fn test_digits_within_allowed_set() {
        let mut config = PolicyConfig::default();
        config.set_allowed_digits("0");
        assert_eq!(digits_composition(&config, "x-0-x"), None);
    }

    #[test]
    fn test_digits_with_empty_allowed_set() {
        let mut config = PolicyConfig::default();
        config.set_allowed_digits("");
        let failure = digits_composition(&config, "x-0-x").unwrap();
        assert_eq!(failure.rule, RuleKind::Digits);
        assert_eq!(failure.actual, 1.0);
    }

    #[test]
    fn test_letters_within_allowed_set() {
        let mut config = PolicyConfig::default();
        config.set_allowed_lower_letters("x");
        config.set_allowed_upper_letters("");
        assert_eq!(letters_composition(&config, "x-0-x"), None);
    }

    #[test]
    fn test_letters_with_empty_allowed_sets() {
        let mut config = PolicyConfig::default();
        config.set_allowed_lower_letters("");
        config.set_allowed_upper_letters("");
        let failure = letters_composition(&config, "x-0-x").unwrap();
        assert_eq!(failure.rule, RuleKind::Letters);
        assert_eq!(failure.actual, 2.0);
    }

    #[test]
    fn test_allowed_subset_does_not_cause_false_stripping() {
        // Only "a" is an allowed letter; other reference letters are still
        // stripped by the digit check instead of counting as bad digits.
        let mut config = PolicyConfig::default();
        config.set_allowed_lower_letters("a");
        config.set_allowed_upper_letters("");
        assert_eq!(digits_composition(&config, "zzz123"), None);
        let failure = letters_composition(&config, "zzz123").unwrap();
        assert_eq!(failure.actual, 3.0);
    }

    #[test]
    fn test_unclassified_characters_count_against_each_class() {
        let config = PolicyConfig::default();
        let failure = symbols_composition(&config, "héllo").unwrap();
        assert_eq!(failure.actual, 1.0);
        let failure = digits_composition(&config, "héllo").unwrap();
        assert_eq!(failure.actual, 1.0);
    }
}
