//! Length rules - minimal and maximal password length.

use super::{RuleFailure, RuleKind, RuleOutcome};
use crate::config::PolicyConfig;

/// Fails when the password is shorter than the configured minimum.
pub(crate) fn minimal_length(config: &PolicyConfig, password: &str) -> RuleOutcome {
    let length = password.chars().count() as u32;
    if length < config.minimum_length() {
        return Some(RuleFailure::new(
            RuleKind::MinimalLength,
            f64::from(config.minimum_length()),
            f64::from(length),
        ));
    }
    None
}

/// Fails when the password is longer than the configured maximum.
pub(crate) fn maximal_length(config: &PolicyConfig, password: &str) -> RuleOutcome {
    let length = password.chars().count() as u32;
    if length > config.maximum_length() {
        return Some(RuleFailure::new(
            RuleKind::MaximalLength,
            f64::from(config.maximum_length()),
            f64::from(length),
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_min(length: f64) -> PolicyConfig {
        let mut config = PolicyConfig::default();
        config.set_minimum_length(length).unwrap();
        config
    }

    #[test]
    fn test_minimal_length_too_short() {
        let config = config_with_min(5.0);
        let failure = minimal_length(&config, "aaaa").unwrap();
        assert_eq!(failure.rule, RuleKind::MinimalLength);
        assert_eq!(failure.expected, 5.0);
        assert_eq!(failure.actual, 4.0);
    }

    #[test]
    fn test_minimal_length_exactly_minimum() {
        let config = config_with_min(5.0);
        assert_eq!(minimal_length(&config, "aaaaa"), None);
    }

    #[test]
    fn test_minimal_length_counts_characters_not_bytes() {
        let config = config_with_min(5.0);
        // Five characters, more than five bytes.
        assert_eq!(minimal_length(&config, "ééééé"), None);
    }

    #[test]
    fn test_maximal_length_too_long() {
        let mut config = PolicyConfig::default();
        config.set_maximum_length(5.0).unwrap();
        let failure = maximal_length(&config, "aaaaaa").unwrap();
        assert_eq!(failure.rule, RuleKind::MaximalLength);
        assert_eq!(failure.expected, 5.0);
        assert_eq!(failure.actual, 6.0);
    }

    #[test]
    fn test_maximal_length_exactly_maximum() {
        let mut config = PolicyConfig::default();
        config.set_maximum_length(5.0).unwrap();
        assert_eq!(maximal_length(&config, "aaaaa"), None);
    }
}
