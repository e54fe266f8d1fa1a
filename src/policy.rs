//! Password policy - configuration surface and evaluation loop.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::config::PolicyConfig;
use crate::estimator::{BruteForceEstimator, CrackTimeEstimator};
use crate::lexicon::Lexicon;
use crate::rules::{self, RuleFailure, RuleKind, RuleSet};

/// Symbols allowed by the `"user"` default policy.
pub const USER_POLICY_SYMBOLS: &str = ",.!#@*";

/// Symbols allowed by the `"sip"` default policy.
pub const SIP_POLICY_SYMBOLS: &str = "-.*()%";

/// Errors raised by configuration calls.
///
/// Malformed policy setup is a programmer error and fails fast; a
/// non-conforming password is not an error at all and is reported through
/// [`PasswordPolicy::failures`] instead.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("{parameter} has to be a finite non-negative number, got {value}")]
    TypeConstraintViolation { parameter: &'static str, value: f64 },
    #[error("Policy {0} is not allowed")]
    UnknownPolicy(String),
}

/// A configurable password-acceptance policy.
///
/// Each threshold setter keeps the rule set in step with the value: `0`
/// removes the rule, any non-zero value installs it. `validate` runs every
/// active rule against one password snapshot and stores the structured
/// failures for inspection.
///
/// A policy instance assumes a single writer: configuration must not be
/// mutated concurrently with an in-flight `validate` call.
pub struct PasswordPolicy {
    config: PolicyConfig,
    rules: RuleSet,
    estimator: Box<dyn CrackTimeEstimator>,
    lexicon: Lexicon,
    last_failures: Vec<RuleFailure>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordPolicy {
    /// Policy with no active rules, the default brute-force estimator and
    /// an empty lexicon.
    pub fn new() -> Self {
        Self::with_collaborators(Box::new(BruteForceEstimator::default()), Lexicon::default())
    }

    /// Policy with an injected estimator and lexicon.
    pub fn with_collaborators(estimator: Box<dyn CrackTimeEstimator>, lexicon: Lexicon) -> Self {
        Self {
            config: PolicyConfig::default(),
            rules: RuleSet::new(),
            estimator,
            lexicon,
            last_failures: Vec::new(),
        }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The word list data attached to this policy. No rule consults it.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Failures recorded by the most recent `validate` call.
    pub fn failures(&self) -> &[RuleFailure] {
        &self.last_failures
    }

    /// Sets the minimal password length. `0` disables the rule.
    pub fn set_minimum_length(&mut self, length: f64) -> Result<(), PolicyError> {
        let value = self.config.set_minimum_length(length)?;
        self.rules.set_active(RuleKind::MinimalLength, value != 0);
        Ok(())
    }

    /// Sets the maximal password length. `0` disables the rule.
    pub fn set_maximum_length(&mut self, length: f64) -> Result<(), PolicyError> {
        let value = self.config.set_maximum_length(length)?;
        self.rules.set_active(RuleKind::MaximalLength, value != 0);
        Ok(())
    }

    /// Sets the minimal number of allowed uppercase letters. `0` disables
    /// the rule.
    pub fn set_minimum_uppercase_count(&mut self, count: f64) -> Result<(), PolicyError> {
        let value = self.config.set_minimum_uppercase_count(count)?;
        self.rules
            .set_active(RuleKind::MinimumUppercaseCount, value != 0);
        Ok(())
    }

    /// Sets the minimal number of allowed digits. `0` disables the rule.
    pub fn set_minimum_digit_count(&mut self, count: f64) -> Result<(), PolicyError> {
        let value = self.config.set_minimum_digit_count(count)?;
        self.rules
            .set_active(RuleKind::MinimumDigitCount, value != 0);
        Ok(())
    }

    /// Sets the minimal estimated crack time in days. `0` disables the
    /// rule.
    pub fn set_minimum_crack_days(&mut self, days: f64) -> Result<(), PolicyError> {
        let value = self.config.set_minimum_crack_days(days)?;
        self.rules.set_active(RuleKind::MinimumCrackDays, value != 0);
        Ok(())
    }

    /// Sets the allowed uppercase letters. The set is uppercased and the
    /// combined letter set recomputed.
    pub fn set_allowed_upper_letters(&mut self, letters: &str) {
        self.config.set_allowed_upper_letters(letters);
    }

    /// Sets the allowed lowercase letters. The set is lowercased and the
    /// combined letter set recomputed.
    pub fn set_allowed_lower_letters(&mut self, letters: &str) {
        self.config.set_allowed_lower_letters(letters);
    }

    /// Sets the allowed digits.
    pub fn set_allowed_digits(&mut self, digits: &str) {
        self.config.set_allowed_digits(digits);
    }

    /// Sets the allowed symbols.
    pub fn set_allowed_symbols(&mut self, symbols: &str) {
        self.config.set_allowed_symbols(symbols);
    }

    /// Toggles the letter composition rule, independent of any threshold.
    pub fn check_letters(&mut self, active: bool) {
        self.rules.set_active(RuleKind::Letters, active);
    }

    /// Toggles the digit composition rule, independent of any threshold.
    pub fn check_numbers(&mut self, active: bool) {
        self.rules.set_active(RuleKind::Digits, active);
    }

    /// Toggles the symbol composition rule, independent of any threshold.
    pub fn check_symbols(&mut self, active: bool) {
        self.rules.set_active(RuleKind::Symbols, active);
    }

    /// Applies a named parameter bundle.
    ///
    /// - `"user"`: all three composition checks, one uppercase letter,
    ///   14 crack days, length 10, symbols from [`USER_POLICY_SYMBOLS`]
    /// - `"sip"`: all three composition checks, length 8, symbols from
    ///   [`SIP_POLICY_SYMBOLS`]
    ///
    /// Any other name fails with [`PolicyError::UnknownPolicy`] before any
    /// parameter is touched.
    pub fn apply_default_policy(&mut self, name: &str) -> Result<(), PolicyError> {
        match name {
            "user" => {
                self.check_letters(true);
                self.check_numbers(true);
                self.check_symbols(true);
                self.set_minimum_uppercase_count(1.0)?;
                self.set_minimum_crack_days(14.0)?;
                self.set_minimum_length(10.0)?;
                self.set_allowed_symbols(USER_POLICY_SYMBOLS);
            }
            "sip" => {
                self.check_letters(true);
                self.check_numbers(true);
                self.check_symbols(true);
                self.set_minimum_length(8.0)?;
                self.set_allowed_symbols(SIP_POLICY_SYMBOLS);
            }
            other => {
                return Err(PolicyError::UnknownPolicy(other.to_string()));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Applied default policy: {}", name);

        Ok(())
    }

    /// Runs every active rule against `password` and stores the failures.
    ///
    /// Returns `true` iff no rule failed. Never fails for a non-conforming
    /// password; inspect [`failures`](Self::failures) for the detail.
    pub fn validate(&mut self, password: &SecretString) -> bool {
        self.last_failures = self.evaluate(password);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Password validation finished: {} active rules, {} failures",
            self.rules.active_count(),
            self.last_failures.len()
        );

        self.last_failures.is_empty()
    }

    /// Runs every active rule against `password` and returns the failures,
    /// without touching the stored failure list.
    ///
    /// All active rules run to completion; the returned list is complete,
    /// not merely the first failure, and follows the fixed evaluation
    /// order.
    pub fn evaluate(&self, password: &SecretString) -> Vec<RuleFailure> {
        let pwd = password.expose_secret();
        let mut failures = Vec::new();

        for rule in self.rules.active_rules() {
            let outcome = match rule {
                RuleKind::MinimalLength => rules::minimal_length(&self.config, pwd),
                RuleKind::MaximalLength => rules::maximal_length(&self.config, pwd),
                RuleKind::MinimumUppercaseCount => {
                    rules::minimum_uppercase_count(&self.config, pwd)
                }
                RuleKind::MinimumDigitCount => rules::minimum_digit_count(&self.config, pwd),
                RuleKind::MinimumCrackDays => {
                    rules::minimum_crack_days(&self.config, self.estimator.as_ref(), pwd)
                }
                RuleKind::Letters => rules::letters_composition(&self.config, pwd),
                RuleKind::Digits => rules::digits_composition(&self.config, pwd),
                RuleKind::Symbols => rules::symbols_composition(&self.config, pwd),
            };
            if let Some(failure) = outcome {
                failures.push(failure);
            }
        }

        failures
    }
}
