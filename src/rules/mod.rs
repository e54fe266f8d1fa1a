//! Password validation rules
//!
//! Each rule module checks one requirement against the password and the
//! current policy configuration. The rule set itself is a fixed ordered
//! list of rule kinds with an enabled flag each; configuration setters are
//! the only thing that flips those flags.

use std::fmt;

mod composition;
mod counts;
mod crack_time;
mod length;

pub(crate) use composition::{digits_composition, letters_composition, symbols_composition};
pub(crate) use counts::{minimum_digit_count, minimum_uppercase_count};
pub(crate) use crack_time::minimum_crack_days;
pub(crate) use length::{maximal_length, minimal_length};

/// Result of one rule check.
/// - `Some(failure)` - the rule failed with expected/actual detail
/// - `None` - the rule passed
///
/// Rules never fail for reasons other than the password itself; malformed
/// configuration is rejected earlier, by the setters.
pub type RuleOutcome = Option<RuleFailure>;

/// The declared rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    MinimalLength,
    MaximalLength,
    MinimumUppercaseCount,
    MinimumDigitCount,
    MinimumCrackDays,
    Letters,
    Digits,
    Symbols,
}

/// Every rule kind, in the order `validate` evaluates them.
///
/// The order is fixed: it does not depend on the order configuration
/// setters were called in.
pub const EVALUATION_ORDER: [RuleKind; RuleKind::COUNT] = [
    RuleKind::MinimalLength,
    RuleKind::MaximalLength,
    RuleKind::MinimumUppercaseCount,
    RuleKind::MinimumDigitCount,
    RuleKind::MinimumCrackDays,
    RuleKind::Letters,
    RuleKind::Digits,
    RuleKind::Symbols,
];

impl RuleKind {
    pub const COUNT: usize = 8;

    /// Stable rule name, as carried in failure records.
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::MinimalLength => "MinimalLength",
            RuleKind::MaximalLength => "MaximalLength",
            RuleKind::MinimumUppercaseCount => "MinimumUppercaseCount",
            RuleKind::MinimumDigitCount => "MinimumDigitCount",
            RuleKind::MinimumCrackDays => "MinimumCrackDays",
            RuleKind::Letters => "Letters",
            RuleKind::Digits => "Digits",
            RuleKind::Symbols => "Symbols",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One failed rule: what the rule required and what the password had.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleFailure {
    pub rule: RuleKind,
    pub expected: f64,
    pub actual: f64,
}

impl RuleFailure {
    pub(crate) fn new(rule: RuleKind, expected: f64, actual: f64) -> Self {
        Self {
            rule,
            expected,
            actual,
        }
    }
}

impl fmt::Display for RuleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, actual {}",
            self.rule, self.expected, self.actual
        )
    }
}

/// The set of currently active rules.
///
/// A rule is either active (evaluated on every `validate` call) or absent;
/// there is no disabled-but-remembered state. Re-enabling a rule
/// reconstructs its behavior from the configuration values current at
/// evaluation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    active: [bool; RuleKind::COUNT],
}

impl RuleSet {
    /// No rules active.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active(&mut self, rule: RuleKind, active: bool) {
        self.active[rule.index()] = active;
    }

    pub fn is_active(&self, rule: RuleKind) -> bool {
        self.active[rule.index()]
    }

    /// Active rules in evaluation order.
    pub fn active_rules(&self) -> impl Iterator<Item = RuleKind> + '_ {
        EVALUATION_ORDER
            .into_iter()
            .filter(|rule| self.is_active(*rule))
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }
}
