//! Crack-time rule - the estimated brute-force time must meet the
//! configured minimum number of days.

use super::{RuleFailure, RuleKind, RuleOutcome};
use crate::config::PolicyConfig;
use crate::estimator::CrackTimeEstimator;

/// Fails when the estimator reports fewer days than configured.
///
/// The estimate itself is the collaborator's business; this rule only
/// compares it against the threshold.
pub(crate) fn minimum_crack_days(
    config: &PolicyConfig,
    estimator: &dyn CrackTimeEstimator,
    password: &str,
) -> RuleOutcome {
    let days = estimator.estimate_crack_days(password);
    if days < f64::from(config.minimum_crack_days()) {
        return Some(RuleFailure::new(
            RuleKind::MinimumCrackDays,
            f64::from(config.minimum_crack_days()),
            days,
        ));
    }
    None
}
