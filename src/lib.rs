//! Configurable password-acceptance engine
//!
//! This library evaluates candidate passwords against a set of declared
//! rules (length bounds, allowed character classes, minimum uppercase and
//! digit counts, minimum estimated crack-time). Rules are enabled and
//! disabled by configuration setters; `validate` reports a single verdict
//! plus a structured list of which rules failed and by how much.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_LEXICON_DIR`: Directory holding the optional word list files
//!   `words.txt`, `names.txt` and `passwords.txt` (default: `./assets`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::PasswordPolicy;
//! use secrecy::SecretString;
//!
//! let mut policy = PasswordPolicy::new();
//! policy.apply_default_policy("user").expect("known policy name");
//!
//! let password = SecretString::new("AbrakaDabra123".to_string().into());
//! if !policy.validate(&password) {
//!     for failure in policy.failures() {
//!         println!("{failure}");
//!     }
//! }
//! ```

// Internal modules
mod classify;
mod config;
mod estimator;
mod lexicon;
mod policy;
mod rules;

// Public API
pub use classify::{
    classify, count_members, Classification, DIGITS, LETTERS, LOWER_LETTERS, SYMBOLS,
    UPPER_LETTERS,
};
pub use config::PolicyConfig;
pub use estimator::{BruteForceEstimator, CrackTimeEstimator};
pub use lexicon::{lexicon_dir, Lexicon, LexiconError, PrefixIndex, PREFIX_LENGTH};
pub use policy::{PasswordPolicy, PolicyError, SIP_POLICY_SYMBOLS, USER_POLICY_SYMBOLS};
pub use rules::{RuleFailure, RuleKind, RuleSet, EVALUATION_ORDER};
