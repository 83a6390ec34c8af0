//! yh-core: Yahtzee scoring rules, hand validation, and the claim-once row lifecycle.
//!
//! ```
//! use yh_core::{RuleId, RuleSet};
//!
//! let rules = RuleSet::standard();
//! let score = rules.get(RuleId::FullHouse).evaluate(&[2, 2, 3, 3, 3]).unwrap();
//! assert_eq!(score, 25);
//! ```

pub mod claim;
pub mod config;
pub mod hand;
pub mod rule;
pub mod rules;

pub use claim::{ClaimError, ClaimOutcome, ClaimRow, ClaimSheet, ClaimState};
pub use config::{ConfigError, RulesConfig};
pub use hand::{FrequencyProfile, Hand, HandError, NUM_DICE, NUM_FACES};
pub use rule::{RuleKind, ScoringError, ScoringRule};
pub use rules::{RuleId, RuleSet, UnknownRule, NUM_RULES, RULE_NAMES};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
