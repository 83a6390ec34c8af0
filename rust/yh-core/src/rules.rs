//! The named rule table.
//!
//! Rule ids follow the score card top to bottom: upper section (ones..sixes),
//! then the lower section in the order players usually fill it in.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RulesConfig;
use crate::rule::ScoringRule;

pub const NUM_RULES: usize = 13;

/// Rule names in id order.
pub const RULE_NAMES: [&str; NUM_RULES] = [
    "ones",
    "twos",
    "threes",
    "fours",
    "fives",
    "sixes",
    "three_of_kind",
    "four_of_kind",
    "full_house",
    "small_straight",
    "large_straight",
    "yahtzee",
    "chance",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown rule `{0}`")]
pub struct UnknownRule(pub String);

/// Identifier of one named rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfKind,
    FourOfKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl RuleId {
    pub const ALL: [RuleId; NUM_RULES] = [
        RuleId::Ones,
        RuleId::Twos,
        RuleId::Threes,
        RuleId::Fours,
        RuleId::Fives,
        RuleId::Sixes,
        RuleId::ThreeOfKind,
        RuleId::FourOfKind,
        RuleId::FullHouse,
        RuleId::SmallStraight,
        RuleId::LargeStraight,
        RuleId::Yahtzee,
        RuleId::Chance,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        RULE_NAMES[self.index()]
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for RuleId {
    type Err = UnknownRule;

    /// Accepts the snake_case name (`three_of_kind`) or the camelCase one
    /// (`threeOfKind`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|&c| c != '_' && c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        RuleId::ALL
            .into_iter()
            .find(|id| id.name().replace('_', "") == folded)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

const fn borrowed(s: &'static str) -> Cow<'static, str> {
    Cow::Borrowed(s)
}

pub const ONES: ScoringRule = ScoringRule::TotalOneNumber {
    val: 1,
    description: borrowed("1 point per 1"),
};
pub const TWOS: ScoringRule = ScoringRule::TotalOneNumber {
    val: 2,
    description: borrowed("2 points per 2"),
};
pub const THREES: ScoringRule = ScoringRule::TotalOneNumber {
    val: 3,
    description: borrowed("3 points per 3"),
};
pub const FOURS: ScoringRule = ScoringRule::TotalOneNumber {
    val: 4,
    description: borrowed("4 points per 4"),
};
pub const FIVES: ScoringRule = ScoringRule::TotalOneNumber {
    val: 5,
    description: borrowed("5 points per 5"),
};
pub const SIXES: ScoringRule = ScoringRule::TotalOneNumber {
    val: 6,
    description: borrowed("6 points per 6"),
};
pub const THREE_OF_KIND: ScoringRule = ScoringRule::SumDistro {
    count: 3,
    description: borrowed("Sum all dice if 3 are the same"),
};
pub const FOUR_OF_KIND: ScoringRule = ScoringRule::SumDistro {
    count: 4,
    description: borrowed("Sum all dice if 4 are the same"),
};
pub const FULL_HOUSE: ScoringRule = ScoringRule::FullHouse {
    score: 25,
    description: borrowed("25 points for a full house"),
};
pub const SMALL_STRAIGHT: ScoringRule = ScoringRule::SmallStraight {
    score: 30,
    description: borrowed("30 points for a small straight"),
};
pub const LARGE_STRAIGHT: ScoringRule = ScoringRule::LargeStraight {
    score: 40,
    description: borrowed("40 points for a large straight"),
};
pub const YAHTZEE: ScoringRule = ScoringRule::Yahtzee {
    score: 50,
    description: borrowed("50 points for yahtzee"),
};
pub const CHANCE: ScoringRule = ScoringRule::SumDistro {
    count: 0,
    description: borrowed("Sum of all dice"),
};

/// One rule per [`RuleId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    rules: [ScoringRule; NUM_RULES],
}

static STANDARD: RuleSet = RuleSet {
    rules: [
        ONES,
        TWOS,
        THREES,
        FOURS,
        FIVES,
        SIXES,
        THREE_OF_KIND,
        FOUR_OF_KIND,
        FULL_HOUSE,
        SMALL_STRAIGHT,
        LARGE_STRAIGHT,
        YAHTZEE,
        CHANCE,
    ],
};

impl RuleSet {
    /// The standard Yahtzee payouts. Built at compile time, shared for the process lifetime.
    pub fn standard() -> &'static RuleSet {
        &STANDARD
    }

    /// Build a rule set from (already validated) config values.
    ///
    /// Upper-section rules are fixed; the of-a-kind thresholds and flat payouts
    /// come from `cfg`, and descriptions are rewritten to match.
    pub fn from_config(cfg: &RulesConfig) -> RuleSet {
        let owned = |s: String| -> Cow<'static, str> { Cow::Owned(s) };
        RuleSet {
            rules: [
                ONES,
                TWOS,
                THREES,
                FOURS,
                FIVES,
                SIXES,
                ScoringRule::SumDistro {
                    count: cfg.three_of_kind,
                    description: owned(format!(
                        "Sum all dice if {} are the same",
                        cfg.three_of_kind
                    )),
                },
                ScoringRule::SumDistro {
                    count: cfg.four_of_kind,
                    description: owned(format!(
                        "Sum all dice if {} are the same",
                        cfg.four_of_kind
                    )),
                },
                ScoringRule::FullHouse {
                    score: cfg.full_house,
                    description: owned(format!("{} points for a full house", cfg.full_house)),
                },
                ScoringRule::SmallStraight {
                    score: cfg.small_straight,
                    description: owned(format!(
                        "{} points for a small straight",
                        cfg.small_straight
                    )),
                },
                ScoringRule::LargeStraight {
                    score: cfg.large_straight,
                    description: owned(format!(
                        "{} points for a large straight",
                        cfg.large_straight
                    )),
                },
                ScoringRule::Yahtzee {
                    score: cfg.yahtzee,
                    description: owned(format!("{} points for yahtzee", cfg.yahtzee)),
                },
                CHANCE,
            ],
        }
    }

    pub fn get(&self, id: RuleId) -> &ScoringRule {
        &self.rules[id.index()]
    }

    /// Look a rule up by name (see [`RuleId::from_str`]).
    pub fn by_name(&self, name: &str) -> Result<(RuleId, &ScoringRule), UnknownRule> {
        let id: RuleId = name.parse()?;
        Ok((id, self.get(id)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (RuleId, &ScoringRule)> + '_ {
        RuleId::ALL.into_iter().zip(self.rules.iter())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        STANDARD.clone()
    }
}
