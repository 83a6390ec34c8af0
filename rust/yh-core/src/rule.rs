//! Scoring rules: one enum variant per scoring policy.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hand::{Hand, HandError};

/// Raised by [`ScoringRule::evaluate`] when the dice do not form a valid hand.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Face sets (bit `face - 1`) of the three runs of four consecutive faces.
const RUNS_OF_FOUR: [u8; 3] = [0b00_1111, 0b01_1110, 0b11_1100];

/// A named scoring policy.
///
/// Parameters are fixed at construction; [`score`](Self::score) is a pure
/// function of the rule and the hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringRule {
    /// `val * count_of(val)`.
    TotalOneNumber {
        val: u8,
        description: Cow<'static, str>,
    },
    /// Sum of all dice if some face occurs at least `count` times.
    /// `count = 0` always qualifies.
    SumDistro {
        count: u8,
        description: Cow<'static, str>,
    },
    /// Flat `score` for three of one face and two of another.
    FullHouse {
        score: u32,
        description: Cow<'static, str>,
    },
    /// Flat `score` for four consecutive faces.
    SmallStraight {
        score: u32,
        description: Cow<'static, str>,
    },
    /// Flat `score` for five consecutive faces.
    LargeStraight {
        score: u32,
        description: Cow<'static, str>,
    },
    /// Flat `score` for five of a kind.
    Yahtzee {
        score: u32,
        description: Cow<'static, str>,
    },
}

/// Discriminant of [`ScoringRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    TotalOneNumber,
    SumDistro,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
}

impl RuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::TotalOneNumber => "total_one_number",
            RuleKind::SumDistro => "sum_distro",
            RuleKind::FullHouse => "full_house",
            RuleKind::SmallStraight => "small_straight",
            RuleKind::LargeStraight => "large_straight",
            RuleKind::Yahtzee => "yahtzee",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl ScoringRule {
    pub fn kind(&self) -> RuleKind {
        match self {
            ScoringRule::TotalOneNumber { .. } => RuleKind::TotalOneNumber,
            ScoringRule::SumDistro { .. } => RuleKind::SumDistro,
            ScoringRule::FullHouse { .. } => RuleKind::FullHouse,
            ScoringRule::SmallStraight { .. } => RuleKind::SmallStraight,
            ScoringRule::LargeStraight { .. } => RuleKind::LargeStraight,
            ScoringRule::Yahtzee { .. } => RuleKind::Yahtzee,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ScoringRule::TotalOneNumber { description, .. }
            | ScoringRule::SumDistro { description, .. }
            | ScoringRule::FullHouse { description, .. }
            | ScoringRule::SmallStraight { description, .. }
            | ScoringRule::LargeStraight { description, .. }
            | ScoringRule::Yahtzee { description, .. } => description.as_ref(),
        }
    }

    /// Largest score this rule can award for any valid hand.
    pub fn max_score(&self) -> u32 {
        match *self {
            ScoringRule::TotalOneNumber { val, .. } => u32::from(val) * 5,
            // Five sixes qualify for any threshold up to 5.
            ScoringRule::SumDistro { count, .. } => {
                if count <= 5 {
                    30
                } else {
                    0
                }
            }
            ScoringRule::FullHouse { score, .. }
            | ScoringRule::SmallStraight { score, .. }
            | ScoringRule::LargeStraight { score, .. }
            | ScoringRule::Yahtzee { score, .. } => score,
        }
    }

    /// Validate `dice` and score it.
    ///
    /// Malformed input is reported as [`ScoringError::InvalidHand`], never as
    /// a zero score.
    pub fn evaluate(&self, dice: &[u8]) -> Result<u32, ScoringError> {
        let hand = Hand::new(dice)?;
        Ok(self.score(&hand))
    }

    /// Score an already validated hand. Returns 0 when the pattern does not match.
    pub fn score(&self, hand: &Hand) -> u32 {
        match *self {
            ScoringRule::TotalOneNumber { val, .. } => {
                u32::from(val) * u32::from(hand.count_of(val))
            }
            ScoringRule::SumDistro { count, .. } => {
                if hand.frequency_profile().max_count() >= count {
                    hand.sum()
                } else {
                    0
                }
            }
            ScoringRule::FullHouse { score, .. } => {
                let profile = hand.frequency_profile();
                // Both sub-predicates are checked on their own; with five dice
                // they can only hold together for a 3+2 split.
                let has_three = profile.contains_count(3);
                let has_two = profile.contains_count(2);
                if has_three && has_two {
                    score
                } else {
                    0
                }
            }
            ScoringRule::SmallStraight { score, .. } => {
                if has_run_of_four(hand.face_mask()) {
                    score
                } else {
                    0
                }
            }
            ScoringRule::LargeStraight { score, .. } => {
                let mask = hand.face_mask();
                let no_one = mask & 0b00_0001 == 0;
                let no_six = mask & 0b10_0000 == 0;
                if hand.distinct_faces() == 5 && (no_one || no_six) {
                    score
                } else {
                    0
                }
            }
            ScoringRule::Yahtzee { score, .. } => {
                if hand.frequency_profile().counts().next() == Some(5) {
                    score
                } else {
                    0
                }
            }
        }
    }
}

/// True if the face set contains 1-2-3-4, 2-3-4-5 or 3-4-5-6.
///
/// With exactly four faces this is the same as "both faces of one of the
/// pairs {1,2}, {1,6}, {5,6} are missing".
fn has_run_of_four(face_mask: u8) -> bool {
    RUNS_OF_FOUR.iter().any(|&run| face_mask & run == run)
}

