//! Claim-once lifecycle for score-card rows.
//!
//! A row starts unclaimed and shows the rule description. The first claim
//! evaluates the rule against the current dice exactly once and freezes the
//! score; any later claim is a no-op that reports the frozen score.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::rule::{ScoringError, ScoringRule};
use crate::rules::{RuleId, RuleSet, UnknownRule};

/// Two-state row lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ClaimState {
    Unclaimed,
    Claimed { score: u32 },
}

/// Result of one claim attempt on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "score", rename_all = "snake_case")]
pub enum ClaimOutcome {
    /// The row was open; the rule was evaluated and the row is now closed.
    Claimed(u32),
    /// The row was already closed; nothing was evaluated.
    AlreadyClaimed(u32),
}

impl ClaimOutcome {
    pub fn score(self) -> u32 {
        match self {
            ClaimOutcome::Claimed(s) | ClaimOutcome::AlreadyClaimed(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRow {
    id: RuleId,
    rule: ScoringRule,
    state: ClaimState,
}

impl ClaimRow {
    pub fn new(id: RuleId, rule: ScoringRule) -> Self {
        Self {
            id,
            rule,
            state: ClaimState::Unclaimed,
        }
    }

    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn rule(&self) -> &ScoringRule {
        &self.rule
    }

    pub fn state(&self) -> ClaimState {
        self.state
    }

    pub fn is_claimed(&self) -> bool {
        matches!(self.state, ClaimState::Claimed { .. })
    }

    /// Claim the row with `dice`.
    ///
    /// An invalid hand leaves the row unclaimed.
    pub fn claim(&mut self, dice: &[u8]) -> Result<ClaimOutcome, ScoringError> {
        if let ClaimState::Claimed { score } = self.state {
            debug!(rule = %self.id, score, "row already claimed; ignoring");
            return Ok(ClaimOutcome::AlreadyClaimed(score));
        }
        let score = self.rule.evaluate(dice)?;
        self.state = ClaimState::Claimed { score };
        info!(rule = %self.id, ?dice, score, "row claimed");
        Ok(ClaimOutcome::Claimed(score))
    }

    /// What the row displays: the description while open, the score once claimed.
    pub fn label(&self) -> String {
        match self.state {
            ClaimState::Unclaimed => self.rule.description().to_string(),
            ClaimState::Claimed { score } => score.to_string(),
        }
    }
}

/// Claim failures at the sheet level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    #[error(transparent)]
    UnknownRule(#[from] UnknownRule),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// One game's worth of rows, one per named rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSheet {
    rows: Vec<ClaimRow>,
}

impl ClaimSheet {
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            rows: rules
                .iter()
                .map(|(id, rule)| ClaimRow::new(id, rule.clone()))
                .collect(),
        }
    }

    pub fn row(&self, id: RuleId) -> &ClaimRow {
        &self.rows[id.index()]
    }

    pub fn rows(&self) -> &[ClaimRow] {
        &self.rows
    }

    pub fn claim(&mut self, id: RuleId, dice: &[u8]) -> Result<ClaimOutcome, ScoringError> {
        self.rows[id.index()].claim(dice)
    }

    /// Claim by rule name (`"full_house"`, `"fullHouse"`, ...).
    pub fn claim_by_name(
        &mut self,
        name: &str,
        dice: &[u8],
    ) -> Result<(RuleId, ClaimOutcome), ClaimError> {
        let id: RuleId = name.parse()?;
        let outcome = self.claim(id, dice)?;
        Ok((id, outcome))
    }

    /// Rules that can still be claimed.
    pub fn open_rules(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.rows.iter().filter(|r| !r.is_claimed()).map(|r| r.id)
    }

    pub fn is_complete(&self) -> bool {
        self.rows.iter().all(ClaimRow::is_claimed)
    }
}

impl Default for ClaimSheet {
    fn default() -> Self {
        Self::new(RuleSet::standard())
    }
}
