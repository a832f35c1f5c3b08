use std::collections::HashSet;

use thiserror::Error;
use uuid::Uuid;

use crate::models::common::Scoreline;
use crate::models::matches::Match;
use crate::models::prediction::Prediction;

/// Upper bound on goals per side; anything above is a data-entry mistake
pub const MAX_GOALS_PER_SIDE: u32 = 99;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("round number must be at least 1, got {0}")]
    InvalidRound(u32),
    #[error("round {0} has no matches")]
    EmptyRound(u32),
    #[error("match {match_id} belongs to round {actual}, not round {expected}")]
    WrongRound {
        match_id: Uuid,
        expected: u32,
        actual: u32,
    },
    #[error("duplicate match id {0}")]
    DuplicateMatch(Uuid),
    #[error("prediction {0} references unknown match {1}")]
    UnknownMatch(Uuid, Uuid),
    #[error("user {user_id} has more than one prediction for match {match_id}")]
    DuplicatePrediction { user_id: Uuid, match_id: Uuid },
    #[error("scoreline {0} is out of range (max {MAX_GOALS_PER_SIDE} goals per side)")]
    ScorelineOutOfRange(Scoreline),
}

/// Precondition checks the scoring core assumes its callers have run.
/// The core itself never defends against malformed input.
pub struct PoolValidator;

impl PoolValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_scoreline(&self, score: Scoreline) -> Result<(), ValidationError> {
        if score.home > MAX_GOALS_PER_SIDE || score.away > MAX_GOALS_PER_SIDE {
            return Err(ValidationError::ScorelineOutOfRange(score));
        }
        Ok(())
    }

    /// Check that a fixture list forms a well-formed round
    pub fn validate_round_matches(
        &self,
        matches: &[Match],
        round: u32,
    ) -> Result<(), ValidationError> {
        if round == 0 {
            return Err(ValidationError::InvalidRound(round));
        }
        if matches.is_empty() {
            return Err(ValidationError::EmptyRound(round));
        }

        let mut seen = HashSet::new();
        for m in matches {
            if m.round != round {
                return Err(ValidationError::WrongRound {
                    match_id: m.id,
                    expected: round,
                    actual: m.round,
                });
            }
            if !seen.insert(m.id) {
                return Err(ValidationError::DuplicateMatch(m.id));
            }
            if let Some(result) = m.result {
                self.validate_scoreline(result)?;
            }
        }
        Ok(())
    }

    /// Check predictions against the matches they should refer to
    pub fn validate_predictions(
        &self,
        predictions: &[Prediction],
        matches: &[Match],
    ) -> Result<(), ValidationError> {
        let known: HashSet<Uuid> = matches.iter().map(|m| m.id).collect();

        let mut seen = HashSet::new();
        for p in predictions {
            if !known.contains(&p.match_id) {
                return Err(ValidationError::UnknownMatch(p.id, p.match_id));
            }
            if !seen.insert((p.user_id, p.match_id)) {
                return Err(ValidationError::DuplicatePrediction {
                    user_id: p.user_id,
                    match_id: p.match_id,
                });
            }
            self.validate_scoreline(p.score)?;
        }
        Ok(())
    }
}

impl Default for PoolValidator {
    fn default() -> Self {
        Self::new()
    }
}
