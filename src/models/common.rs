use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A (home goals, away goals) pair. Used both for real results and for
/// predictions; a transient value with no identity of its own.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Scoreline {
    pub home: u32,
    pub away: u32,
}

impl Scoreline {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Classify the scoreline from the home side's point of view
    pub fn outcome(&self) -> MatchOutcome {
        if self.home > self.away {
            MatchOutcome::HomeWin
        } else if self.away > self.home {
            MatchOutcome::AwayWin
        } else {
            MatchOutcome::Draw
        }
    }

    pub fn total_goals(&self) -> u32 {
        self.home + self.away
    }
}

impl Display for Scoreline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

impl From<(u32, u32)> for Scoreline {
    fn from((home, away): (u32, u32)) -> Self {
        Self { home, away }
    }
}

/// Common match outcome enum used across scoring and classification
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
