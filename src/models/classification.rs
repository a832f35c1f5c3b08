use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::User;

/// A participant's accumulated stats, as shown on the leaderboard.
/// All counters are folded in round-number order and never decremented.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserStanding {
    #[serde(flatten)]
    pub user: User,
    pub total_points: u32,
    pub exact_scores: u32,
    pub correct_results: u32,
    pub rounds_won: u32,
}

impl UserStanding {
    /// Zeroed standing for a participant, the starting point of every fold
    pub fn new(user: User) -> Self {
        Self {
            user,
            total_points: 0,
            exact_scores: 0,
            correct_results: 0,
            rounds_won: 0,
        }
    }
}

/// The sole winner of a round, when one exists
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RoundWinner {
    pub round: u32,
    pub user_id: Uuid,
}

/// Cumulative classification output: ranked standings plus the winner of
/// every round that produced one.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Classification {
    pub standings: Vec<UserStanding>,
    pub round_winners: Vec<RoundWinner>,
}
