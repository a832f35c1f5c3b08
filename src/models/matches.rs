use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::common::Scoreline;

/// A fixture inside a round. `result` is `None` until the match has been
/// scored; an explicit 0-0 result is a different thing from no result.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub round: u32,
    pub home_team: String,
    pub away_team: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_closes_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Scoreline>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// "Home x Away" label used by prediction listings and exports
    pub fn fixture_label(&self) -> String {
        format!("{} x {}", self.home_team, self.away_team)
    }
}

/// A provisional live scoreline for a match. `score: None` means the
/// partial row exists but nothing was filled in yet; both that and a
/// missing row count as "no partial recorded".
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchPartial {
    pub match_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Scoreline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}
