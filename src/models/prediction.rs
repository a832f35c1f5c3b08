use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::common::Scoreline;

/// A participant's submitted scoreline for one match. A participant with
/// no stored prediction is scored as an implicit 0-0; that default is
/// applied by the classification layer, never stored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Prediction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub match_id: Uuid,
    pub score: Scoreline,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
