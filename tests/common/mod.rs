#![allow(dead_code)]

use chrono::Utc;
use uuid::Uuid;

use bolao_engine::models::common::Scoreline;
use bolao_engine::models::matches::{Match, MatchPartial};
use bolao_engine::models::prediction::Prediction;
use bolao_engine::models::user::User;

pub fn user(display_name: &str) -> User {
    User {
        id: Uuid::new_v4(),
        username: display_name.to_lowercase().replace(' ', "_"),
        display_name: display_name.to_string(),
        favorite_team: None,
        is_admin: false,
        amount_paid: 0.0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn finished_match(round: u32, home_team: &str, away_team: &str, result: (u32, u32)) -> Match {
    Match {
        result: Some(result.into()),
        ..scheduled_match(round, home_team, away_team)
    }
}

pub fn scheduled_match(round: u32, home_team: &str, away_team: &str) -> Match {
    Match {
        id: Uuid::new_v4(),
        round,
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        market_closes_at: None,
        result: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn prediction(user: &User, game: &Match, home: u32, away: u32) -> Prediction {
    Prediction {
        id: Uuid::new_v4(),
        user_id: user.id,
        match_id: game.id,
        score: Scoreline::new(home, away),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn partial(game: &Match, score: Option<(u32, u32)>) -> MatchPartial {
    MatchPartial {
        match_id: game.id,
        score: score.map(Into::into),
        updated_by: None,
        updated_at: Utc::now(),
    }
}
