use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::common::Scoreline;
use crate::models::matches::Match;
use crate::models::prediction::Prediction;
use crate::models::user::User;
use crate::scoring::{match_points, round_points, RoundTally};

/// One fixture line of the report. Goals stay `None` for matches that
/// have no result yet; the consumer decides how to render absence.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchRow {
    pub round: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
}

/// One participant's guess for one resulted match, with the points it earned
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PredictionRow {
    pub round: u32,
    pub fixture: String,
    pub display_name: String,
    pub predicted_home: u32,
    pub predicted_away: u32,
    pub points: u32,
}

/// One per-round leaderboard line; `position` is 1-based
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StandingRow {
    pub round: u32,
    pub position: u32,
    pub display_name: String,
    pub points: u32,
    pub exact_scores: u32,
    pub correct_results: u32,
}

/// The flat tabular report: fixtures, guesses with per-match points, and
/// a per-round leaderboard. File encoding belongs to the consumer.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PoolReport {
    pub matches: Vec<MatchRow>,
    pub predictions: Vec<PredictionRow>,
    pub standings: Vec<StandingRow>,
}

/// Report restricted to a single round
pub fn build_round_report(
    users: &[User],
    matches: &[Match],
    predictions: &[Prediction],
    round: u32,
) -> PoolReport {
    build_report(users, matches, predictions, &[round])
}

/// Report covering every round present in `matches`, in increasing order
pub fn build_full_report(
    users: &[User],
    matches: &[Match],
    predictions: &[Prediction],
) -> PoolReport {
    let mut rounds: Vec<u32> = matches.iter().map(|m| m.round).collect();
    rounds.sort_unstable();
    rounds.dedup();
    build_report(users, matches, predictions, &rounds)
}

fn build_report(
    users: &[User],
    matches: &[Match],
    predictions: &[Prediction],
    rounds: &[u32],
) -> PoolReport {
    let guesses: HashMap<(Uuid, Uuid), Scoreline> = predictions
        .iter()
        .map(|p| ((p.user_id, p.match_id), p.score))
        .collect();

    let mut match_rows = Vec::new();
    let mut prediction_rows = Vec::new();
    let mut standing_rows = Vec::new();

    for &round in rounds {
        let fixtures: Vec<&Match> = matches.iter().filter(|m| m.round == round).collect();

        for m in &fixtures {
            match_rows.push(MatchRow {
                round,
                home_team: m.home_team.clone(),
                away_team: m.away_team.clone(),
                home_goals: m.result.map(|s| s.home),
                away_goals: m.result.map(|s| s.away),
            });
        }

        // Guess lines only exist for matches that already have a result
        for m in &fixtures {
            let Some(result) = m.result else { continue };
            for user in users {
                let predicted = guesses
                    .get(&(user.id, m.id))
                    .copied()
                    .unwrap_or_default();
                prediction_rows.push(PredictionRow {
                    round,
                    fixture: m.fixture_label(),
                    display_name: user.display_name.clone(),
                    predicted_home: predicted.home,
                    predicted_away: predicted.away,
                    points: match_points(predicted, result),
                });
            }
        }

        standing_rows.extend(round_standing_rows(users, &fixtures, &guesses, round));
    }

    tracing::info!(
        "Built report for {} round(s): {} matches, {} predictions, {} standings",
        rounds.len(),
        match_rows.len(),
        prediction_rows.len(),
        standing_rows.len()
    );

    PoolReport {
        matches: match_rows,
        predictions: prediction_rows,
        standings: standing_rows,
    }
}

/// Per-round leaderboard block. Emitted only when the round exists and
/// every match in it has a result; zero-point participants are dropped.
fn round_standing_rows(
    users: &[User],
    fixtures: &[&Match],
    guesses: &HashMap<(Uuid, Uuid), Scoreline>,
    round: u32,
) -> Vec<StandingRow> {
    if fixtures.is_empty() {
        return Vec::new();
    }
    let results: Option<Vec<Scoreline>> = fixtures.iter().map(|m| m.result).collect();
    let Some(results) = results else {
        return Vec::new();
    };

    let mut scored: Vec<(&User, RoundTally)> = users
        .iter()
        .map(|user| {
            let predicted: Vec<Scoreline> = fixtures
                .iter()
                .map(|m| guesses.get(&(user.id, m.id)).copied().unwrap_or_default())
                .collect();
            (user, round_points(&predicted, &results))
        })
        .collect();

    scored.sort_by(|(_, a), (_, b)| {
        (b.points, b.exact_scores, b.correct_results).cmp(&(
            a.points,
            a.exact_scores,
            a.correct_results,
        ))
    });

    scored
        .into_iter()
        .filter(|(_, tally)| tally.points > 0)
        .enumerate()
        .map(|(i, (user, tally))| StandingRow {
            round,
            position: i as u32 + 1,
            display_name: user.display_name.clone(),
            points: tally.points,
            exact_scores: tally.exact_scores,
            correct_results: tally.correct_results,
        })
        .collect()
}
