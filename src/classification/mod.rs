use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use crate::models::classification::{Classification, RoundWinner, UserStanding};
use crate::models::common::Scoreline;
use crate::models::matches::{Match, MatchPartial};
use crate::models::prediction::Prediction;
use crate::models::user::User;
use crate::scoring::{round_points, RoundTally};

/// Cumulative classification across rounds 1..=`up_to_round`.
///
/// `up_to_round: None` means "through the last round present in `matches`".
/// A round contributes only when every one of its matches has a result;
/// a round with any missing result is skipped whole, never partially
/// scored. Participants without a stored prediction for a match are
/// scored as an implicit 0-0.
pub fn classify(
    users: &[User],
    matches: &[Match],
    predictions: &[Prediction],
    up_to_round: Option<u32>,
) -> Classification {
    let last_round = matches.iter().map(|m| m.round).max().unwrap_or(0);
    let up_to = up_to_round.unwrap_or(last_round);

    let mut rounds: BTreeMap<u32, Vec<&Match>> = BTreeMap::new();
    for m in matches {
        if m.round >= 1 && m.round <= up_to {
            rounds.entry(m.round).or_default().push(m);
        }
    }

    let guesses = prediction_index(predictions);
    let mut standings: Vec<UserStanding> =
        users.iter().cloned().map(UserStanding::new).collect();
    let mut round_winners = Vec::new();

    for (round, fixtures) in &rounds {
        let results: Option<Vec<Scoreline>> = fixtures.iter().map(|m| m.result).collect();
        let Some(results) = results else {
            tracing::debug!("Skipping round {}: not every match has a result", round);
            continue;
        };

        let mut winner: Option<(usize, RoundTally)> = None;
        for (idx, user) in users.iter().enumerate() {
            let predicted = predicted_scorelines(user.id, fixtures, &guesses);
            let tally = round_points(&predicted, &results);

            standings[idx].total_points += tally.points;
            standings[idx].exact_scores += tally.exact_scores;
            standings[idx].correct_results += tally.correct_results;

            // Strictly-better keeps the earliest participant on a full tie
            if tally.points > 0 && winner.map_or(true, |(_, best)| beats(&tally, &best)) {
                winner = Some((idx, tally));
            }
        }

        if let Some((idx, tally)) = winner {
            standings[idx].rounds_won += 1;
            round_winners.push(RoundWinner {
                round: *round,
                user_id: users[idx].id,
            });
            tracing::info!(
                "Round {} won by {} with {} points",
                round,
                users[idx].username,
                tally.points
            );
        }
    }

    sort_standings(&mut standings);
    Classification {
        standings,
        round_winners,
    }
}

/// Ranking for a single round, from final results.
///
/// Matches without a result are still included with the result defaulted
/// to 0-0, so the round-level goal sums cover the whole fixture list. If
/// no match in the round has a result at all, every participant gets a
/// zeroed standing. `rounds_won` is not meaningful here and stays 0.
pub fn classify_round(
    users: &[User],
    matches: &[Match],
    predictions: &[Prediction],
    round: u32,
) -> Vec<UserStanding> {
    let fixtures: Vec<&Match> = matches.iter().filter(|m| m.round == round).collect();
    let mut standings: Vec<UserStanding> =
        users.iter().cloned().map(UserStanding::new).collect();

    if !fixtures.iter().any(|m| m.has_result()) {
        tracing::debug!("Round {} has no results yet", round);
        return standings;
    }

    let results: Vec<Scoreline> = fixtures
        .iter()
        .map(|m| m.result.unwrap_or_default())
        .collect();
    let guesses = prediction_index(predictions);

    for (idx, user) in users.iter().enumerate() {
        let predicted = predicted_scorelines(user.id, &fixtures, &guesses);
        let tally = round_points(&predicted, &results);
        standings[idx].total_points = tally.points;
        standings[idx].exact_scores = tally.exact_scores;
        standings[idx].correct_results = tally.correct_results;
    }

    sort_standings(&mut standings);
    standings
}

/// Ranking for a single round from provisional live scorelines.
///
/// The round is ranked only when every match in it has an explicit
/// partial recorded (0-0 counts); one missing partial excludes the round
/// from this view entirely and the result is empty.
pub fn classify_partials(
    users: &[User],
    matches: &[Match],
    partials: &[MatchPartial],
    predictions: &[Prediction],
    round: u32,
) -> Vec<UserStanding> {
    let fixtures: Vec<&Match> = matches.iter().filter(|m| m.round == round).collect();
    if fixtures.is_empty() {
        return Vec::new();
    }

    let recorded: HashMap<Uuid, Scoreline> = partials
        .iter()
        .filter_map(|p| p.score.map(|s| (p.match_id, s)))
        .collect();
    let results: Option<Vec<Scoreline>> = fixtures
        .iter()
        .map(|m| recorded.get(&m.id).copied())
        .collect();
    let Some(results) = results else {
        tracing::debug!("Round {} is missing partials, excluded from live view", round);
        return Vec::new();
    };

    let guesses = prediction_index(predictions);
    let mut standings: Vec<UserStanding> =
        users.iter().cloned().map(UserStanding::new).collect();

    for (idx, user) in users.iter().enumerate() {
        let predicted = predicted_scorelines(user.id, &fixtures, &guesses);
        let tally = round_points(&predicted, &results);
        standings[idx].total_points = tally.points;
        standings[idx].exact_scores = tally.exact_scores;
        standings[idx].correct_results = tally.correct_results;
    }

    sort_standings(&mut standings);
    standings
}

fn prediction_index(predictions: &[Prediction]) -> HashMap<(Uuid, Uuid), Scoreline> {
    predictions
        .iter()
        .map(|p| ((p.user_id, p.match_id), p.score))
        .collect()
}

/// One participant's scorelines aligned with `fixtures`; no stored
/// prediction becomes the implicit 0-0 guess
fn predicted_scorelines(
    user_id: Uuid,
    fixtures: &[&Match],
    guesses: &HashMap<(Uuid, Uuid), Scoreline>,
) -> Vec<Scoreline> {
    fixtures
        .iter()
        .map(|m| guesses.get(&(user_id, m.id)).copied().unwrap_or_default())
        .collect()
}

/// Round-winner tie-break: points, then exact scores, then correct results
fn beats(challenger: &RoundTally, incumbent: &RoundTally) -> bool {
    (
        challenger.points,
        challenger.exact_scores,
        challenger.correct_results,
    ) > (
        incumbent.points,
        incumbent.exact_scores,
        incumbent.correct_results,
    )
}

/// Stable descending sort on the four-key leaderboard order; participants
/// equal on all four keys keep their input order
fn sort_standings(standings: &mut [UserStanding]) {
    standings.sort_by(|a, b| rank_key(b).cmp(&rank_key(a)));
}

fn rank_key(s: &UserStanding) -> (u32, u32, u32, u32) {
    (
        s.total_points,
        s.exact_scores,
        s.correct_results,
        s.rounds_won,
    )
}
