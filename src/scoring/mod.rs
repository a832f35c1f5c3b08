use std::collections::HashSet;

use crate::models::common::{MatchOutcome, Scoreline};

// Per-match point values
pub const POINTS_CORRECT_RESULT: u32 = 9; // called the winner
pub const POINTS_CORRECT_DRAW: u32 = 12; // called a draw
pub const POINTS_CORRECT_HOME_GOALS: u32 = 3; // home goals on the nose
pub const POINTS_CORRECT_AWAY_GOALS: u32 = 3; // away goals on the nose
pub const POINTS_EXACT_SCORE: u32 = 3; // exact scoreline, ordinary match
pub const POINTS_EXACT_SCORE_HIGH: u32 = 10; // exact scoreline, 4+ goal match
pub const POINTS_TOTAL_GOALS_HIGH: u32 = 3; // total goals matched, 4+ goal match

// Round-level point values
pub const POINTS_ROUND_TOTAL_GOALS: u32 = 10; // round goal sum matched

/// A match counts as high-scoring from this many real goals on
pub const HIGH_SCORING_THRESHOLD: u32 = 4;

/// Points for one predicted scoreline against one real scoreline.
///
/// Every clause is additive; a single match can earn several bonuses at
/// once. An exact 4+ goal score earns both the exact-score bonus and the
/// total-goals bonus, since the totals match by definition.
pub fn match_points(prediction: Scoreline, result: Scoreline) -> u32 {
    let mut points = 0;

    // Correct outcome: a called draw pays 12, a called winner pays 9
    if prediction.outcome() == result.outcome() {
        points += if result.outcome() == MatchOutcome::Draw {
            POINTS_CORRECT_DRAW
        } else {
            POINTS_CORRECT_RESULT
        };
    }

    if prediction.home == result.home {
        points += POINTS_CORRECT_HOME_GOALS;
    }
    if prediction.away == result.away {
        points += POINTS_CORRECT_AWAY_GOALS;
    }

    let high_scoring = result.total_goals() >= HIGH_SCORING_THRESHOLD;
    if prediction == result {
        points += if high_scoring {
            POINTS_EXACT_SCORE_HIGH
        } else {
            POINTS_EXACT_SCORE
        };
    }

    if high_scoring && prediction.total_goals() == result.total_goals() {
        points += POINTS_TOTAL_GOALS_HIGH;
    }

    points
}

/// One participant's aggregate for a single round
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RoundTally {
    pub points: u32,
    pub exact_scores: u32,
    pub correct_results: u32,
}

/// Score a full round for one participant.
///
/// `predictions` and `results` must be the same length and aligned per
/// match; missing predictions are normalized to 0-0 by the caller.
pub fn round_points(predictions: &[Scoreline], results: &[Scoreline]) -> RoundTally {
    debug_assert_eq!(predictions.len(), results.len());

    let mut tally = RoundTally::default();
    let mut exact_score_types: HashSet<Scoreline> = HashSet::new();

    for (prediction, result) in predictions.iter().zip(results) {
        tally.points += match_points(*prediction, *result);

        if prediction == result {
            tally.exact_scores += 1;
            exact_score_types.insert(*result);
        }
        if prediction.outcome() == result.outcome() {
            tally.correct_results += 1;
        }
    }

    // Round goal sum: predicted total across the round vs the real one
    let predicted_total: u32 = predictions.iter().map(Scoreline::total_goals).sum();
    let real_total: u32 = results.iter().map(Scoreline::total_goals).sum();
    if predicted_total == real_total {
        tally.points += POINTS_ROUND_TOTAL_GOALS;
    }

    tally.points += score_type_bonus(exact_score_types.len());

    tally
}

/// Bonus for the number of *distinct* exact scorelines hit in one round,
/// capped at 4. A single type earns nothing; diversity starts paying at 2.
fn score_type_bonus(distinct_types: usize) -> u32 {
    match distinct_types.min(4) {
        0 | 1 => 0,
        2 => 10,
        3 => 20,
        _ => 30,
    }
}
