use bolao_engine::export::{build_full_report, build_round_report, PoolReport};

mod common;
use common::{finished_match, prediction, scheduled_match, user};

#[test]
fn full_report_covers_all_rounds_in_order() {
    let alice = user("Alice");
    let bob = user("Bob");
    let users = [alice.clone(), bob.clone()];

    let m1 = finished_match(1, "Flamengo", "Palmeiras", (1, 0));
    let m2 = finished_match(1, "Santos", "Gremio", (2, 2));
    let m3 = finished_match(2, "Bahia", "Cruzeiro", (0, 1));
    let m4 = scheduled_match(2, "Fortaleza", "Internacional");
    // Listed out of round order on purpose
    let matches = [m3.clone(), m4.clone(), m1.clone(), m2.clone()];

    let predictions = [
        prediction(&alice, &m1, 1, 0),
        prediction(&alice, &m2, 1, 1),
        prediction(&alice, &m3, 0, 1),
        prediction(&bob, &m1, 0, 2),
    ];

    let report = build_full_report(&users, &matches, &predictions);

    // Fixture rows come back grouped by round, ascending
    assert_eq!(report.matches.len(), 4);
    assert_eq!(report.matches[0].round, 1);
    assert_eq!(report.matches[0].home_team, "Flamengo");
    assert_eq!(report.matches[3].round, 2);
    assert_eq!(report.matches[3].home_team, "Fortaleza");
    assert_eq!(report.matches[3].home_goals, None);
    assert_eq!(report.matches[3].away_goals, None);

    // Guess rows only for the three resulted matches, one per user each
    assert_eq!(report.predictions.len(), 3 * users.len());
    let alice_m1 = report
        .predictions
        .iter()
        .find(|row| row.display_name == "Alice" && row.fixture == "Flamengo x Palmeiras")
        .unwrap();
    assert_eq!(alice_m1.points, 18);
    // Bob never predicted m2: the implicit 0-0 guess is exported
    let bob_m2 = report
        .predictions
        .iter()
        .find(|row| row.display_name == "Bob" && row.fixture == "Santos x Gremio")
        .unwrap();
    assert_eq!((bob_m2.predicted_home, bob_m2.predicted_away), (0, 0));

    // Standings only for round 1 (round 2 is not fully resulted)
    assert!(report.standings.iter().all(|row| row.round == 1));
}

#[test]
fn standings_rows_drop_zero_point_participants() {
    let alice = user("Alice");
    let bob = user("Bob");
    let users = [alice.clone(), bob.clone()];

    let m1 = finished_match(1, "Flamengo", "Palmeiras", (2, 1));
    let matches = [m1.clone()];
    // Alice scores, Bob misses everything (goal sums differ too)
    let predictions = [
        prediction(&alice, &m1, 2, 1),
        prediction(&bob, &m1, 0, 4),
    ];

    let report = build_round_report(&users, &matches, &predictions, 1);
    assert_eq!(report.standings.len(), 1);
    assert_eq!(report.standings[0].display_name, "Alice");
    assert_eq!(report.standings[0].position, 1);
    // 18 exact + 10 round goals
    assert_eq!(report.standings[0].points, 28);
}

#[test]
fn round_report_is_restricted_to_one_round() {
    let alice = user("Alice");
    let users = [alice.clone()];

    let m1 = finished_match(1, "Flamengo", "Palmeiras", (1, 0));
    let m2 = finished_match(2, "Santos", "Gremio", (0, 0));
    let matches = [m1.clone(), m2.clone()];
    let predictions = [prediction(&alice, &m2, 0, 0)];

    let report = build_round_report(&users, &matches, &predictions, 2);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].home_team, "Santos");
    assert_eq!(report.predictions.len(), 1);
    // Exact 0-0 plus the round goal-sum bonus
    assert_eq!(report.standings.len(), 1);
    assert_eq!(report.standings[0].points, 31);
}

#[test]
fn report_rows_survive_a_json_round_trip() {
    let alice = user("Alice");
    let users = [alice.clone()];
    let m1 = finished_match(1, "Flamengo", "Palmeiras", (1, 0));
    let matches = [m1.clone()];
    let predictions = [prediction(&alice, &m1, 1, 0)];

    let report = build_round_report(&users, &matches, &predictions, 1);
    let json = serde_json::to_string(&report).unwrap();
    let decoded: PoolReport = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.matches.len(), report.matches.len());
    assert_eq!(decoded.standings[0].points, report.standings[0].points);
}
