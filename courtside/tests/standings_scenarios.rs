//! Standings scenario tests.
//!
//! End-to-end checks of group standings for team and individual play,
//! across the standings policy variants.

use courtside::{
    scoring::{AggregationMode, SetScore},
    standings::{
        CompetitionMode, Entity, LoserPointPolicy, MatchResult, MatchStatus, SortPrimaryKey,
        StandingsCalculator, StandingsConfig, compute_standings,
    },
};

fn side(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn completed(id: &str, side1: &[&str], side2: &[&str], sets: &[(u32, u32)]) -> MatchResult {
    MatchResult::completed(
        id,
        side(side1),
        side(side2),
        sets.iter().map(|&(a, b)| SetScore(a, b)).collect(),
    )
}

#[test]
fn test_single_match_sets_won() {
    let entities = vec![Entity::player("p1", "Ana"), Entity::player("p2", "Bea")];
    let matches = vec![completed("m1", &["p1"], &["p2"], &[(6, 4), (6, 3)])];
    let calculator = StandingsCalculator::new(
        StandingsConfig::group_stage().with_aggregation(AggregationMode::SetsWon),
    );

    let standings = calculator
        .compute(&matches, &entities, CompetitionMode::Team)
        .unwrap();

    let winner = standings.row("p1").unwrap();
    assert_eq!(winner.wins, 1);
    assert_eq!(winner.points, 2);
    assert_eq!(winner.position, 1);

    let loser = standings.row("p2").unwrap();
    assert_eq!(loser.losses, 1);
    assert_eq!(loser.points, 0);
    assert_eq!(loser.position, 2);
}

#[test]
fn test_draw_on_equal_raw_point_sum() {
    let entities = vec![Entity::player("p1", "Zoe"), Entity::player("p2", "Ana")];
    // 21 points each across the sets
    let matches = vec![completed("m1", &["p1"], &["p2"], &[(11, 6), (10, 15)])];

    let standings = compute_standings(&matches, &entities, CompetitionMode::Team).unwrap();
    let zoe = standings.row("p1").unwrap();
    let ana = standings.row("p2").unwrap();

    assert_eq!((zoe.draws, zoe.points), (1, 1));
    assert_eq!((ana.draws, ana.points), (1, 1));
    assert_eq!(zoe.points_diff(), 0);
    assert_eq!(ana.points_diff(), 0);
    assert_eq!(zoe.points_for, ana.points_for);

    // everything else is equal, so the name decides
    assert_eq!(ana.position, 1);
    assert_eq!(zoe.position, 2);
}

#[test]
fn test_final_position_override_pushes_others_down() {
    let entities = vec![
        Entity::team("t1", "Aces", "a1", "a2"),
        Entity::team("t2", "Baseliners", "b1", "b2"),
        Entity::team("t3", "Cross Court", "c1", "c2"),
        Entity::team("t4", "Drop Shots", "d1", "d2"),
        Entity::team("t5", "Every Ball", "e1", "e2").with_final_position(2),
    ];
    let matches = vec![
        completed("m1", &["t1"], &["t5"], &[(6, 0), (6, 0)]),
        completed("m2", &["t2"], &["t5"], &[(6, 1), (6, 1)]),
        completed("m3", &["t3"], &["t5"], &[(6, 2), (6, 2)]),
        completed("m4", &["t4"], &["t5"], &[(6, 3), (6, 3)]),
        completed("m5", &["t1"], &["t4"], &[(6, 5), (6, 5)]),
    ];

    // Without the override "Every Ball" finishes last.
    let mut plain = entities.clone();
    plain[4].final_position = None;
    let computed = compute_standings(&matches, &plain, CompetitionMode::Team).unwrap();
    assert_eq!(computed.row("t5").unwrap().position, 5);

    let standings = compute_standings(&matches, &entities, CompetitionMode::Team).unwrap();
    let order: Vec<_> = standings
        .rows()
        .map(|r| (r.entity_id.as_str(), r.position))
        .collect();
    assert_eq!(
        order,
        vec![("t1", 1), ("t5", 2), ("t2", 3), ("t3", 4), ("t4", 5)]
    );
}

#[test]
fn test_rotating_partner_round() {
    // Four players, every pairing once.
    let entities: Vec<_> = ["ana", "bea", "cris", "dani"]
        .iter()
        .map(|id| Entity::player(*id, *id))
        .collect();
    let matches = vec![
        completed("r1", &["ana", "bea"], &["cris", "dani"], &[(21, 15)]),
        completed("r2", &["ana", "cris"], &["bea", "dani"], &[(21, 19)]),
        completed("r3", &["ana", "dani"], &["bea", "cris"], &[(18, 21)]),
    ];

    let standings = compute_standings(&matches, &entities, CompetitionMode::Individual).unwrap();
    let ana = standings.row("ana").unwrap();
    assert_eq!((ana.wins, ana.losses, ana.points), (2, 1, 4));
    assert_eq!((ana.points_for, ana.points_against), (60, 55));

    let dani = standings.row("dani").unwrap();
    assert_eq!((dani.wins, dani.losses), (0, 3));
    assert_eq!(dani.position, 4);

    let total_wins: u32 = standings.rows().map(|r| r.wins).sum();
    let total_losses: u32 = standings.rows().map(|r| r.losses).sum();
    assert_eq!(total_wins, total_losses);
}

#[test]
fn test_player_dashboard_preset() {
    let entities: Vec<_> = ["ana", "bea", "cris"]
        .iter()
        .map(|id| Entity::player(*id, *id))
        .collect();
    let matches = vec![
        completed("m1", &["ana"], &["bea"], &[(6, 4), (3, 6), (6, 4)]),
        completed("m2", &["bea"], &["cris"], &[(6, 0), (6, 0)]),
        completed("m3", &["cris"], &["ana"], &[(6, 4), (6, 4)]),
    ];
    let calculator = StandingsCalculator::new(StandingsConfig::player_dashboard());

    let standings = calculator
        .compute(&matches, &entities, CompetitionMode::Individual)
        .unwrap();

    // one win and one loss each: 2 + 1 points under the participation rule
    assert!(standings.rows().all(|r| r.wins == 1 && r.losses == 1 && r.points == 3));
    // sets: ana 2-3, bea 3-2, cris 2-2
    assert_eq!(standings.row("bea").unwrap().position, 1);
    assert_eq!(standings.row("cris").unwrap().position, 2);
    assert_eq!(standings.row("ana").unwrap().position, 3);
}

#[test]
fn test_policies_are_independent() {
    let entities = vec![Entity::player("a", "A"), Entity::player("b", "B")];
    let matches = vec![completed("m1", &["a"], &["b"], &[(6, 2)])];
    let config = StandingsConfig::group_stage()
        .with_sort_primary(SortPrimaryKey::Wins)
        .with_loser_points(LoserPointPolicy::One);

    let standings = StandingsCalculator::new(config)
        .compute(&matches, &entities, CompetitionMode::Team)
        .unwrap();
    assert_eq!(standings.row("a").unwrap().points_for, 6);
    assert_eq!(standings.row("b").unwrap().points, 1);
}

#[test]
fn test_scheduled_and_in_progress_matches_ignored() {
    let entities = vec![Entity::player("a", "A"), Entity::player("b", "B")];
    let mut live = completed("m1", &["a"], &["b"], &[(6, 2)]);
    live.status = MatchStatus::InProgress;
    let upcoming = MatchResult::scheduled("m2", side(&["a"]), side(&["b"]));

    let standings = compute_standings(&[live, upcoming], &entities, CompetitionMode::Team).unwrap();
    assert!(standings.rows().all(|r| r.played() == 0));
    // no results: name order
    assert_eq!(standings.row("a").unwrap().position, 1);
}

#[test]
fn test_malformed_results_skipped_others_still_count() {
    let entities: Vec<_> = ["ana", "bea", "cris", "dani", "eva"]
        .iter()
        .map(|id| Entity::player(*id, *id))
        .collect();
    let matches = vec![
        completed("r1", &["ana", "bea"], &["cris", "dani"], &[(6, 3)]),
        // three on one side in doubles
        completed("r2", &["ana", "bea", "eva"], &["cris"], &[(6, 0)]),
        // nobody on side two
        completed("r3", &["cris", "dani"], &[], &[(6, 0)]),
        // four sets
        completed("r4", &["ana", "cris"], &["bea", "dani"], &[(6, 1), (1, 6), (6, 1), (6, 1)]),
        completed("r5", &["bea", "cris"], &["ana", "dani"], &[(6, 4)]),
    ];

    let standings = compute_standings(&matches, &entities, CompetitionMode::Individual).unwrap();
    let record = |id: &str| {
        let row = standings.row(id).unwrap();
        (row.wins, row.losses)
    };
    assert_eq!(record("ana"), (1, 1));
    assert_eq!(record("bea"), (2, 0));
    assert_eq!(record("cris"), (1, 1));
    assert_eq!(record("dani"), (0, 2));
    assert_eq!(standings.row("eva").unwrap().played(), 0);
    assert_eq!(standings.row("bea").unwrap().position, 1);
}

#[test]
fn test_standings_json_round_trip_keeps_groups() {
    let entities = vec![
        Entity::player("a", "A").in_group("Group A"),
        Entity::player("b", "B").in_group("Group B"),
    ];
    let standings = compute_standings(&[], &entities, CompetitionMode::Team).unwrap();

    let json = serde_json::to_string(&standings).unwrap();
    let back: courtside::Standings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, standings);
    assert_eq!(back.groups().len(), 2);
}
