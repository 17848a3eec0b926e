use chrono::NaiveDate;
use courtside::{
    league::{League, aggregate_league},
    scoring::{ScoringTable, SetScore},
    standings::{
        CompetitionMode, Entity, MatchResult, StandingRow, StandingsCalculator, StandingsConfig,
    },
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::{
    collections::{BTreeMap, HashMap},
    hint::black_box,
};

/// Helper to create a full round robin in one group of `n_entities`
fn setup_round_robin(n_entities: usize) -> (Vec<Entity>, Vec<MatchResult>) {
    let entities: Vec<Entity> = (0..n_entities)
        .map(|i| Entity::player(format!("p{i}"), format!("Player {i}")))
        .collect();

    let mut matches = Vec::new();
    for i in 0..n_entities {
        for j in i + 1..n_entities {
            // deterministic but varied scores
            let a = ((i * 7 + j * 3) % 11) as u32 + 5;
            let b = ((i * 5 + j * 11) % 13) as u32 + 4;
            matches.push(MatchResult::completed(
                format!("m{i}-{j}"),
                vec![entities[i].id.clone()],
                vec![entities[j].id.clone()],
                vec![SetScore(a, b), SetScore(b, a + 1)],
            ));
        }
    }

    (entities, matches)
}

/// Helper to create a season of tournaments, each finishing in a rotated order
fn setup_season(n_tournaments: usize, n_entities: usize) -> BTreeMap<String, Vec<StandingRow>> {
    (0..n_tournaments)
        .map(|t| {
            let rows = (0..n_entities)
                .map(|i| {
                    let id = format!("p{}", (i + t) % n_entities);
                    let mut row = StandingRow::new(&Entity::player(id.clone(), id));
                    row.position = i as u32 + 1;
                    row
                })
                .collect();
            (format!("t{t}"), rows)
        })
        .collect()
}

/// Benchmark group standings over round robins of increasing size
fn bench_round_robin_standings(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_robin_standings");

    for n_entities in [4, 8, 16, 32] {
        let (entities, matches) = setup_round_robin(n_entities);
        let calculator = StandingsCalculator::new(StandingsConfig::group_stage());

        group.bench_with_input(BenchmarkId::from_parameter(n_entities), &n_entities, |b, _| {
            b.iter(|| {
                calculator
                    .compute(black_box(&matches), black_box(&entities), CompetitionMode::Team)
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark league aggregation over a growing number of tournaments
fn bench_league_aggregation(c: &mut Criterion) {
    let league = League::new(
        "bench",
        "Bench League",
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        ScoringTable::from_points([25, 20, 16, 13, 11, 10, 9, 8]),
    );
    let categories = HashMap::new();
    let mut group = c.benchmark_group("league_aggregation");

    for n_tournaments in [1, 10, 50] {
        let season = setup_season(n_tournaments, 32);

        group.bench_with_input(
            BenchmarkId::from_parameter(n_tournaments),
            &n_tournaments,
            |b, _| {
                b.iter(|| aggregate_league(black_box(&league), black_box(&season), &categories));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_round_robin_standings, bench_league_aggregation);
criterion_main!(benches);
