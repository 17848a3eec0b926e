//! # Courtside
//!
//! Standings and league scoring engine for amateur racquet-sport tournaments.
//!
//! Both components are pure functions over data the caller has already
//! fetched. They perform no I/O, keep no state between calls, and return
//! identical output for identical input.
//!
//! ## Core Modules
//!
//! - [`standings`]: per-group tournament standings from match results, for
//!   fixed teams or rotating-partner individual play
//! - [`league`]: league tables aggregated from per-tournament finishing
//!   positions, with category-specific scoring tables and filtering
//! - [`scoring`]: set aggregation, scoring tables, and name handling shared
//!   by both
//!
//! ## Example
//!
//! ```
//! use courtside::scoring::SetScore;
//! use courtside::standings::{CompetitionMode, Entity, MatchResult, StandingsCalculator, StandingsConfig};
//!
//! let entities = vec![Entity::player("p1", "Ana"), Entity::player("p2", "Bea")];
//! let matches = vec![MatchResult::completed(
//!     "m1",
//!     vec!["p1".into()],
//!     vec!["p2".into()],
//!     vec![SetScore(21, 17)],
//! )];
//!
//! let calculator = StandingsCalculator::new(StandingsConfig::group_stage());
//! let standings = calculator.compute(&matches, &entities, CompetitionMode::Individual).unwrap();
//! assert_eq!(standings.row("p1").unwrap().points, 2);
//! ```

/// Shared scoring primitives.
pub mod scoring;
pub use scoring::{AggregationMode, ScoringTable, SetScore};

/// Tournament standings calculation.
pub mod standings;
pub use standings::{
    CompetitionMode, Entity, MatchResult, StandingRow, Standings, StandingsCalculator,
    StandingsConfig, compute_standings,
};

/// League aggregation across tournaments.
pub mod league;
pub use league::{CategoryFilter, League, LeagueSnapshot, LeagueStanding, aggregate_league};
