//! Tournament standings calculator.
//!
//! Converts a tournament's match results into a ranked table per group, for
//! either fixed-team or individual (rotating-partner) competition:
//! - Only completed matches with recorded sets count
//! - Partners on an individual-mode side each receive the full credit
//! - Rows sort by the configured primary key, then points, point difference,
//!   points for, and display name
//! - Final-position overrides (e.g. from a knockout bracket) take their slot
//!   ahead of the computed order
//!
//! ## Example
//!
//! ```
//! use courtside::scoring::SetScore;
//! use courtside::standings::{CompetitionMode, Entity, MatchResult, compute_standings};
//!
//! let entities = vec![Entity::player("p1", "Ana"), Entity::player("p2", "Bea")];
//! let matches = vec![MatchResult::completed(
//!     "m1",
//!     vec!["p1".into()],
//!     vec!["p2".into()],
//!     vec![SetScore(6, 4), SetScore(6, 3)],
//! )];
//!
//! let standings = compute_standings(&matches, &entities, CompetitionMode::Team).unwrap();
//! assert_eq!(standings.row("p1").unwrap().position, 1);
//! ```

pub mod calculator;
pub mod config;
pub mod errors;
pub mod history;
pub mod models;

pub use calculator::{GroupStandings, Standings, StandingsCalculator, compute_standings};
pub use config::{LoserPointPolicy, SortPrimaryKey, StandingsConfig};
pub use errors::{StandingsError, StandingsResult};
pub use history::{HistoryEntry, HistorySummary, match_history};
pub use models::{
    CompetitionMode, DEFAULT_GROUP, Entity, EntityId, MAX_SETS, MatchResult, MatchStatus,
    POINTS_FOR_DRAW, POINTS_FOR_WIN, StandingRow,
};
