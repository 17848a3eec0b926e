//! League aggregation engine.
//!
//! Turns finishing positions from many tournaments into a league table:
//! - Each finish is scored with the league's position-to-points table, or
//!   the entity's category table when the league defines one
//! - Rows from different tournaments are linked by account id, falling back
//!   to normalized display names
//! - The table sorts by total points, then best finishing position
//! - Category filtering is a post-filter that only removes and renumbers rows
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use courtside::league::{League, aggregate_league};
//! use courtside::scoring::ScoringTable;
//! use courtside::standings::{Entity, StandingRow};
//! use std::collections::{BTreeMap, HashMap};
//!
//! let league = League::new(
//!     "spring",
//!     "Spring League",
//!     NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
//!     ScoringTable::from_points([25, 20, 16]),
//! );
//!
//! let mut winner = StandingRow::new(&Entity::player("p1", "Ana"));
//! winner.position = 1;
//! let standings = BTreeMap::from([("open-1".to_string(), vec![winner])]);
//!
//! let table = aggregate_league(&league, &standings, &HashMap::new());
//! assert_eq!(table[0].total_points, 25);
//! ```

pub mod aggregator;
pub mod errors;
pub mod identity;
pub mod models;
pub mod snapshot;

pub use aggregator::{aggregate_league, filter_by_category};
pub use errors::{LeagueError, LeagueResult};
pub use identity::{IdentityResolver, Resolution};
pub use models::{Category, CategoryFilter, League, LeagueStanding, TournamentId};
pub use snapshot::LeagueSnapshot;
