//! Scoring primitives shared by the standings calculator and the league engine.
//!
//! - [`aggregation`]: turning set scores into a per-side total and an outcome
//! - [`table`]: position-to-points scoring tables
//! - [`names`]: display-name normalization and ordering

pub mod aggregation;
pub mod names;
pub mod table;

pub use aggregation::{AggregationMode, MatchOutcome, Outcome, SetScore};
pub use names::{compare_names, normalize_name};
pub use table::{ScoringTable, ScoringTableError};

use thiserror::Error;

/// Error returned when a policy name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: '{value}' (expected one of: {expected})")]
pub struct ParsePolicyError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
