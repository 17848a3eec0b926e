//! Set-equivalent aggregation of recorded set scores.

use super::ParsePolicyError;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, str::FromStr};

/// Points recorded for one set, as `(side1, side2)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetScore(pub u32, pub u32);

impl SetScore {
    /// The same set seen from side 2
    pub fn flipped(self) -> Self {
        SetScore(self.1, self.0)
    }
}

/// How set scores are folded into one comparable value per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMode {
    /// Sum of the raw points recorded in every set
    #[default]
    RawPointSum,
    /// One point for every set a side won outright
    SetsWon,
}

impl AggregationMode {
    /// Fold the recorded sets into `(side1_total, side2_total)`.
    ///
    /// A set with equal scores counts for neither side under [`AggregationMode::SetsWon`].
    pub fn side_totals(self, sets: &[SetScore]) -> (u32, u32) {
        match self {
            AggregationMode::RawPointSum => sets.iter().fold((0, 0), |(a, b), set| {
                (a.saturating_add(set.0), b.saturating_add(set.1))
            }),
            AggregationMode::SetsWon => sets.iter().fold((0, 0), |(a, b), set| {
                match set.0.cmp(&set.1) {
                    Ordering::Greater => (a + 1, b),
                    Ordering::Less => (a, b + 1),
                    Ordering::Equal => (a, b),
                }
            }),
        }
    }
}

impl std::fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationMode::RawPointSum => write!(f, "raw_point_sum"),
            AggregationMode::SetsWon => write!(f, "sets_won"),
        }
    }
}

impl FromStr for AggregationMode {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw_point_sum" | "points" => Ok(AggregationMode::RawPointSum),
            "sets_won" | "sets" => Ok(AggregationMode::SetsWon),
            _ => Err(ParsePolicyError {
                kind: "aggregation mode",
                value: s.to_string(),
                expected: "raw_point_sum, sets_won",
            }),
        }
    }
}

/// Result of a match from one side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

/// Result of a match as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOutcome {
    Side1,
    Side2,
    Draw,
}

impl MatchOutcome {
    /// Strictly greater total wins, equal totals draw
    pub fn from_totals(side1: u32, side2: u32) -> Self {
        match side1.cmp(&side2) {
            Ordering::Greater => MatchOutcome::Side1,
            Ordering::Less => MatchOutcome::Side2,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }

    pub fn for_side1(self) -> Outcome {
        match self {
            MatchOutcome::Side1 => Outcome::Win,
            MatchOutcome::Side2 => Outcome::Loss,
            MatchOutcome::Draw => Outcome::Draw,
        }
    }

    pub fn for_side2(self) -> Outcome {
        match self {
            MatchOutcome::Side1 => Outcome::Loss,
            MatchOutcome::Side2 => Outcome::Win,
            MatchOutcome::Draw => Outcome::Draw,
        }
    }
}
