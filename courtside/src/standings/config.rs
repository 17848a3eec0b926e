//! Standings policy configuration.

use crate::scoring::{AggregationMode, ParsePolicyError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which counter ranks first within a group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPrimaryKey {
    /// Competition points, then point difference
    #[default]
    Points,
    /// Wins, then competition points
    Wins,
}

impl std::fmt::Display for SortPrimaryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortPrimaryKey::Points => write!(f, "points"),
            SortPrimaryKey::Wins => write!(f, "wins"),
        }
    }
}

impl FromStr for SortPrimaryKey {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "points" => Ok(SortPrimaryKey::Points),
            "wins" => Ok(SortPrimaryKey::Wins),
            _ => Err(ParsePolicyError {
                kind: "sort primary key",
                value: s.to_string(),
                expected: "points, wins",
            }),
        }
    }
}

/// Competition points awarded for a loss
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoserPointPolicy {
    /// Group-table rule
    #[default]
    Zero,
    /// Individual-dashboard rule (participation point)
    One,
}

impl LoserPointPolicy {
    pub fn points(self) -> u32 {
        match self {
            LoserPointPolicy::Zero => 0,
            LoserPointPolicy::One => 1,
        }
    }
}

impl std::fmt::Display for LoserPointPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoserPointPolicy::Zero => write!(f, "zero"),
            LoserPointPolicy::One => write!(f, "one"),
        }
    }
}

impl FromStr for LoserPointPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zero" | "0" => Ok(LoserPointPolicy::Zero),
            "one" | "1" => Ok(LoserPointPolicy::One),
            _ => Err(ParsePolicyError {
                kind: "loser point policy",
                value: s.to_string(),
                expected: "zero, one",
            }),
        }
    }
}

/// Standings calculation policies.
///
/// Different views of the same tournament rank with different policies; each
/// one is an explicit option here rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StandingsConfig {
    /// How set scores fold into one value per side
    #[serde(default)]
    pub aggregation: AggregationMode,
    /// Primary sort counter
    #[serde(default)]
    pub sort_primary: SortPrimaryKey,
    /// Competition points for a loss
    #[serde(default)]
    pub loser_points: LoserPointPolicy,
}

impl StandingsConfig {
    /// Tournament group table: raw point sums, points first, nothing for a loss
    pub fn group_stage() -> Self {
        Self {
            aggregation: AggregationMode::RawPointSum,
            sort_primary: SortPrimaryKey::Points,
            loser_points: LoserPointPolicy::Zero,
        }
    }

    /// Individual player dashboard: sets won, wins first, one point for a loss
    pub fn player_dashboard() -> Self {
        Self {
            aggregation: AggregationMode::SetsWon,
            sort_primary: SortPrimaryKey::Wins,
            loser_points: LoserPointPolicy::One,
        }
    }

    pub fn with_aggregation(mut self, aggregation: AggregationMode) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn with_sort_primary(mut self, sort_primary: SortPrimaryKey) -> Self {
        self.sort_primary = sort_primary;
        self
    }

    pub fn with_loser_points(mut self, loser_points: LoserPointPolicy) -> Self {
        self.loser_points = loser_points;
        self
    }
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self::group_stage()
    }
}
