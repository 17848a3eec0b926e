//! Position-to-points scoring tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Scoring table errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringTableError {
    /// Finishing positions are 1-based
    #[error("Scoring table maps position 0; positions start at 1")]
    ZeroPosition,
}

/// Points awarded per finishing position.
///
/// Positions with no entry award 0 points. Serialized as a JSON object keyed
/// by position, e.g. `{"1": 25, "2": 20, "3": 16}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoringTable(BTreeMap<u32, u32>);

impl ScoringTable {
    /// Create an empty table (every position awards 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dense table where the first value is awarded for 1st place,
    /// the second for 2nd place, and so on.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self(points.into_iter().zip(1..).map(|(pts, pos)| (pos, pts)).collect())
    }

    /// Create a table from explicit `(position, points)` pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ScoringTableError>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let table = Self(pairs.into_iter().collect());
        table.validate()?;
        Ok(table)
    }

    /// Points for a 1-indexed finishing position
    pub fn points_for(&self, position: u32) -> u32 {
        self.0.get(&position).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate the table.
    ///
    /// Deserialized tables skip construction checks, so callers holding a
    /// table from external data should validate before use.
    pub fn validate(&self) -> Result<(), ScoringTableError> {
        if self.0.contains_key(&0) {
            return Err(ScoringTableError::ZeroPosition);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_is_one_indexed() {
        let table = ScoringTable::from_points([25, 20, 16]);
        assert_eq!(table.points_for(1), 25);
        assert_eq!(table.points_for(2), 20);
        assert_eq!(table.points_for(3), 16);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_missing_position_awards_zero() {
        let table = ScoringTable::from_points([25, 20, 16]);
        assert_eq!(table.points_for(4), 0);
        assert_eq!(table.points_for(0), 0);
        assert_eq!(ScoringTable::new().points_for(1), 0);
    }

    #[test]
    fn test_sparse_table() {
        let table = ScoringTable::from_pairs([(1, 100), (5, 10)]).unwrap();
        assert_eq!(table.points_for(1), 100);
        assert_eq!(table.points_for(3), 0);
        assert_eq!(table.points_for(5), 10);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_zero_position_rejected() {
        let err = ScoringTable::from_pairs([(0, 5), (1, 10)]).unwrap_err();
        assert_eq!(err, ScoringTableError::ZeroPosition);
    }

    #[test]
    fn test_json_object_keyed_by_position() {
        let table: ScoringTable = serde_json::from_str(r#"{"1": 25, "2": 20, "3": 16}"#).unwrap();
        assert_eq!(table, ScoringTable::from_points([25, 20, 16]));

        let json = serde_json::to_string(&ScoringTable::from_points([10])).unwrap();
        assert_eq!(json, r#"{"1":10}"#);
    }

    #[test]
    fn test_deserialized_zero_position_fails_validation() {
        let table: ScoringTable = serde_json::from_str(r#"{"0": 3}"#).unwrap();
        assert!(table.validate().is_err());
    }
}
