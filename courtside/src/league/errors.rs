//! League error types.

use super::models::Category;
use crate::scoring::ScoringTableError;
use chrono::NaiveDate;
use thiserror::Error;

/// League definition errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    /// League ends before it starts
    #[error("League date range is inverted: {start} to {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// A category scoring table names a category the league does not declare
    #[error("Scoring table defined for undeclared category: {0}")]
    UnknownCategory(Category),

    /// A scoring table is malformed
    #[error("Invalid scoring table: {0}")]
    ScoringTable(#[from] ScoringTableError),
}

impl LeagueError {
    /// Get a display-safe message without internal identifiers
    pub fn client_message(&self) -> String {
        match self {
            LeagueError::InvalidDateRange { .. } => "League ends before it starts".to_string(),
            LeagueError::UnknownCategory(_) | LeagueError::ScoringTable(_) => self.to_string(),
        }
    }
}

/// Result type for league operations
pub type LeagueResult<T> = Result<T, LeagueError>;
