//! Standings error types.

use super::models::EntityId;
use thiserror::Error;

/// Standings errors.
///
/// These signal caller bugs. Bad match data (unknown entities, missing or
/// extra set scores, sides the mode cannot hold) is skipped instead of
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StandingsError {
    /// The same entity id was supplied twice
    #[error("Duplicate entity id: {0}")]
    DuplicateEntity(EntityId),
}

impl StandingsError {
    /// Get a display-safe message without internal identifiers
    pub fn client_message(&self) -> String {
        match self {
            StandingsError::DuplicateEntity(_) => "Duplicate entity in standings input".to_string(),
        }
    }
}

/// Result type for standings operations
pub type StandingsResult<T> = Result<T, StandingsError>;
