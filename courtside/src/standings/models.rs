//! Match, entity, and standing-row data models.

use crate::scoring::{Outcome, SetScore};
use serde::{Deserialize, Serialize};

/// Player or team identifier
pub type EntityId = String;

/// Group assigned when a match or entity carries none
pub const DEFAULT_GROUP: &str = "General";

/// Most sets a single match can record
pub const MAX_SETS: usize = 3;

/// Competition points for a win
pub const POINTS_FOR_WIN: u32 = 2;

/// Competition points for a draw
pub const POINTS_FOR_DRAW: u32 = 1;

/// Match lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Completed,
}

/// Competition format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionMode {
    /// Fixed teams, one entity per side
    Team,
    /// Individual players with rotating partners, one or two entities per side
    Individual,
}

impl CompetitionMode {
    /// Maximum number of entities listed on one side of a match
    pub fn max_side_size(self) -> usize {
        match self {
            CompetitionMode::Team => 1,
            CompetitionMode::Individual => 2,
        }
    }
}

impl std::fmt::Display for CompetitionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompetitionMode::Team => write!(f, "team"),
            CompetitionMode::Individual => write!(f, "individual"),
        }
    }
}

/// One played or scheduled contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    /// Group the match was played in (`None` means [`DEFAULT_GROUP`])
    #[serde(default)]
    pub group_name: Option<String>,
    pub status: MatchStatus,
    pub side1: Vec<EntityId>,
    pub side2: Vec<EntityId>,
    /// Recorded sets in play order; unplayed sets are absent
    #[serde(default)]
    pub sets: Vec<SetScore>,
}

impl MatchResult {
    /// Create a scheduled match with no recorded sets
    pub fn scheduled(id: impl Into<String>, side1: Vec<EntityId>, side2: Vec<EntityId>) -> Self {
        Self {
            id: id.into(),
            group_name: None,
            status: MatchStatus::Scheduled,
            side1,
            side2,
            sets: Vec::new(),
        }
    }

    /// Create a completed match with the given set scores
    pub fn completed(
        id: impl Into<String>,
        side1: Vec<EntityId>,
        side2: Vec<EntityId>,
        sets: Vec<SetScore>,
    ) -> Self {
        Self {
            status: MatchStatus::Completed,
            sets,
            ..Self::scheduled(id, side1, side2)
        }
    }

    /// Set the group name
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group_name = Some(group.into());
        self
    }

    /// Group name, defaulting to [`DEFAULT_GROUP`]
    pub fn group(&self) -> &str {
        self.group_name.as_deref().unwrap_or(DEFAULT_GROUP)
    }

    /// Whether the match is completed and has at least one recorded set
    pub fn counts_toward_standings(&self) -> bool {
        self.status == MatchStatus::Completed && !self.sets.is_empty()
    }

    /// Whether `entity_id` is listed on either side
    pub fn involves(&self, entity_id: &str) -> bool {
        self.side1.iter().chain(&self.side2).any(|id| id == entity_id)
    }
}

/// A player or a team being ranked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub display_name: String,
    /// Standings group (`None` means [`DEFAULT_GROUP`])
    #[serde(default)]
    pub group_name: Option<String>,
    /// Stable account identifier linking registrations across tournaments
    #[serde(default)]
    pub account_id: Option<String>,
    /// The two players of a doubles team
    #[serde(default)]
    pub players: Option<[EntityId; 2]>,
    /// Externally assigned placement, e.g. from a knockout bracket
    #[serde(default)]
    pub final_position: Option<u32>,
}

impl Entity {
    /// Create an individual player
    pub fn player(id: impl Into<EntityId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            group_name: None,
            account_id: None,
            players: None,
            final_position: None,
        }
    }

    /// Create a doubles team owning two player references
    pub fn team(
        id: impl Into<EntityId>,
        display_name: impl Into<String>,
        player1: impl Into<EntityId>,
        player2: impl Into<EntityId>,
    ) -> Self {
        Self {
            players: Some([player1.into(), player2.into()]),
            ..Self::player(id, display_name)
        }
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group_name = Some(group.into());
        self
    }

    pub fn with_account(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn with_final_position(mut self, position: u32) -> Self {
        self.final_position = Some(position);
        self
    }

    /// Group name, defaulting to [`DEFAULT_GROUP`]
    pub fn group(&self) -> &str {
        self.group_name.as_deref().unwrap_or(DEFAULT_GROUP)
    }
}

/// One entity's accumulated record within a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub entity_id: EntityId,
    pub display_name: String,
    #[serde(default = "default_group")]
    pub group_name: String,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub points_for: u32,
    #[serde(default)]
    pub points_against: u32,
    /// Competition points
    #[serde(default)]
    pub points: u32,
    /// 1-based rank within the group; 0 until ranked
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub final_position: Option<u32>,
}

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

impl StandingRow {
    /// Create an empty row for an entity
    pub fn new(entity: &Entity) -> Self {
        Self {
            entity_id: entity.id.clone(),
            display_name: entity.display_name.clone(),
            group_name: entity.group().to_string(),
            account_id: entity.account_id.clone(),
            wins: 0,
            draws: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
            points: 0,
            position: 0,
            final_position: entity.final_position,
        }
    }

    /// `points_for - points_against`
    pub fn points_diff(&self) -> i64 {
        i64::from(self.points_for) - i64::from(self.points_against)
    }

    /// Number of matches credited to this row
    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// Credit one match to this row
    pub(crate) fn record(&mut self, score_for: u32, score_against: u32, outcome: Outcome, loss_points: u32) {
        self.points_for = self.points_for.saturating_add(score_for);
        self.points_against = self.points_against.saturating_add(score_against);
        match outcome {
            Outcome::Win => {
                self.wins += 1;
                self.points += POINTS_FOR_WIN;
            }
            Outcome::Draw => {
                self.draws += 1;
                self.points += POINTS_FOR_DRAW;
            }
            Outcome::Loss => {
                self.losses += 1;
                self.points += loss_points;
            }
        }
    }
}
