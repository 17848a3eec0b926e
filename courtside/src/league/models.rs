//! League definition and league table models.

use super::errors::{LeagueError, LeagueResult};
use crate::scoring::{ParsePolicyError, ScoringTable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, str::FromStr};

/// Tournament identifier
pub type TournamentId = String;

/// Skill-category label, e.g. "M3" or "F2"
pub type Category = String;

/// A named competition spanning several tournaments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Default position-to-points table
    pub scoring_system: ScoringTable,
    /// Declared skill categories; empty when the league is not split
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Per-category tables overriding [`League::scoring_system`]
    #[serde(default)]
    pub category_scoring_systems: BTreeMap<Category, ScoringTable>,
}

impl League {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        scoring_system: ScoringTable,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_date,
            end_date,
            scoring_system,
            categories: Vec::new(),
            category_scoring_systems: BTreeMap::new(),
        }
    }

    /// Declare a category, optionally with its own scoring table
    pub fn with_category(mut self, category: impl Into<Category>, table: Option<ScoringTable>) -> Self {
        let category = category.into();
        if let Some(table) = table {
            self.category_scoring_systems.insert(category.clone(), table);
        }
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
        self
    }

    /// Whether a tournament held on `date` falls inside the league (inclusive)
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Scoring table for an entity in `category`.
    ///
    /// Falls back to the default table when the entity has no category, the
    /// league does not declare that category, or the category has no table
    /// of its own.
    pub fn table_for(&self, category: Option<&str>) -> &ScoringTable {
        let Some(c) = category else {
            return &self.scoring_system;
        };
        if !self.categories.iter().any(|declared| declared == c) {
            return &self.scoring_system;
        }
        match self.category_scoring_systems.get(c) {
            Some(table) => table,
            None => {
                log::debug!("League {}: no table for category {}, using default", self.id, c);
                &self.scoring_system
            }
        }
    }

    /// Validate the league definition
    ///
    /// # Errors
    ///
    /// Returns an error for an inverted date range, a malformed scoring
    /// table, or a category table keyed by an undeclared category.
    pub fn validate(&self) -> LeagueResult<()> {
        if self.end_date < self.start_date {
            return Err(LeagueError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        self.scoring_system.validate()?;
        for (category, table) in &self.category_scoring_systems {
            if !self.categories.contains(category) {
                return Err(LeagueError::UnknownCategory(category.clone()));
            }
            table.validate()?;
        }

        Ok(())
    }
}

/// One entity's cross-tournament record in a league
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueStanding {
    /// 1-based rank in the table it was returned in
    pub position: u32,
    pub entity_name: String,
    #[serde(default)]
    pub account_id: Option<String>,
    pub total_points: u32,
    /// Tournaments with at least one row for this entity
    pub tournaments_played: u32,
    /// Best finishing position across those tournaments
    pub best_position: u32,
    #[serde(default)]
    pub player_category: Option<Category>,
}

/// Category post-filter for a league table
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Keep every row
    #[default]
    All,
    /// Keep only rows with no category
    Uncategorized,
    /// Keep only rows in this category
    Category(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Uncategorized => category.is_none(),
            CategoryFilter::Category(wanted) => category == Some(wanted.as_str()),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Uncategorized => write!(f, "none"),
            CategoryFilter::Category(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParsePolicyError;

    /// `all` and `none` are reserved; anything else names a category
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Err(ParsePolicyError {
                kind: "category filter",
                value: s.to_string(),
                expected: "all, none, or a category label",
            }),
            "all" => Ok(CategoryFilter::All),
            "none" => Ok(CategoryFilter::Uncategorized),
            _ => Ok(CategoryFilter::Category(trimmed.to_string())),
        }
    }
}
