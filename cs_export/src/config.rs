//! Export configuration management.
//!
//! Consolidates environment variable reads and command-line overrides into a
//! validated configuration.

use courtside::{
    league::{CategoryFilter, League},
    scoring::AggregationMode,
    standings::{LoserPointPolicy, SortPrimaryKey, StandingsConfig},
};
use std::{fmt::Display, str::FromStr};

pub const ENV_AGGREGATION: &str = "COURTSIDE_AGGREGATION";
pub const ENV_SORT_PRIMARY: &str = "COURTSIDE_SORT_PRIMARY";
pub const ENV_LOSER_POINTS: &str = "COURTSIDE_LOSER_POINTS";
pub const ENV_FORMAT: &str = "COURTSIDE_FORMAT";
pub const ENV_CATEGORY: &str = "COURTSIDE_CATEGORY";

/// Output table format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}' (expected csv or json)")),
        }
    }
}

/// Raw command-line values that take precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub aggregation: Option<String>,
    pub sort_primary: Option<String>,
    pub loser_points: Option<String>,
    pub format: Option<String>,
    pub category: Option<String>,
}

/// Complete export configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportConfig {
    /// Policy overrides applied on top of the input's standings config
    pub aggregation: Option<AggregationMode>,
    pub sort_primary: Option<SortPrimaryKey>,
    pub loser_points: Option<LoserPointPolicy>,
    pub format: OutputFormat,
    /// League table category view
    pub category: CategoryFilter,
}

impl ExportConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if a variable or override holds an unparseable value
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), overrides)
    }

    /// Load configuration through `lookup`, with `overrides` winning
    ///
    /// # Errors
    ///
    /// Returns error if a variable or override holds an unparseable value
    pub fn from_lookup<F>(lookup: F, overrides: Overrides) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting = |key: &str, value: Option<String>| value.or_else(|| lookup(key));

        Ok(ExportConfig {
            aggregation: parse_setting(ENV_AGGREGATION, setting(ENV_AGGREGATION, overrides.aggregation))?,
            sort_primary: parse_setting(ENV_SORT_PRIMARY, setting(ENV_SORT_PRIMARY, overrides.sort_primary))?,
            loser_points: parse_setting(ENV_LOSER_POINTS, setting(ENV_LOSER_POINTS, overrides.loser_points))?,
            format: parse_setting(ENV_FORMAT, setting(ENV_FORMAT, overrides.format))?.unwrap_or_default(),
            category: parse_setting(ENV_CATEGORY, setting(ENV_CATEGORY, overrides.category))?.unwrap_or_default(),
        })
    }

    /// Standings policies: `base` with every configured override applied
    pub fn standings_config(&self, base: StandingsConfig) -> StandingsConfig {
        StandingsConfig {
            aggregation: self.aggregation.unwrap_or(base.aggregation),
            sort_primary: self.sort_primary.unwrap_or(base.sort_primary),
            loser_points: self.loser_points.unwrap_or(base.loser_points),
        }
    }

    /// Validate the configuration against the league being exported
    ///
    /// A league that declares no categories accepts any label, which then
    /// selects rows by the entity category map alone.
    ///
    /// # Errors
    ///
    /// Returns error if the category filter names a category the league does
    /// not declare
    pub fn validate_for_league(&self, league: &League) -> Result<(), ConfigError> {
        if let CategoryFilter::Category(category) = &self.category
            && league.has_categories()
            && !league.categories.contains(category)
        {
            return Err(ConfigError::Invalid {
                var: ENV_CATEGORY.to_string(),
                reason: format!(
                    "Unknown category '{category}' (known categories: {})",
                    league.categories.join(", ")
                ),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse an optional setting, reporting which variable was bad
fn parse_setting<T>(var: &str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .map(|v| {
            v.parse().map_err(|e: T::Err| ConfigError::Invalid {
                var: var.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
}
