//! Caller-owned league snapshot.
//!
//! Holds the last computed league table next to the full set of inputs it was
//! computed from. Every change recomputes the whole table with
//! [`aggregate_league`]; nothing is accumulated onto a previous result.
//!
//! The league is validated once, when the snapshot is created. Updates after
//! that cannot fail.

use super::{
    aggregator::{aggregate_league, filter_by_category},
    errors::LeagueResult,
    models::{Category, CategoryFilter, League, LeagueStanding, TournamentId},
};
use crate::standings::{EntityId, StandingRow};
use std::collections::{BTreeMap, HashMap};

/// Last computed league table plus the inputs behind it
#[derive(Debug, Clone)]
pub struct LeagueSnapshot {
    league: League,
    tournaments: BTreeMap<TournamentId, Vec<StandingRow>>,
    entity_categories: HashMap<EntityId, Option<Category>>,
    table: Vec<LeagueStanding>,
    generation: u64,
}

impl LeagueSnapshot {
    /// Create an empty snapshot for a league
    ///
    /// # Errors
    ///
    /// Returns an error if the league definition is invalid.
    pub fn new(league: League, entity_categories: HashMap<EntityId, Option<Category>>) -> LeagueResult<Self> {
        league.validate()?;
        Ok(Self {
            league,
            tournaments: BTreeMap::new(),
            entity_categories,
            table: Vec::new(),
            generation: 0,
        })
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    /// The last computed table
    pub fn table(&self) -> &[LeagueStanding] {
        &self.table
    }

    /// Number of recomputations so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Tournament standings the table was computed from
    pub fn tournaments(&self) -> &BTreeMap<TournamentId, Vec<StandingRow>> {
        &self.tournaments
    }

    /// Filtered view of the last computed table
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<LeagueStanding> {
        filter_by_category(&self.table, filter)
    }

    /// Record a tournament's final standing and recompute.
    ///
    /// Replaces any standing previously recorded for `tournament_id`.
    pub fn finalize_tournament(
        &mut self,
        tournament_id: impl Into<TournamentId>,
        rows: Vec<StandingRow>,
    ) -> &[LeagueStanding] {
        self.tournaments.insert(tournament_id.into(), rows);
        self.recompute()
    }

    /// Drop a tournament and recompute; returns whether it was present
    pub fn remove_tournament(&mut self, tournament_id: &str) -> bool {
        if self.tournaments.remove(tournament_id).is_none() {
            return false;
        }
        self.recompute();
        true
    }

    /// Change an entity's category and recompute
    pub fn set_entity_category(
        &mut self,
        entity_id: impl Into<EntityId>,
        category: Option<Category>,
    ) -> &[LeagueStanding] {
        self.entity_categories.insert(entity_id.into(), category);
        self.recompute()
    }

    /// Recompute from the current inputs
    pub fn recompute(&mut self) -> &[LeagueStanding] {
        let table = aggregate_league(&self.league, &self.tournaments, &self.entity_categories);
        self.install(table);
        &self.table
    }

    fn install(&mut self, table: Vec<LeagueStanding>) {
        self.table = table;
        self.generation += 1;
        log::debug!(
            "League {}: table recomputed (generation {}, {} tournaments, {} entries)",
            self.league.id,
            self.generation,
            self.tournaments.len(),
            self.table.len()
        );
    }
}
