//! JSON input documents.
//!
//! The exporter does not fetch anything itself: callers hand it a document
//! with the already-loaded matches, entities, or tournament standings.

use chrono::NaiveDate;
use courtside::{
    league::{Category, League, TournamentId},
    standings::{CompetitionMode, Entity, EntityId, MatchResult, StandingRow, StandingsConfig},
};
use log::info;
use serde::Deserialize;
use std::{
    collections::{BTreeMap, HashMap},
    io::Read,
};

/// One tournament's matches and participants
#[derive(Debug, Clone, Deserialize)]
pub struct StandingsInput {
    pub mode: CompetitionMode,
    /// Policies stored with the tournament; defaults to the group-stage rules
    #[serde(default)]
    pub config: Option<StandingsConfig>,
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub matches: Vec<MatchResult>,
}

impl StandingsInput {
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }
}

/// A tournament's final standing as recorded for the league
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentInput {
    /// Day the tournament was held; undated tournaments always count
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub standings: Vec<StandingRow>,
}

/// A league with every tournament recorded for it
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueInput {
    pub league: League,
    #[serde(default)]
    pub tournaments: BTreeMap<TournamentId, TournamentInput>,
    #[serde(default)]
    pub entity_categories: HashMap<EntityId, Option<Category>>,
}

/// Tournament standings that contribute to the league
pub type LeagueStandings = BTreeMap<TournamentId, Vec<StandingRow>>;

impl LeagueInput {
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    /// Split into the league, the contributing standings, and the category map.
    ///
    /// Tournaments dated outside the league's date range are dropped.
    pub fn into_parts(self) -> (League, LeagueStandings, HashMap<EntityId, Option<Category>>) {
        let league = self.league;
        let standings = self
            .tournaments
            .into_iter()
            .filter_map(|(id, tournament)| match tournament.date {
                Some(date) if !league.covers(date) => {
                    info!("Skipping tournament {id}: {date} is outside league {}", league.id);
                    None
                }
                _ => Some((id, tournament.standings)),
            })
            .collect();

        (league, standings, self.entity_categories)
    }
}
