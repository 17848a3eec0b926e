//! League table aggregation across tournaments.

use super::{
    identity::{IdentityResolver, Resolution},
    models::{Category, CategoryFilter, League, LeagueStanding, TournamentId},
};
use crate::{
    scoring::compare_names,
    standings::{EntityId, StandingRow},
};
use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap, HashSet},
};

/// Build the league table from every contributing tournament's standing.
///
/// Each row's finishing position is converted to points with the table for
/// the entity's category (see [`League::table_for`]); positions missing from
/// the table award 0. Every tournament with a row for an entity counts as
/// played, whether or not it scored.
///
/// The result is sorted by total points (descending), best position
/// (ascending), tournaments played (descending), then name, and numbered
/// from 1. The call is a full recomputation: the same inputs always yield
/// the same table.
///
/// `entity_categories` is looked up by the row's entity id, then by its
/// account id.
///
/// Rows at position 0 carry no finish and are skipped. The league definition
/// is not validated here; see [`League::validate`].
pub fn aggregate_league(
    league: &League,
    standings: &BTreeMap<TournamentId, Vec<StandingRow>>,
    entity_categories: &HashMap<EntityId, Option<Category>>,
) -> Vec<LeagueStanding> {
    let mut resolver = IdentityResolver::new();
    let mut table: Vec<LeagueStanding> = Vec::new();

    for (tournament_id, rows) in standings {
        let mut seen: HashSet<usize> = HashSet::with_capacity(rows.len());
        resolver.begin_tournament();

        for row in rows {
            if row.position == 0 {
                log::debug!(
                    "League {}: {} in {} has no finishing position, skipped",
                    league.id,
                    row.entity_id,
                    tournament_id
                );
                continue;
            }

            let category = category_of(entity_categories, row);
            let points = league.table_for(category).points_for(row.position);
            log::trace!(
                "League {}: {} finished {} in {} for {} points",
                league.id,
                row.display_name,
                row.position,
                tournament_id,
                points
            );

            let resolution = resolver.resolve(row);
            if let Resolution::New(_) = resolution {
                table.push(LeagueStanding {
                    position: 0,
                    entity_name: row.display_name.trim().to_string(),
                    account_id: None,
                    total_points: 0,
                    tournaments_played: 0,
                    best_position: row.position,
                    player_category: None,
                });
            }
            let slot = resolution.slot();

            let entry = &mut table[slot];
            entry.total_points = entry.total_points.saturating_add(points);
            entry.best_position = entry.best_position.min(row.position);
            if seen.insert(slot) {
                entry.tournaments_played += 1;
            }
            if entry.player_category.is_none() {
                entry.player_category = category.map(str::to_string);
            }
            if entry.account_id.is_none() {
                entry.account_id = resolver.account(slot).map(str::to_string);
            }
        }
    }

    table.sort_by(compare_standings);
    number(&mut table);
    table
}

/// Keep the rows matching `filter`, in order, renumbered from 1
pub fn filter_by_category(table: &[LeagueStanding], filter: &CategoryFilter) -> Vec<LeagueStanding> {
    let mut filtered: Vec<LeagueStanding> = table
        .iter()
        .filter(|s| filter.matches(s.player_category.as_deref()))
        .cloned()
        .collect();
    number(&mut filtered);
    filtered
}

fn category_of<'a>(
    entity_categories: &'a HashMap<EntityId, Option<Category>>,
    row: &StandingRow,
) -> Option<&'a str> {
    entity_categories
        .get(&row.entity_id)
        .or_else(|| {
            row.account_id
                .as_ref()
                .and_then(|account| entity_categories.get(account))
        })
        .and_then(|c| c.as_deref())
}

fn compare_standings(a: &LeagueStanding, b: &LeagueStanding) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then_with(|| a.best_position.cmp(&b.best_position))
        .then_with(|| b.tournaments_played.cmp(&a.tournaments_played))
        .then_with(|| compare_names(&a.entity_name, &b.entity_name))
        .then_with(|| a.account_id.cmp(&b.account_id))
}

fn number(table: &mut [LeagueStanding]) {
    for (standing, position) in table.iter_mut().zip(1..) {
        standing.position = position;
    }
}
