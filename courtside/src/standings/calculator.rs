//! Group standings calculation from recorded match results.

use super::{
    config::{SortPrimaryKey, StandingsConfig},
    errors::{StandingsError, StandingsResult},
    models::{CompetitionMode, Entity, EntityId, MAX_SETS, MatchResult, StandingRow},
};
use crate::scoring::{MatchOutcome, Outcome, compare_names};
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
};

/// Ranked rows of one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStandings {
    pub group_name: String,
    /// Rows in position order, positions 1..=n
    pub rows: Vec<StandingRow>,
}

/// Ranked standings for every group of a tournament
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    groups: Vec<GroupStandings>,
}

impl Standings {
    /// Groups in ascending group-name order
    pub fn groups(&self) -> &[GroupStandings] {
        &self.groups
    }

    /// Look up a group by name
    pub fn group(&self, name: &str) -> Option<&GroupStandings> {
        self.groups.iter().find(|g| g.group_name == name)
    }

    /// All rows, group by group, each group in position order
    pub fn rows(&self) -> impl Iterator<Item = &StandingRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }

    /// Look up an entity's row
    pub fn row(&self, entity_id: &str) -> Option<&StandingRow> {
        self.rows().find(|r| r.entity_id == entity_id)
    }

    /// Flatten into rows, ready to be used as a tournament's final standing
    pub fn into_rows(self) -> Vec<StandingRow> {
        self.groups.into_iter().flat_map(|g| g.rows).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Standings calculator
///
/// Stateless apart from its policy configuration: identical inputs always
/// produce identical standings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandingsCalculator {
    config: StandingsConfig,
}

impl StandingsCalculator {
    /// Create a calculator with the given policies
    pub fn new(config: StandingsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StandingsConfig {
        &self.config
    }

    /// Compute ranked standings for every group.
    ///
    /// Matches count only when completed with one to three sets recorded and
    /// each side listing as many entities as the mode allows. Other matches
    /// are skipped. Entity ids in a match that are not in `entities` are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the same entity id is supplied twice.
    pub fn compute(
        &self,
        matches: &[MatchResult],
        entities: &[Entity],
        mode: CompetitionMode,
    ) -> StandingsResult<Standings> {
        let mut rows = Vec::with_capacity(entities.len());
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(entities.len());
        for entity in entities {
            if index.insert(entity.id.as_str(), rows.len()).is_some() {
                return Err(StandingsError::DuplicateEntity(entity.id.clone()));
            }
            rows.push(StandingRow::new(entity));
        }

        for m in matches {
            if !m.counts_toward_standings() {
                log::debug!("Match {} not counted: status {:?}, {} sets", m.id, m.status, m.sets.len());
                continue;
            }
            if let Some(problem) = shape_problem(m, mode) {
                log::debug!("Match {} not counted: {}", m.id, problem);
                continue;
            }

            let (side1_total, side2_total) = self.config.aggregation.side_totals(&m.sets);
            let outcome = MatchOutcome::from_totals(side1_total, side2_total);

            self.credit_side(&mut rows, &index, m, &m.side1, (side1_total, side2_total), outcome.for_side1());
            self.credit_side(&mut rows, &index, m, &m.side2, (side2_total, side1_total), outcome.for_side2());
        }

        Ok(self.rank(rows))
    }

    /// Give every entity on one side the full credit for the match
    fn credit_side(
        &self,
        rows: &mut [StandingRow],
        index: &HashMap<&str, usize>,
        m: &MatchResult,
        side: &[EntityId],
        (score_for, score_against): (u32, u32),
        outcome: Outcome,
    ) {
        let loss_points = self.config.loser_points.points();
        for (i, entity_id) in side.iter().enumerate() {
            // a partner listed twice is credited once
            if side[..i].contains(entity_id) {
                continue;
            }
            match index.get(entity_id.as_str()) {
                Some(&slot) => rows[slot].record(score_for, score_against, outcome, loss_points),
                None => log::debug!("Match {}: unknown entity {} ignored", m.id, entity_id),
            }
        }
    }

    /// Group rows and assign positions within each group
    fn rank(&self, rows: Vec<StandingRow>) -> Standings {
        let mut grouped: BTreeMap<String, Vec<StandingRow>> = BTreeMap::new();
        for row in rows {
            grouped.entry(row.group_name.clone()).or_default().push(row);
        }

        let groups = grouped
            .into_iter()
            .map(|(group_name, rows)| GroupStandings {
                group_name,
                rows: self.place(rows),
            })
            .collect();

        Standings { groups }
    }

    /// Order one group's rows and number them 1..=n.
    ///
    /// A row with a final-position override `k` takes slot `k`; rows without
    /// an override fill the remaining slots in computed order.
    fn place(&self, rows: Vec<StandingRow>) -> Vec<StandingRow> {
        let total = rows.len();
        let (mut pinned, mut free): (Vec<_>, Vec<_>) =
            rows.into_iter().partition(|r| r.final_position.is_some());

        pinned.sort_by(|a, b| {
            a.final_position
                .cmp(&b.final_position)
                .then_with(|| self.compare_rows(a, b))
        });
        free.sort_by(|a, b| self.compare_rows(a, b));

        let mut pinned = pinned.into_iter().peekable();
        let mut free = free.into_iter();
        let mut placed = Vec::with_capacity(total);
        let mut slot: u32 = 1;

        loop {
            let due = pinned
                .peek()
                .and_then(|r| r.final_position)
                .is_some_and(|p| p <= slot);
            let next = if due {
                pinned.next()
            } else {
                free.next().or_else(|| pinned.next())
            };
            let Some(mut row) = next else { break };
            row.position = slot;
            placed.push(row);
            slot += 1;
        }

        placed
    }

    /// Computed order: primary key, points, point difference, points for,
    /// display name, entity id
    pub fn compare_rows(&self, a: &StandingRow, b: &StandingRow) -> Ordering {
        let primary = match self.config.sort_primary {
            SortPrimaryKey::Points => b.points.cmp(&a.points),
            SortPrimaryKey::Wins => b.wins.cmp(&a.wins).then_with(|| b.points.cmp(&a.points)),
        };

        primary
            .then_with(|| b.points_diff().cmp(&a.points_diff()))
            .then_with(|| b.points_for.cmp(&a.points_for))
            .then_with(|| compare_names(&a.display_name, &b.display_name))
            .then_with(|| a.entity_id.cmp(&b.entity_id))
    }
}

/// Why a counted match cannot be credited, if it cannot
fn shape_problem(m: &MatchResult, mode: CompetitionMode) -> Option<String> {
    if m.sets.len() > MAX_SETS {
        return Some(format!("{} set scores recorded, at most {}", m.sets.len(), MAX_SETS));
    }

    let max = mode.max_side_size();
    for (side, entities) in [(1, &m.side1), (2, &m.side2)] {
        if entities.is_empty() || entities.len() > max {
            return Some(format!(
                "side {} lists {} entities, {} mode allows 1 to {}",
                side,
                entities.len(),
                mode,
                max
            ));
        }
    }

    None
}

/// Compute standings with the group-stage policies
///
/// # Errors
///
/// See [`StandingsCalculator::compute`].
pub fn compute_standings(
    matches: &[MatchResult],
    entities: &[Entity],
    mode: CompetitionMode,
) -> StandingsResult<Standings> {
    StandingsCalculator::default().compute(matches, entities, mode)
}
