//! Per-player match history.

use super::models::{EntityId, MAX_SETS, MatchResult};
use crate::scoring::{AggregationMode, MatchOutcome, Outcome, SetScore};
use serde::{Deserialize, Serialize};

/// One counted match from a single entity's point of view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub match_id: String,
    pub group_name: String,
    /// Other entities on the same side
    pub partners: Vec<EntityId>,
    pub opponents: Vec<EntityId>,
    /// Aggregated total for the entity's side
    pub score_for: u32,
    /// Aggregated total for the opposing side
    pub score_against: u32,
    /// Sets with the entity's side listed first
    pub sets: Vec<SetScore>,
    pub outcome: Outcome,
}

/// List every counted match `entity_id` took part in, in input order.
///
/// Only completed matches with one to three recorded sets are included, as
/// in the standings calculator. Side sizes are not checked here since the
/// competition mode is not known.
pub fn match_history(
    matches: &[MatchResult],
    entity_id: &str,
    aggregation: AggregationMode,
) -> Vec<HistoryEntry> {
    matches
        .iter()
        .filter(|m| m.counts_toward_standings() && m.sets.len() <= MAX_SETS)
        .filter_map(|m| {
            let on_side1 = m.side1.iter().any(|id| id == entity_id);
            let on_side2 = m.side2.iter().any(|id| id == entity_id);
            if on_side1 == on_side2 {
                // absent, or listed on both sides
                return None;
            }

            let (own, other, sets): (&Vec<EntityId>, &Vec<EntityId>, Vec<SetScore>) = if on_side1 {
                (&m.side1, &m.side2, m.sets.clone())
            } else {
                (&m.side2, &m.side1, m.sets.iter().map(|s| s.flipped()).collect())
            };

            let (score_for, score_against) = aggregation.side_totals(&sets);
            Some(HistoryEntry {
                match_id: m.id.clone(),
                group_name: m.group().to_string(),
                partners: own.iter().filter(|id| *id != entity_id).cloned().collect(),
                opponents: other.clone(),
                score_for,
                score_against,
                sets,
                outcome: MatchOutcome::from_totals(score_for, score_against).for_side1(),
            })
        })
        .collect()
}

/// Totals over a match history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub score_for: u32,
    pub score_against: u32,
}

impl HistorySummary {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, e| {
            acc.played += 1;
            match e.outcome {
                Outcome::Win => acc.wins += 1,
                Outcome::Draw => acc.draws += 1,
                Outcome::Loss => acc.losses += 1,
            }
            acc.score_for = acc.score_for.saturating_add(e.score_for);
            acc.score_against = acc.score_against.saturating_add(e.score_against);
            acc
        })
    }

    /// Wins over matches played, 0.0 with no matches
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.played)
        }
    }
}
