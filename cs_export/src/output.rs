//! Table rendering as CSV or JSON.

use crate::config::OutputFormat;
use courtside::{
    league::LeagueStanding,
    scoring::Outcome,
    standings::{HistoryEntry, HistorySummary, StandingRow, Standings},
};
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Output errors
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Flat standings row for tabular output
#[derive(Debug, Serialize)]
pub struct StandingRecord<'a> {
    pub group: &'a str,
    pub position: u32,
    pub entity_id: &'a str,
    pub name: &'a str,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub points_diff: i64,
    pub points: u32,
}

impl<'a> From<&'a StandingRow> for StandingRecord<'a> {
    fn from(row: &'a StandingRow) -> Self {
        Self {
            group: &row.group_name,
            position: row.position,
            entity_id: &row.entity_id,
            name: &row.display_name,
            played: row.played(),
            wins: row.wins,
            draws: row.draws,
            losses: row.losses,
            points_for: row.points_for,
            points_against: row.points_against,
            points_diff: row.points_diff(),
            points: row.points,
        }
    }
}

/// Flat match-history row for tabular output
#[derive(Debug, Serialize)]
pub struct HistoryRecord<'a> {
    pub match_id: &'a str,
    pub group: &'a str,
    pub partners: String,
    pub opponents: String,
    pub sets: String,
    pub score_for: u32,
    pub score_against: u32,
    pub outcome: &'static str,
}

impl<'a> From<&'a HistoryEntry> for HistoryRecord<'a> {
    fn from(entry: &'a HistoryEntry) -> Self {
        Self {
            match_id: &entry.match_id,
            group: &entry.group_name,
            partners: entry.partners.join(" / "),
            opponents: entry.opponents.join(" / "),
            sets: entry
                .sets
                .iter()
                .map(|s| format!("{}-{}", s.0, s.1))
                .collect::<Vec<_>>()
                .join(" "),
            score_for: entry.score_for,
            score_against: entry.score_against,
            outcome: match entry.outcome {
                Outcome::Win => "W",
                Outcome::Draw => "D",
                Outcome::Loss => "L",
            },
        }
    }
}

#[derive(Serialize)]
struct HistoryDocument<'a> {
    entity_id: &'a str,
    summary: &'a HistorySummary,
    matches: &'a [HistoryEntry],
}

/// Write every group's standings
///
/// CSV is one flat table with a `group` column; JSON keeps the grouping.
pub fn write_standings<W: Write>(writer: W, standings: &Standings, format: OutputFormat) -> OutputResult<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, standings.rows().map(StandingRecord::from)),
        OutputFormat::Json => write_json(writer, standings),
    }
}

/// Write a league table
pub fn write_league<W: Write>(writer: W, table: &[LeagueStanding], format: OutputFormat) -> OutputResult<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, table.iter()),
        OutputFormat::Json => write_json(writer, &table),
    }
}

/// Write one entity's match history
///
/// CSV carries the matches only; JSON adds the summary.
pub fn write_history<W: Write>(
    writer: W,
    entity_id: &str,
    entries: &[HistoryEntry],
    format: OutputFormat,
) -> OutputResult<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, entries.iter().map(HistoryRecord::from)),
        OutputFormat::Json => write_json(
            writer,
            &HistoryDocument {
                entity_id,
                summary: &HistorySummary::from_entries(entries),
                matches: entries,
            },
        ),
    }
}

fn write_csv<W, I, T>(writer: W, records: I) -> OutputResult<()>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> OutputResult<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside::{
        scoring::{AggregationMode, SetScore},
        standings::{CompetitionMode, Entity, MatchResult, compute_standings, match_history},
    };

    fn sample_matches() -> Vec<MatchResult> {
        vec![MatchResult::completed(
            "m1",
            vec!["ana".into(), "bea".into()],
            vec!["cris".into(), "dani".into()],
            vec![SetScore(6, 4), SetScore(6, 3)],
        )]
    }

    fn sample_standings() -> Standings {
        let entities: Vec<_> = ["ana", "bea", "cris", "dani"]
            .iter()
            .map(|id| Entity::player(*id, id.to_uppercase()))
            .collect();
        compute_standings(&sample_matches(), &entities, CompetitionMode::Individual).unwrap()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> OutputResult<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_standings_csv_has_header_and_diff() {
        let standings = sample_standings();
        let csv = render(|w| write_standings(w, &standings, OutputFormat::Csv));
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "group,position,entity_id,name,played,wins,draws,losses,points_for,points_against,points_diff,points"
        );
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "General,1,ana,ANA,1,1,0,0,12,7,5,2");
        assert!(lines[4].ends_with(",7,12,-5,0"));
    }

    #[test]
    fn test_standings_json_keeps_groups() {
        let standings = sample_standings();
        let json = render(|w| write_standings(w, &standings, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["groups"][0]["group_name"], "General");
        assert_eq!(value["groups"][0]["rows"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_league_csv_leaves_missing_values_empty() {
        let table = vec![LeagueStanding {
            position: 1,
            entity_name: "Ana".to_string(),
            account_id: None,
            total_points: 45,
            tournaments_played: 2,
            best_position: 1,
            player_category: Some("M3".to_string()),
        }];
        let csv = render(|w| write_league(w, &table, OutputFormat::Csv));
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "position,entity_name,account_id,total_points,tournaments_played,best_position,player_category"
        );
        assert_eq!(lines[1], "1,Ana,,45,2,1,M3");
    }

    #[test]
    fn test_history_csv_flattens_sides_and_sets() {
        let entries = match_history(&sample_matches(), "cris", AggregationMode::SetsWon);
        let csv = render(|w| write_history(w, "cris", &entries, OutputFormat::Csv));
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "match_id,group,partners,opponents,sets,score_for,score_against,outcome"
        );
        assert_eq!(lines[1], "m1,General,dani,ana / bea,4-6 3-6,0,2,L");
    }

    #[test]
    fn test_history_json_includes_summary() {
        let entries = match_history(&sample_matches(), "ana", AggregationMode::RawPointSum);
        let json = render(|w| write_history(w, "ana", &entries, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["entity_id"], "ana");
        assert_eq!(value["summary"]["wins"], 1);
        assert_eq!(value["summary"]["score_for"], 12);
        assert_eq!(value["matches"][0]["outcome"], "win");
    }
}
