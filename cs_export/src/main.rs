//! Standings and league table exporter.
//!
//! Reads a JSON document of already-loaded tournament data, runs the
//! courtside engine over it, and writes the resulting table as CSV or JSON.

use anyhow::{Context, Result, bail};
use courtside::{
    league::{aggregate_league, filter_by_category},
    standings::{StandingsCalculator, match_history},
};
use cs_export::{
    config::{ExportConfig, Overrides},
    input::{LeagueInput, StandingsInput},
    output::{write_history, write_league, write_standings},
};
use log::{info, warn};
use pico_args::Arguments;
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

const HELP: &str = "\
Export tournament standings and league tables

USAGE:
  cs_export <COMMAND> --input FILE [OPTIONS]

COMMANDS:
  standings             Group standings of one tournament
  league                League table across tournaments
  history               Match history of one entity in a tournament

OPTIONS:
  --input FILE          JSON input document
  --output FILE         Write to FILE instead of stdout
  --format FORMAT       csv or json  [default: env COURTSIDE_FORMAT or csv]
  --category FILTER     League view: all, none, or a category label  [default: all]
                        (the label must be one the league declares, if it declares any)
  --entity ID           Entity whose history to export (history only)
  --aggregation MODE    raw_point_sum or sets_won
  --sort-primary KEY    points or wins
  --loser-points N      zero or one

FLAGS:
  -h, --help            Print help information

ENVIRONMENT:
  COURTSIDE_AGGREGATION, COURTSIDE_SORT_PRIMARY, COURTSIDE_LOSER_POINTS,
  COURTSIDE_FORMAT, COURTSIDE_CATEGORY
  RUST_LOG              Log level  [default: info]
";

enum Command {
    Standings,
    League,
    History { entity_id: String },
}

struct Args {
    command: Command,
    input: PathBuf,
    output: Option<PathBuf>,
    overrides: Overrides,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let args = parse_args(&mut pargs)?;
    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("Unexpected arguments: {remaining:?}");
    }

    run(args)
}

fn parse_args(pargs: &mut Arguments) -> Result<Args> {
    let command = match pargs.subcommand()?.as_deref() {
        Some("standings") => Command::Standings,
        Some("league") => Command::League,
        Some("history") => Command::History {
            entity_id: pargs
                .value_from_str("--entity")
                .context("history requires --entity ID")?,
        },
        Some(other) => bail!("Unknown command '{other}'; see --help"),
        None => bail!("No command given; see --help"),
    };

    Ok(Args {
        command,
        input: pargs
            .value_from_str("--input")
            .context("--input FILE is required")?,
        output: pargs.opt_value_from_str("--output")?,
        overrides: Overrides {
            aggregation: pargs.opt_value_from_str("--aggregation")?,
            sort_primary: pargs.opt_value_from_str("--sort-primary")?,
            loser_points: pargs.opt_value_from_str("--loser-points")?,
            format: pargs.opt_value_from_str("--format")?,
            category: pargs.opt_value_from_str("--category")?,
        },
    })
}

fn run(args: Args) -> Result<()> {
    let config = ExportConfig::from_env(args.overrides)?;

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let reader = BufReader::new(file);

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match args.command {
        Command::Standings => {
            let input = StandingsInput::from_reader(reader).context("Invalid standings input")?;
            let calculator = StandingsCalculator::new(config.standings_config(input.config.unwrap_or_default()));

            let standings = calculator
                .compute(&input.matches, &input.entities, input.mode)
                .context("Failed to compute standings")?;
            info!(
                "Computed {} mode standings: {} groups, {} rows",
                input.mode,
                standings.groups().len(),
                standings.len()
            );

            write_standings(&mut writer, &standings, config.format)?;
        }
        Command::League => {
            let input = LeagueInput::from_reader(reader).context("Invalid league input")?;
            let (league, standings, categories) = input.into_parts();
            config.validate_for_league(&league)?;
            if let Err(e) = league.validate() {
                warn!("League {} definition: {e}", league.id);
            }

            let table = aggregate_league(&league, &standings, &categories);
            let view = filter_by_category(&table, &config.category);
            info!(
                "League {}: {} tournaments, {} entries ({} shown for category {})",
                league.name,
                standings.len(),
                table.len(),
                view.len(),
                config.category
            );

            write_league(&mut writer, &view, config.format)?;
        }
        Command::History { entity_id } => {
            let input = StandingsInput::from_reader(reader).context("Invalid standings input")?;
            let aggregation = config.standings_config(input.config.unwrap_or_default()).aggregation;

            if !input.entities.iter().any(|e| e.id == entity_id) {
                warn!("Entity {entity_id} is not registered in this tournament");
            }
            if !input.matches.iter().any(|m| m.involves(&entity_id)) {
                warn!("Entity {entity_id} appears in no match");
            }

            let entries = match_history(&input.matches, &entity_id, aggregation);
            info!("{} counted matches for {}", entries.len(), entity_id);

            write_history(&mut writer, &entity_id, &entries, config.format)?;
        }
    }

    writer.flush()?;
    Ok(())
}
