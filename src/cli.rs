// src/cli.rs
//
// Command-line front end: one fetch per invocation, table to stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::info;

use crate::{
    config::consts::{CATEGORIES, FORMAT_TYPES, SERIES_TYPES},
    config::options::ApiConfig,
    error::{ConfigError, DashError},
    export::{self, Delimited},
    fetch::{Fetcher, HttpFetcher},
    progress::Progress,
    query::{RankingFilter, RecordFilter, ResourceKind, ResourceQuery, SeriesFilter},
    session::Session,
};

#[derive(Debug, Parser)]
#[command(name = "cric-dash", version, about = "Cricket series, rankings and records")]
pub struct Cli {
    /// TOML config file (default: ./cric_dash.toml if present)
    #[arg(long, global = true, env = "CRIC_DASH_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[arg(long, global = true)]
    pub no_headers: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Series schedule grouped by month
    Series(SeriesArgs),
    /// ICC player or team rankings
    Rankings(RankingsArgs),
    /// Top stats records
    Records(RecordsArgs),
}

#[derive(Debug, Args)]
pub struct SeriesArgs {
    #[arg(long = "type", default_value = "international",
          value_parser = PossibleValuesParser::new(SERIES_TYPES))]
    pub series_type: String,
}

#[derive(Debug, Args)]
pub struct RankingsArgs {
    #[arg(long, default_value = "test", value_parser = PossibleValuesParser::new(FORMAT_TYPES))]
    pub format_type: String,

    #[arg(long)]
    pub women: bool,

    #[arg(long, default_value = "batsmen", value_parser = PossibleValuesParser::new(CATEGORIES))]
    pub category: String,
}

#[derive(Debug, Args)]
pub struct RecordsArgs {
    /// e.g. mostRuns, mostWickets, highestScore
    #[arg(long, default_value = "mostRuns")]
    pub stats: String,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dash(#[from] DashError),

    #[error("could not write output: {0}")]
    Export(#[from] csv::Error),

    #[error("could not write output: {0}")]
    Io(#[from] io::Error),
}

impl Command {
    pub fn query(&self) -> ResourceQuery {
        match self {
            Command::Series(a) => SeriesFilter { series_type: a.series_type.clone() }.into(),
            Command::Rankings(a) => RankingFilter {
                format_type: a.format_type.clone(),
                is_women: s!(if a.women { "1" } else { "0" }),
                category: a.category.clone(),
            }
            .into(),
            Command::Records(a) => RecordFilter { stats_type: a.stats.clone() }.into(),
        }
    }
}

/// Status lines go to stderr so stdout stays pipeable.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, kind: ResourceKind, rows: usize) {
        eprintln!("{kind}: {rows} rows");
    }
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    let cfg = ApiConfig::load(cli.config.as_deref())?;
    let fetcher = HttpFetcher::new(&cfg)?;
    let stdout = io::stdout();
    run_with(&fetcher, &cli, stdout.lock())
}

/// Fetch → normalize → render, against any fetcher and writer.
pub fn run_with<F, W>(fetcher: &F, cli: &Cli, mut out: W) -> Result<(), CliError>
where
    F: Fetcher + ?Sized,
    W: Write,
{
    let query = cli.command.query();
    info!("UI: cli {query}");

    let mut session = Session::new();
    let mut progress = StderrProgress;
    let table = session.get_table(fetcher, query, Some(&mut progress))?;

    if table.is_empty() {
        eprintln!("No results.");
    }

    let headers = !cli.no_headers;
    match cli.output {
        OutputFormat::Table => writeln!(out, "{}", export::render_text(table, headers))?,
        OutputFormat::Csv => export::write_delimited(&mut out, table, Delimited::Csv, headers)?,
        OutputFormat::Tsv => export::write_delimited(&mut out, table, Delimited::Tsv, headers)?,
    }
    Ok(())
}
