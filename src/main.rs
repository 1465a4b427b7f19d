use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

mod error;
mod geo;
mod pairs;
mod places;
mod summary;
mod table;

use error::AirDistError;
use pairs::{build_pairs, Place};
use places::PlaceSource;
use summary::summarize;

#[derive(Parser, Debug)]
#[command(name = "airdist", version)]
#[command(about = "Rank the air distances between every pair of places, read from a CSV or generated at random.", long_about = None)]
struct Cli {
    /// Number of random places to generate. If omitted, places are read from --file.
    #[arg(allow_negative_numbers = true)]
    count: Option<String>,

    /// CSV file with a Name,Latitude,Longitude header
    #[arg(short, long, default_value = "places.csv")]
    file: PathBuf,

    /// Seed for generated places. Drawn at random (and logged) if omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Unit label printed in the distance column
    #[arg(short, long, default_value_t = String::from("km"))]
    unit: String,

    /// Anything after the count is ignored.
    #[arg(hide = true)]
    extra: Vec<String>,
}

impl Cli {
    fn place_source(&self) -> Result<PlaceSource, AirDistError> {
        match &self.count {
            None => Ok(PlaceSource::Csv(self.file.clone())),
            Some(raw) => {
                if !self.extra.is_empty() {
                    log::warn!("ignoring extra arguments {:?}", self.extra);
                }
                let count = parse_count(raw)?;
                let seed = self.seed.unwrap_or_else(rand::random);
                log::info!("generating {} places with seed {}", count, seed);
                Ok(PlaceSource::Random { count, seed })
            }
        }
    }
}

fn parse_count(raw: &str) -> Result<usize, AirDistError> {
    let count: i64 = raw
        .trim()
        .parse()
        .map_err(|e| AirDistError::InvalidArgument(format!("invalid place count {:?}: {}", raw, e)))?;
    if count <= 0 {
        return Err(AirDistError::InvalidArgument(
            "input must be larger than zero".to_string(),
        ));
    }
    usize::try_from(count)
        .map_err(|_| AirDistError::InvalidArgument(format!("place count {} is too large", count)))
}

/// Table of all pairs followed by the summary line.
fn report(places: &[Place], unit: &str) -> String {
    let pairs = build_pairs(places);
    let analysis = summarize(&pairs);
    let mut out = table::render_table(&pairs, unit);
    out.push_str(&table::render_summary(&analysis));
    out.push('\n');
    out
}

/// Turns a clap rejection (unknown flag, malformed option) into the same
/// invalid-argument error a bad count produces.
fn usage_error(e: &clap::Error) -> AirDistError {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    AirDistError::InvalidArgument(first.trim_start_matches("error: ").to_string())
}

fn error_line(e: &anyhow::Error) -> String {
    format!("An error occured: {:#}", e)
}

fn fail(e: anyhow::Error) -> ! {
    println!("{}", error_line(&e));
    std::process::exit(-1);
}

fn run(cli: &Cli) -> Result<()> {
    let source = cli.place_source()?;
    let places = source.load().context("loading places")?;
    log::debug!("loaded {} places from {:?}", places.len(), source);
    print!("{}", report(&places, &cli.unit));
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            e.exit()
        }
        Err(e) => fail(usage_error(&e).into()),
    };

    if let Err(e) = run(&cli) {
        fail(e);
    }
}
