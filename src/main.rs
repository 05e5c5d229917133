use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use usda_markets::convert::convert_season_times;
use usda_markets::logging;
use usda_markets::types::day_abbreviation;
use usda_markets::{Config, MarketParser, MarketRecord, RowErrorPolicy};

#[derive(Parser)]
#[command(name = "usda_markets")]
#[command(about = "Parse and normalize USDA farmers-market CSV exports")]
#[command(version = "0.1.0")]
struct Cli {
    /// TOML config file with parser settings and column names
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Stop at the first row that fails to convert
    #[arg(long, global = true)]
    abort_on_error: bool,

    /// Also write JSON logs to a daily rotated file in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an export and report how many rows were accepted
    Parse {
        /// Path to the CSV export
        file: PathBuf,
    },
    /// Print one market's normalized fields
    Show {
        /// Path to the CSV export
        file: PathBuf,
        /// FMID of the market
        #[arg(long)]
        id: String,
    },
    /// Normalize a single weekly schedule string
    Schedule {
        /// e.g. "Sat: 8:00 AM-3:00 PM;Sun: 8:00 AM-3:00 PM;"
        text: String,
    },
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    if cli.abort_on_error {
        config.parser.on_row_error = RowErrorPolicy::Abort;
    }
    Ok(config)
}

fn print_market(market: &MarketRecord) {
    println!("{} ({})", market.name(), market.id());
    if !market.website().is_empty() {
        println!("   Website: {}", market.website());
    }
    println!(
        "   Address: {}, {}, {} County, {} {}",
        market.street(),
        market.city(),
        market.county(),
        market.state(),
        market.zipcode()
    );
    if let (Some(lon), Some(lat)) = (market.longitude(), market.latitude()) {
        println!("   Coordinates: {}, {}", lat, lon);
    }
    for (number, season) in market.seasons().iter().enumerate() {
        if season.is_empty() {
            continue;
        }
        println!(
            "   Season {}: {}",
            number + 1,
            season.date.as_deref().unwrap_or("(no dates)")
        );
        if let Some(schedule) = &season.time {
            println!("      {}", schedule);
        }
    }
    let accepted: Vec<&str> = market
        .flags()
        .iter()
        .filter(|(_, value)| **value)
        .map(|(name, _)| name.as_str())
        .collect();
    if !accepted.is_empty() {
        println!("   Flags: {}", accepted.join(", "));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init_logging(cli.log_dir.as_deref()).context("initializing logging")?;

    match &cli.command {
        Commands::Parse { file } => {
            let parser = MarketParser::new(load_config(&cli)?);
            let report = parser
                .parse_file(file)
                .with_context(|| format!("parsing {}", file.display()))?;

            println!("\n📊 Results for {}:", file.display());
            println!("   Rows: {}", report.total_rows);
            println!("   Markets: {}", report.records.len());
            println!("   Rejected: {}", report.failures.len());
            if !report.failures.is_empty() {
                println!("\n⚠️  Rejected rows:");
                for failure in &report.failures {
                    println!("   - {}", failure);
                }
            }
        }
        Commands::Show { file, id } => {
            let parser = MarketParser::new(load_config(&cli)?);
            let report = parser
                .parse_file(file)
                .with_context(|| format!("parsing {}", file.display()))?;

            match report.find(id) {
                Some(market) => print_market(market),
                None => {
                    error!("no market with FMID {} in {}", id, file.display());
                    anyhow::bail!("market {} not found", id);
                }
            }
        }
        Commands::Schedule { text } => {
            let schedule = convert_season_times(text)?;
            info!("parsed {} days", schedule.len());
            for (day, hours) in schedule.iter() {
                let [open, close] = hours.militarized();
                println!("{}: {} - {}", day_abbreviation(day), open, close);
            }
        }
    }
    Ok(())
}
