//! Main entry point for the tennis ratings updater
//!
//! Fetches a day of results, updates the rating ledger, and prints the
//! current standings.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tennis_ratings::config::AppConfig;
use tennis_ratings::service::{standings, RunReport};
use tennis_ratings::utils::yesterday_utc;
use tennis_ratings::{
    EloRatingCalculator, JsonFileStorage, MatchBatchProcessor, RapidApiResultsFeed,
    RatingUpdater, SnapshotStorage, Tour,
};
use tracing::{error, info};

/// Tennis Ratings - daily Elo ledger for ATP, WTA and ITF results
#[derive(Parser)]
#[command(
    name = "tennis-ratings",
    version,
    about = "Update and inspect a persistent Elo rating ledger for tennis players"
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Ratings file override
    #[arg(long, value_name = "PATH", help = "Override ratings snapshot path")]
    ratings_file: Option<PathBuf>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch results for a date and update ratings
    Update {
        /// Match date (YYYY-MM-DD), defaults to yesterday (UTC)
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,

        /// Restrict to these tours (repeatable)
        #[arg(long = "tour", value_name = "TOUR")]
        tours: Vec<Tour>,

        /// Apply results without saving the ledger
        #[arg(long)]
        dry_run: bool,
    },
    /// Show current ratings, highest first
    Standings {
        /// Number of players to show
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, config file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(path) = &args.ratings_file {
        config.storage.ratings_path = path.clone();
    }

    tennis_ratings::config::validate_config(&config)?;
    Ok(config)
}

fn print_run_report(report: &RunReport) {
    println!("Results for {}", report.date);
    for tour in &report.tours {
        match &tour.feed_error {
            Some(e) => println!("  {:<4} feed failed: {}", tour.tour, e),
            None => println!(
                "  {:<4} {:>4} matches, {:>4} rated, {:>4} skipped, {:>4} new players",
                tour.tour,
                tour.fetched,
                tour.summary.applied,
                tour.summary.skipped(),
                tour.summary.players_registered
            ),
        }
    }
    println!("  {} players rated in total", report.total_players);
}

/// Log the effective service settings
fn display_startup_banner(config: &AppConfig) {
    info!("Tennis ratings v{}", tennis_ratings::VERSION);
    info!("   Service: {}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!("   Ratings file: {}", config.storage.ratings_path.display());
    info!("   Feed: {}", config.feed.base_url);
    info!(
        "   Elo: K={} default={} precision={}",
        config.rating.k_factor, config.rating.default_rating, config.rating.precision_digits
    );
}

async fn run_update(
    config: &AppConfig,
    date: Option<NaiveDate>,
    tours: Vec<Tour>,
    dry_run: bool,
) -> Result<()> {
    let date = date.unwrap_or_else(yesterday_utc);
    let tours = if tours.is_empty() {
        config.feed.tours.clone()
    } else {
        tours
    };

    let feed = RapidApiResultsFeed::new(&config.feed)?;
    let calculator = EloRatingCalculator::new(config.rating.clone())?;
    let storage = JsonFileStorage::new(&config.storage.ratings_path);
    let updater = RatingUpdater::new(feed, storage, MatchBatchProcessor::new(calculator), tours);

    let report = if dry_run {
        let (report, _) = updater.preview(date).await?;
        info!("Dry run: ratings were not saved");
        report
    } else {
        updater.run(date).await?
    };

    print_run_report(&report);
    Ok(())
}

fn show_standings(config: &AppConfig, limit: Option<usize>, json: bool) -> Result<()> {
    let storage = JsonFileStorage::new(&config.storage.ratings_path);
    let ratings = storage.load()?;
    let rows = standings(&ratings, limit);

    if json {
        let out = serde_json::to_string_pretty(&rows).context("Failed to encode standings")?;
        println!("{}", out);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No ratings recorded yet");
        return Ok(());
    }
    for row in rows {
        println!("{:>5}  {:>8.2}  {}", row.rank, row.rating, row.player);
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_startup_banner(&config);

    let result = match args.command {
        Command::Update {
            date,
            tours,
            dry_run,
        } => run_update(&config, date, tours, dry_run).await,
        Command::Standings { limit, json } => show_standings(&config, limit, json),
    };

    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}
