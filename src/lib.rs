//! Tennis Ratings - daily Elo ledger for professional tennis
//!
//! This crate fetches completed ATP, WTA and ITF matches for a date, folds
//! them into a persistent per-player Elo rating ledger and exposes the
//! resulting standings.

pub mod config;
pub mod error;
pub mod feed;
pub mod rating;
pub mod service;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingsError, Result};
pub use types::*;

// Re-export key components
pub use feed::{RapidApiResultsFeed, ResultsFeed};
pub use rating::{
    EloRatingCalculator, InMemoryRatingStore, JsonFileStorage, MatchBatchProcessor,
    RatingCalculator, RatingStore, SnapshotStorage,
};
pub use service::RatingUpdater;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
