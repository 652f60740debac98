//! Rating system built on the Elo algorithm
//!
//! This module provides the pairwise rating engine, the rating store
//! interface, snapshot persistence and the match batch processor.

pub mod calculator;
pub mod elo;
pub mod persist;
pub mod processor;
pub mod storage;

// Re-export commonly used types
pub use calculator::{EloRatingCalculator, RatingCalculator};
pub use elo::{expected_score, update_ratings};
pub use persist::{JsonFileStorage, SnapshotStorage};
pub use processor::{BatchSummary, MatchBatchProcessor};
pub use storage::{InMemoryRatingStore, RatingStore};
