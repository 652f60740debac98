//! Service orchestration
//!
//! Update runs over the results feed and the read-only standings view.

pub mod standings;
pub mod updater;

pub use standings::{standings, Standing};
pub use updater::{RatingUpdater, RunReport, TourReport};
