//! Rating update runs
//!
//! One run loads the persisted ledger, fetches and applies every configured
//! tour in order, and saves the ledger once at the end. A failing tour only
//! loses its own contribution; a failing save fails the run.

use crate::error::Result;
use crate::feed::ResultsFeed;
use crate::rating::{
    BatchSummary, InMemoryRatingStore, MatchBatchProcessor, RatingCalculator, RatingStore,
    SnapshotStorage,
};
use crate::types::{RatingMap, Tour};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Result of one tour within a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourReport {
    pub tour: Tour,
    /// Number of records returned by the feed
    pub fetched: usize,
    pub summary: BatchSummary,
    /// Feed error, if the tour could not be fetched
    pub feed_error: Option<String>,
}

/// Result of a complete update run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub date: NaiveDate,
    pub tours: Vec<TourReport>,
    /// Players in the ledger after the run
    pub total_players: usize,
}

impl RunReport {
    pub fn applied(&self) -> usize {
        self.tours.iter().map(|t| t.summary.applied).sum()
    }

    pub fn failed_tours(&self) -> Vec<Tour> {
        self.tours
            .iter()
            .filter(|t| t.feed_error.is_some())
            .map(|t| t.tour)
            .collect()
    }
}

/// Drives fetch, process and persist for a date
pub struct RatingUpdater<F, S, C> {
    feed: F,
    storage: S,
    processor: MatchBatchProcessor<C>,
    tours: Vec<Tour>,
}

impl<F, S, C> RatingUpdater<F, S, C>
where
    F: ResultsFeed,
    S: SnapshotStorage,
    C: RatingCalculator,
{
    pub fn new(feed: F, storage: S, processor: MatchBatchProcessor<C>, tours: Vec<Tour>) -> Self {
        Self {
            feed,
            storage,
            processor,
            tours,
        }
    }

    /// Run one update for `date` and persist the resulting ledger
    pub async fn run(&self, date: NaiveDate) -> Result<RunReport> {
        let mut store = InMemoryRatingStore::from(self.storage.load()?);
        let tours = self.apply_tours(&mut store, date).await;

        self.storage.save(&store.snapshot())?;
        info!("Ratings updated and saved ({} players)", store.len());

        Ok(RunReport {
            date,
            tours,
            total_players: store.len(),
        })
    }

    /// Apply every tour to an in-memory copy of the ledger without saving it
    pub async fn preview(&self, date: NaiveDate) -> Result<(RunReport, RatingMap)> {
        let mut store = InMemoryRatingStore::from(self.storage.load()?);
        let tours = self.apply_tours(&mut store, date).await;

        let report = RunReport {
            date,
            tours,
            total_players: store.len(),
        };
        Ok((report, store.into_inner()))
    }

    async fn apply_tours(
        &self,
        store: &mut InMemoryRatingStore,
        date: NaiveDate,
    ) -> Vec<TourReport> {
        let mut reports = Vec::with_capacity(self.tours.len());

        for &tour in &self.tours {
            info!("Fetching {} matches for {}", tour, date);
            let (records, feed_error) = match self.feed.fetch_results(tour, date).await {
                Ok(records) => (records, None),
                Err(e) => {
                    warn!("Failed to fetch {} data: {:#}", tour, e);
                    (Vec::new(), Some(format!("{:#}", e)))
                }
            };

            if records.is_empty() && feed_error.is_none() {
                warn!("No matches returned for {} on {}", tour, date);
            }

            let summary = self.processor.process_batch(store, &records);
            info!(
                "{}: {} records, {} applied, {} skipped, {} new players",
                tour,
                summary.records,
                summary.applied,
                summary.skipped(),
                summary.players_registered
            );

            reports.push(TourReport {
                tour,
                fetched: records.len(),
                summary,
                feed_error,
            });
        }

        reports
    }
}
