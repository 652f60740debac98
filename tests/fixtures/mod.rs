//! Test fixtures and feed implementations for integration testing

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tennis_ratings::error::{RatingsError, Result};
use tennis_ratings::feed::{parse_results_json, ResultsFeed};
use tennis_ratings::types::{MatchRecord, Tour};

/// Read a file from tests/fixtures
pub fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

/// Feed serving canned batches per (tour, date); unknown keys return an empty batch
#[derive(Debug, Default)]
pub struct StaticResultsFeed {
    batches: HashMap<(Tour, NaiveDate), Vec<MatchRecord>>,
    failing: Vec<Tour>,
    requests: Mutex<Vec<(Tour, NaiveDate)>>,
}

impl StaticResultsFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch(mut self, tour: Tour, date: NaiveDate, records: Vec<MatchRecord>) -> Self {
        self.batches.insert((tour, date), records);
        self
    }

    /// Serve a batch parsed from a provider response fixture
    pub fn with_fixture(self, tour: Tour, date: NaiveDate, name: &str) -> Self {
        let records = parse_results_json(&read_fixture(name)).expect("fixture should parse");
        self.with_batch(tour, date, records)
    }

    /// Make every request for `tour` fail as the provider would on a non-200
    pub fn failing(mut self, tour: Tour) -> Self {
        self.failing.push(tour);
        self
    }

    /// Requests made so far (for testing)
    pub fn requests(&self) -> Vec<(Tour, NaiveDate)> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ResultsFeed for StaticResultsFeed {
    async fn fetch_results(&self, tour: Tour, date: NaiveDate) -> Result<Vec<MatchRecord>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((tour, date));
        }

        if self.failing.contains(&tour) {
            return Err(RatingsError::FeedRequestFailed {
                tour: tour.to_string(),
                message: "status 429".to_string(),
            }
            .into());
        }

        Ok(self
            .batches
            .get(&(tour, date))
            .cloned()
            .unwrap_or_default())
    }
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, d).expect("valid test date")
}
