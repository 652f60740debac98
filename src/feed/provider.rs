//! Results feed interface
//!
//! A results feed supplies the ordered match records of one tour on one day.

use crate::types::{MatchRecord, Tour};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

/// Trait for sources of completed match results
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultsFeed: Send + Sync {
    /// Fetch the match records for `tour` on `date`, in the order the
    /// provider lists them
    async fn fetch_results(
        &self,
        tour: Tour,
        date: NaiveDate,
    ) -> crate::error::Result<Vec<MatchRecord>>;
}

#[async_trait]
impl<T: ResultsFeed + ?Sized> ResultsFeed for Arc<T> {
    async fn fetch_results(
        &self,
        tour: Tour,
        date: NaiveDate,
    ) -> crate::error::Result<Vec<MatchRecord>> {
        (**self).fetch_results(tour, date).await
    }
}
