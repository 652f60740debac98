//! Utility functions for the rating service

use chrono::{Days, NaiveDate, Utc};

/// Round to `digits` decimal places, halves away from zero
pub fn round_to_precision(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// The calendar day before today, in UTC
pub fn yesterday_utc() -> NaiveDate {
    let today = Utc::now().date_naive();
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}
