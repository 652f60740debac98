//! Match results feeds
//!
//! This module defines the results feed interface and the HTTP client for
//! the RapidAPI tennis results provider.

pub mod provider;
pub mod rapidapi;

// Re-export commonly used types
pub use provider::ResultsFeed;
pub use rapidapi::{parse_results_json, RapidApiResultsFeed};
