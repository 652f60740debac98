//! RapidAPI tennis results client

use crate::config::FeedSettings;
use crate::error::{RatingsError, Result};
use crate::feed::provider::ResultsFeed;
use crate::types::{MatchRecord, Tour};
use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

#[derive(Debug, Deserialize)]
struct ResultsEnvelope {
    #[serde(default)]
    results: Option<Vec<MatchRecord>>,
}

/// Parse a results response body. A missing or null `results` field is an
/// empty batch.
pub fn parse_results_json(raw: &str) -> Result<Vec<MatchRecord>> {
    let envelope: ResultsEnvelope =
        serde_json::from_str(raw).map_err(|e| RatingsError::FeedResponseInvalid {
            message: e.to_string(),
        })?;
    Ok(envelope.results.unwrap_or_default())
}

/// HTTP client for the tennis results endpoint on RapidAPI
#[derive(Debug, Clone)]
pub struct RapidApiResultsFeed {
    client: Client,
    base_url: String,
    api_host: String,
    api_key: String,
}

impl RapidApiResultsFeed {
    /// Build a client from feed settings; an API key is required
    pub fn new(settings: &FeedSettings) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| RatingsError::ConfigurationError {
                message: "RAPIDAPI_KEY is not set".to_string(),
            })?;

        let client = Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .context("failed to build http client")?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_host: settings.api_host.clone(),
            api_key,
        })
    }

    fn results_url(&self) -> String {
        format!("{}/results", self.base_url)
    }
}

#[async_trait]
impl ResultsFeed for RapidApiResultsFeed {
    async fn fetch_results(&self, tour: Tour, date: NaiveDate) -> Result<Vec<MatchRecord>> {
        let date = date.format("%Y-%m-%d").to_string();
        let request_failed = |message: String| RatingsError::FeedRequestFailed {
            tour: tour.to_string(),
            message,
        };

        debug!("Requesting {} results for {}", tour, date);
        let response = self
            .client
            .get(self.results_url())
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, &self.api_host)
            .query(&[("tour", tour.code()), ("date", date.as_str())])
            .send()
            .await
            .map_err(|e| request_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(request_failed(format!("status {}", status.as_u16())).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| request_failed(e.to_string()))?;
        parse_results_json(&body)
    }
}
