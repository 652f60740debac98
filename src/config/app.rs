//! Main application configuration
//!
//! This module defines the primary configuration structures for the rating
//! service, including environment variable and TOML file loading and validation.

use crate::config::rating::RatingConfig;
use crate::types::Tour;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub feed: FeedSettings,
    pub storage: StorageSettings,
    pub rating: RatingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Results provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Base URL of the results API
    pub base_url: String,
    /// Value sent as the X-RapidAPI-Host header
    pub api_host: String,
    /// RapidAPI key, usually supplied through RAPIDAPI_KEY
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
    /// Tours fetched on every update, in order
    pub tours: Vec<Tour>,
}

/// Rating ledger persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Path of the JSON ratings snapshot
    pub ratings_path: PathBuf,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "tennis-ratings".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            base_url: "https://tennis-api-atp-wta-itf.p.rapidapi.com".to_string(),
            api_host: "tennis-api-atp-wta-itf.p.rapidapi.com".to_string(),
            api_key: None,
            request_timeout_seconds: 10,
            tours: Tour::ALL.to_vec(),
        }
    }
}

impl FeedSettings {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            ratings_path: PathBuf::from("ratings.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&raw)?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse a TOML document; missing sections and fields keep their defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| anyhow!("Invalid configuration file: {}", e))
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Feed settings
        if let Ok(key) = env::var("RAPIDAPI_KEY") {
            if !key.trim().is_empty() {
                self.feed.api_key = Some(key);
            }
        }
        if let Ok(host) = env::var("RAPIDAPI_HOST") {
            self.feed.api_host = host;
        }
        if let Ok(url) = env::var("RESULTS_BASE_URL") {
            self.feed.base_url = url;
        }
        if let Ok(timeout) = env::var("FEED_TIMEOUT_SECONDS") {
            self.feed.request_timeout_seconds = timeout
                .parse()
                .map_err(|_| anyhow!("Invalid FEED_TIMEOUT_SECONDS value: {}", timeout))?;
        }
        if let Ok(tours) = env::var("TOURS") {
            self.feed.tours = parse_tour_list(&tours)
                .map_err(|e| anyhow!("Invalid TOURS value: {}: {}", tours, e))?;
        }

        // Storage settings
        if let Ok(path) = env::var("RATINGS_PATH") {
            self.storage.ratings_path = PathBuf::from(path);
        }

        // Rating settings
        if let Ok(k) = env::var("K_FACTOR") {
            self.rating.k_factor = k
                .parse()
                .map_err(|_| anyhow!("Invalid K_FACTOR value: {}", k))?;
        }
        if let Ok(rating) = env::var("DEFAULT_RATING") {
            self.rating.default_rating = rating
                .parse()
                .map_err(|_| anyhow!("Invalid DEFAULT_RATING value: {}", rating))?;
        }
        if let Ok(digits) = env::var("RATING_PRECISION") {
            self.rating.precision_digits = digits
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_PRECISION value: {}", digits))?;
        }
        if let Ok(register) = env::var("REGISTER_UNRESOLVED_PLAYERS") {
            self.rating.register_unresolved_players = register.parse().map_err(|_| {
                anyhow!("Invalid REGISTER_UNRESOLVED_PLAYERS value: {}", register)
            })?;
        }

        Ok(())
    }

}

/// Parse a comma separated tour list such as `ATP,WTA`
pub fn parse_tour_list(raw: &str) -> Result<Vec<Tour>> {
    let mut tours = Vec::new();
    for part in raw.split(',').filter(|p| !p.trim().is_empty()) {
        let tour: Tour = part.parse()?;
        if !tours.contains(&tour) {
            tours.push(tour);
        }
    }
    Ok(tours)
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate feed settings
    if config.feed.base_url.is_empty() {
        return Err(anyhow!("Results base URL cannot be empty"));
    }
    if config.feed.request_timeout_seconds == 0 {
        return Err(anyhow!("Feed timeout must be greater than 0"));
    }
    if config.feed.tours.is_empty() {
        return Err(anyhow!("At least one tour must be configured"));
    }

    // Validate storage settings
    if config.storage.ratings_path.as_os_str().is_empty() {
        return Err(anyhow!("Ratings path cannot be empty"));
    }

    config.rating.validate()?;

    Ok(())
}
