//! Rating system configuration

use crate::error::RatingsError;
use serde::{Deserialize, Serialize};

/// Tunables of the Elo rating engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Sensitivity of a single result
    pub k_factor: f64,
    /// Rating assigned to a player seen for the first time
    pub default_rating: f64,
    /// Decimal digits kept on every updated rating
    pub precision_digits: u32,
    /// Register both named players even when the winner cannot be resolved
    pub register_unresolved_players: bool,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_factor: 8.0,
            default_rating: 1000.0,
            precision_digits: 2,
            register_unresolved_players: true,
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(RatingsError::ConfigurationError {
                message: "K-factor must be positive".to_string(),
            }
            .into());
        }

        if !self.default_rating.is_finite() {
            return Err(RatingsError::ConfigurationError {
                message: "Default rating must be finite".to_string(),
            }
            .into());
        }

        if self.precision_digits > 10 {
            return Err(RatingsError::ConfigurationError {
                message: "Rating precision cannot exceed 10 digits".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
