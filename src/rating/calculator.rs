//! Rating calculator trait and the Elo implementation
//!
//! The calculator owns the engine tunables (K-factor, default rating, output
//! precision) so callers never depend on global constants.

use crate::config::RatingConfig;
use crate::rating::elo;
use crate::types::MatchOutcome;
use crate::utils::round_to_precision;

/// Trait for calculating rating changes after a two-player match
pub trait RatingCalculator: Send + Sync {
    /// Win probability of a player rated `rating_a` against one rated `rating_b`
    fn expected_score(&self, rating_a: f64, rating_b: f64) -> f64;

    /// Calculate both players' new ratings from their current ratings and the result
    fn update_ratings(&self, rating_a: f64, rating_b: f64, outcome: MatchOutcome) -> (f64, f64);

    /// Rating for a player with no prior record
    fn initial_rating(&self) -> f64;

    /// Engine configuration in use
    fn config(&self) -> &RatingConfig;
}

/// Elo rating calculator with fixed-point output
#[derive(Debug, Clone)]
pub struct EloRatingCalculator {
    config: RatingConfig,
}

impl EloRatingCalculator {
    /// Create a new Elo rating calculator
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }
}

impl Default for EloRatingCalculator {
    fn default() -> Self {
        Self {
            config: RatingConfig::default(),
        }
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn expected_score(&self, rating_a: f64, rating_b: f64) -> f64 {
        elo::expected_score(rating_a, rating_b)
    }

    fn update_ratings(&self, rating_a: f64, rating_b: f64, outcome: MatchOutcome) -> (f64, f64) {
        let (new_a, new_b) = elo::update_ratings(rating_a, rating_b, outcome, self.config.k_factor);
        let digits = self.config.precision_digits;

        (
            round_to_precision(new_a, digits),
            round_to_precision(new_b, digits),
        )
    }

    fn initial_rating(&self) -> f64 {
        self.config.default_rating
    }

    fn config(&self) -> &RatingConfig {
        &self.config
    }
}
