//! Pairwise Elo rating primitives
//!
//! Thin wrappers over the Elo module of the skillratings crate. These are pure
//! functions: no rounding, no configuration beyond the K-factor.

use crate::types::MatchOutcome;
use skillratings::elo::{EloConfig, EloRating};
use skillratings::Outcomes;

/// Logistic win probability of a player rated `rating_a` against `rating_b`:
/// `1 / (1 + 10^((rating_b - rating_a) / 400))`
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    let (expected_a, _expected_b) = skillratings::elo::expected_score(
        &EloRating { rating: rating_a },
        &EloRating { rating: rating_b },
    );
    expected_a
}

/// Compute both updated ratings after a decided match between A and B.
///
/// The sum of the two ratings is preserved up to floating point error.
pub fn update_ratings(rating_a: f64, rating_b: f64, outcome: MatchOutcome, k: f64) -> (f64, f64) {
    let outcome = match outcome {
        MatchOutcome::PlayerOneWon => Outcomes::WIN,
        MatchOutcome::PlayerTwoWon => Outcomes::LOSS,
    };

    let (new_a, new_b) = skillratings::elo::elo(
        &EloRating { rating: rating_a },
        &EloRating { rating: rating_b },
        &outcome,
        &EloConfig { k },
    );

    (new_a.rating, new_b.rating)
}
