//! Rating store interface and in-memory implementation
//!
//! The batch processor only talks to the [`RatingStore`] trait, so the
//! backing container can be swapped without touching the rating logic.

use crate::types::{PlayerName, RatingMap};
use std::collections::HashMap;

/// Trait for the mutable rating ledger used during a run
pub trait RatingStore {
    /// Current rating of a player, if known
    fn get(&self, player: &str) -> Option<f64>;

    /// Current rating of a player, inserting `default` first if unknown.
    ///
    /// Returns the rating and whether the player was newly registered.
    fn get_or_insert(&mut self, player: &str, default: f64) -> (f64, bool);

    /// Store or overwrite a player's rating
    fn set(&mut self, player: &str, rating: f64);

    /// Copy of the complete mapping
    fn snapshot(&self) -> RatingMap;

    /// Number of known players
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory rating store backed by a HashMap
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryRatingStore {
    ratings: HashMap<PlayerName, f64>,
}

impl InMemoryRatingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the store, returning the mapping
    pub fn into_inner(self) -> RatingMap {
        self.ratings
    }
}

impl From<RatingMap> for InMemoryRatingStore {
    fn from(ratings: RatingMap) -> Self {
        Self { ratings }
    }
}

impl RatingStore for InMemoryRatingStore {
    fn get(&self, player: &str) -> Option<f64> {
        self.ratings.get(player).copied()
    }

    fn get_or_insert(&mut self, player: &str, default: f64) -> (f64, bool) {
        if let Some(rating) = self.ratings.get(player) {
            return (*rating, false);
        }

        self.ratings.insert(player.to_string(), default);
        (default, true)
    }

    fn set(&mut self, player: &str, rating: f64) {
        match self.ratings.get_mut(player) {
            Some(existing) => *existing = rating,
            None => {
                self.ratings.insert(player.to_string(), rating);
            }
        }
    }

    fn snapshot(&self) -> RatingMap {
        self.ratings.clone()
    }

    fn len(&self) -> usize {
        self.ratings.len()
    }
}
