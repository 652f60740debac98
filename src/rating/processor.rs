//! Match batch processing
//!
//! Folds an ordered batch of match records into a rating store. Records are
//! applied strictly in the order received; each record sees the ratings left
//! by the records before it.

use crate::rating::calculator::RatingCalculator;
use crate::rating::storage::RatingStore;
use crate::types::{MatchOutcome, MatchRecord, RatingChange, RecordOutcome};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Totals for one processed batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub records: usize,
    pub applied: usize,
    pub skipped_incomplete: usize,
    pub skipped_ambiguous_winner: usize,
    pub players_registered: usize,
}

impl BatchSummary {
    pub fn skipped(&self) -> usize {
        self.skipped_incomplete + self.skipped_ambiguous_winner
    }

    fn record(&mut self, outcome: &RecordOutcome) {
        self.records += 1;
        match outcome {
            RecordOutcome::Applied { .. } => self.applied += 1,
            RecordOutcome::SkippedIncomplete => self.skipped_incomplete += 1,
            RecordOutcome::SkippedAmbiguousWinner => self.skipped_ambiguous_winner += 1,
        }
    }
}

/// Applies match records to a rating store through a rating calculator
#[derive(Debug, Clone)]
pub struct MatchBatchProcessor<C> {
    calculator: C,
}

impl<C: RatingCalculator> MatchBatchProcessor<C> {
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }

    /// Apply every record in order, returning the batch totals
    pub fn process_batch(
        &self,
        store: &mut dyn RatingStore,
        records: &[MatchRecord],
    ) -> BatchSummary {
        let mut summary = BatchSummary::default();
        let players_before = store.len();

        for record in records {
            let outcome = self.process_record(store, record);
            summary.record(&outcome);
        }

        summary.players_registered = store.len().saturating_sub(players_before);
        summary
    }

    /// Apply a single record, reporting what happened to it
    pub fn process_record(
        &self,
        store: &mut dyn RatingStore,
        record: &MatchRecord,
    ) -> RecordOutcome {
        let Some((p1, p2, winner)) = record.participants() else {
            debug!("Skipping incomplete match record: {:?}", record);
            return RecordOutcome::SkippedIncomplete;
        };

        let outcome = if p1 == p2 {
            None
        } else if winner == p1 {
            Some(MatchOutcome::PlayerOneWon)
        } else if winner == p2 {
            Some(MatchOutcome::PlayerTwoWon)
        } else {
            None
        };

        let register = outcome.is_some() || self.calculator.config().register_unresolved_players;
        let default_rating = self.calculator.initial_rating();
        let (rating_one, rating_two) = if register {
            (
                store.get_or_insert(p1, default_rating).0,
                store.get_or_insert(p2, default_rating).0,
            )
        } else {
            (default_rating, default_rating)
        };

        let Some(outcome) = outcome else {
            debug!("Skipping {} vs {}: unresolved winner {}", p1, p2, winner);
            return RecordOutcome::SkippedAmbiguousWinner;
        };

        let (new_one, new_two) = self
            .calculator
            .update_ratings(rating_one, rating_two, outcome);
        store.set(p1, new_one);
        store.set(p2, new_two);

        debug!(
            "{} vs {} -> {}: {} {} -> {}, {} {} -> {}",
            p1, p2, winner, p1, rating_one, new_one, p2, rating_two, new_two
        );

        RecordOutcome::Applied {
            player_one: RatingChange {
                player: p1.to_string(),
                old_rating: rating_one,
                new_rating: new_one,
            },
            player_two: RatingChange {
                player: p2.to_string(),
                old_rating: rating_two,
                new_rating: new_two,
            },
        }
    }
}
