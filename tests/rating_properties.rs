//! Property tests for the rating engine, batch processor and snapshot storage

use proptest::collection::{hash_map, vec};
use proptest::prelude::*;
use tennis_ratings::rating::{expected_score, update_ratings};
use tennis_ratings::types::{MatchOutcome, MatchRecord, RatingMap};
use tennis_ratings::{
    EloRatingCalculator, InMemoryRatingStore, JsonFileStorage, MatchBatchProcessor,
    RatingCalculator, RatingStore, SnapshotStorage,
};

fn rating() -> impl Strategy<Value = f64> {
    0.0f64..4000.0
}

fn outcome() -> impl Strategy<Value = MatchOutcome> {
    prop_oneof![
        Just(MatchOutcome::PlayerOneWon),
        Just(MatchOutcome::PlayerTwoWon)
    ]
}

fn player() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Alice", "Bob", "Carol", "Dan", "Eve"]).prop_map(str::to_string)
}

fn record() -> impl Strategy<Value = MatchRecord> {
    (player(), player(), prop::option::of(player())).prop_map(|(p1, p2, winner)| MatchRecord {
        player1_name: Some(p1),
        player2_name: Some(p2),
        winner_name: winner,
    })
}

proptest! {
    #[test]
    fn expected_scores_are_complementary(a in rating(), b in rating()) {
        let total = expected_score(a, b) + expected_score(b, a);
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn expected_score_is_a_probability(a in rating(), b in rating()) {
        let e = expected_score(a, b);
        prop_assert!(e > 0.0 && e < 1.0);
    }

    #[test]
    fn equal_ratings_are_even(a in rating()) {
        prop_assert_eq!(expected_score(a, a), 0.5);
    }

    #[test]
    fn rounded_update_nearly_conserves_total(a in rating(), b in rating(), outcome in outcome()) {
        let calculator = EloRatingCalculator::default();
        let (new_a, new_b) = calculator.update_ratings(a, b, outcome);
        prop_assert!(((new_a + new_b) - (a + b)).abs() <= 0.01 + 1e-9);
    }

    #[test]
    fn winner_never_loses_rating(a in rating(), b in rating()) {
        let (new_a, new_b) = update_ratings(a, b, MatchOutcome::PlayerOneWon, 8.0);
        prop_assert!(new_a >= a);
        prop_assert!(new_b <= b);
    }

    #[test]
    fn delta_is_linear_in_k(a in rating(), b in rating(), outcome in outcome(), k in 1.0f64..64.0) {
        let (unit_a, _) = update_ratings(a, b, outcome, 1.0);
        let (scaled_a, _) = update_ratings(a, b, outcome, k);
        prop_assert!(((scaled_a - a) - k * (unit_a - a)).abs() < 1e-6);
    }

    #[test]
    fn empty_batch_leaves_store_unchanged(ratings in hash_map("[a-z]{1,8}", rating(), 0..20)) {
        let processor = MatchBatchProcessor::new(EloRatingCalculator::default());
        let mut store = InMemoryRatingStore::from(ratings.clone());
        processor.process_batch(&mut store, &[]);
        prop_assert_eq!(store.snapshot(), ratings);
    }

    #[test]
    fn unresolved_winner_changes_no_rating(existing in rating(), p1 in player(), p2 in player()) {
        let processor = MatchBatchProcessor::new(EloRatingCalculator::default());
        let mut store = InMemoryRatingStore::from(RatingMap::from([(p1.clone(), existing)]));

        processor.process_record(&mut store, &MatchRecord::new(&p1, &p2, "Nobody"));

        prop_assert_eq!(store.get(&p1), Some(existing));
        if p1 != p2 {
            prop_assert_eq!(store.get(&p2), Some(1000.0));
        }
    }

    #[test]
    fn every_named_player_is_registered(records in vec(record(), 0..30)) {
        let processor = MatchBatchProcessor::new(EloRatingCalculator::default());
        let mut store = InMemoryRatingStore::new();
        processor.process_batch(&mut store, &records);

        for r in records.iter().filter(|r| r.participants().is_some()) {
            prop_assert!(store.get(r.player1_name.as_deref().unwrap()).is_some());
            prop_assert!(store.get(r.player2_name.as_deref().unwrap()).is_some());
        }
    }

    #[test]
    fn batch_processing_is_deterministic(records in vec(record(), 0..30)) {
        let processor = MatchBatchProcessor::new(EloRatingCalculator::default());
        let mut first = InMemoryRatingStore::new();
        let mut second = InMemoryRatingStore::new();

        let summary_first = processor.process_batch(&mut first, &records);
        let summary_second = processor.process_batch(&mut second, &records);

        prop_assert_eq!(summary_first, summary_second);
        prop_assert_eq!(first.snapshot(), second.snapshot());
    }

    #[test]
    fn snapshot_round_trips(ratings in hash_map(".{0,12}", -5000.0f64..5000.0, 0..30)) {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("ratings.json"));
        storage.save(&ratings).unwrap();
        prop_assert_eq!(storage.load().unwrap(), ratings);
    }
}

#[test]
fn order_of_matches_changes_result() {
    let processor = MatchBatchProcessor::new(EloRatingCalculator::default());
    let records = [
        MatchRecord::new("A", "B", "A"),
        MatchRecord::new("A", "C", "C"),
    ];

    let mut forward = InMemoryRatingStore::new();
    processor.process_batch(&mut forward, &records);
    let mut backward = InMemoryRatingStore::new();
    processor.process_batch(&mut backward, &[records[1].clone(), records[0].clone()]);

    assert_eq!(forward.get("A"), Some(999.95));
    assert_eq!(backward.get("A"), Some(1000.05));
}
