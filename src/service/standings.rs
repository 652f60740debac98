//! Read-only view of the rating ledger

use crate::types::{PlayerName, RatingMap};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One row of the standings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub rank: usize,
    pub player: PlayerName,
    pub rating: f64,
}

/// Ratings sorted by rating descending, ties broken by name
pub fn standings(ratings: &RatingMap, limit: Option<usize>) -> Vec<Standing> {
    let mut rows: Vec<(&PlayerName, f64)> = ratings.iter().map(|(p, r)| (p, *r)).collect();
    rows.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    if let Some(limit) = limit {
        rows.truncate(limit);
    }

    rows.into_iter()
        .enumerate()
        .map(|(i, (player, rating))| Standing {
            rank: i + 1,
            player: player.clone(),
            rating,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings() -> RatingMap {
        RatingMap::from([
            ("Bob".to_string(), 996.0),
            ("Alice".to_string(), 1007.95),
            ("Dan".to_string(), 996.0),
            ("Carol".to_string(), 996.05),
        ])
    }

    #[test]
    fn test_sorted_by_rating_descending() {
        let rows = standings(&ratings(), None);
        let names: Vec<&str> = rows.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol", "Bob", "Dan"]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[3].rank, 4);
    }

    #[test]
    fn test_limit() {
        let rows = standings(&ratings(), Some(2));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].player, "Carol");
        assert!(standings(&RatingMap::new(), Some(5)).is_empty());
    }
}
