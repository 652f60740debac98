//! Common types used throughout the rating service

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Player identity. Names are compared exactly, so distinct spellings are
/// distinct players.
pub type PlayerName = String;

/// Complete rating ledger: player name to current rating
pub type RatingMap = HashMap<PlayerName, f64>;

/// Competition circuit a batch of results belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tour {
    #[serde(rename = "ATP")]
    Atp,
    #[serde(rename = "WTA")]
    Wta,
    #[serde(rename = "ITF")]
    Itf,
}

impl Tour {
    /// All supported tours, in processing order
    pub const ALL: [Tour; 3] = [Tour::Atp, Tour::Wta, Tour::Itf];

    /// Code used by the results provider
    pub fn code(&self) -> &'static str {
        match self {
            Tour::Atp => "ATP",
            Tour::Wta => "WTA",
            Tour::Itf => "ITF",
        }
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Tour {
    type Err = crate::error::RatingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ATP" => Ok(Tour::Atp),
            "WTA" => Ok(Tour::Wta),
            "ITF" => Ok(Tour::Itf),
            other => Err(crate::error::RatingsError::ConfigurationError {
                message: format!("Unknown tour: {}", other),
            }),
        }
    }
}

/// A single match result as supplied by the results feed.
///
/// Every field is optional in the raw feed; other fields of the feed object
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(default)]
    pub player1_name: Option<String>,
    #[serde(default)]
    pub player2_name: Option<String>,
    #[serde(default)]
    pub winner_name: Option<String>,
}

impl MatchRecord {
    /// Build a complete record
    pub fn new(player1: &str, player2: &str, winner: &str) -> Self {
        Self {
            player1_name: Some(player1.to_string()),
            player2_name: Some(player2.to_string()),
            winner_name: Some(winner.to_string()),
        }
    }

    /// Return `(player1, player2, winner)` when all three are present and non-empty
    pub fn participants(&self) -> Option<(&str, &str, &str)> {
        let p1 = non_empty(&self.player1_name)?;
        let p2 = non_empty(&self.player2_name)?;
        let winner = non_empty(&self.winner_name)?;
        Some((p1, p2, winner))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Binary result of a match from the point of view of player one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    PlayerOneWon,
    PlayerTwoWon,
}

impl MatchOutcome {
    /// Actual score for player one (1.0 win, 0.0 loss)
    pub fn score(&self) -> f64 {
        match self {
            MatchOutcome::PlayerOneWon => 1.0,
            MatchOutcome::PlayerTwoWon => 0.0,
        }
    }
}

/// Rating change information for a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player: PlayerName,
    pub old_rating: f64,
    pub new_rating: f64,
}

/// What happened to one match record during batch processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordOutcome {
    /// Ratings of both players were updated
    Applied {
        player_one: RatingChange,
        player_two: RatingChange,
    },
    /// A player or winner field was missing or empty
    SkippedIncomplete,
    /// The winner matched neither player, or both players share a name
    SkippedAmbiguousWinner,
}

impl RecordOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, RecordOutcome::Applied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_parse_and_display() {
        assert_eq!("atp".parse::<Tour>().unwrap(), Tour::Atp);
        assert_eq!(" WTA ".parse::<Tour>().unwrap(), Tour::Wta);
        assert_eq!("Itf".parse::<Tour>().unwrap(), Tour::Itf);
        assert!("challenger".parse::<Tour>().is_err());
        assert_eq!(Tour::Itf.to_string(), "ITF");
    }

    #[test]
    fn test_participants_requires_all_fields() {
        let record = MatchRecord::new("Alice", "Bob", "Alice");
        assert_eq!(record.participants(), Some(("Alice", "Bob", "Alice")));

        let mut missing_winner = record.clone();
        missing_winner.winner_name = None;
        assert!(missing_winner.participants().is_none());

        let mut empty_player = record.clone();
        empty_player.player2_name = Some(String::new());
        assert!(empty_player.participants().is_none());
    }

    #[test]
    fn test_record_ignores_unknown_feed_fields() {
        let raw = r#"{"player1_name":"A","player2_name":"B","winner_name":"B","round":"R32"}"#;
        let record: MatchRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record, MatchRecord::new("A", "B", "B"));

        let partial: MatchRecord = serde_json::from_str(r#"{"player1_name":null}"#).unwrap();
        assert_eq!(partial, MatchRecord::default());
    }

    #[test]
    fn test_outcome_score() {
        assert_eq!(MatchOutcome::PlayerOneWon.score(), 1.0);
        assert_eq!(MatchOutcome::PlayerTwoWon.score(), 0.0);
    }
}
