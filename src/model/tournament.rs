use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::BTreeMap;

use super::metadata::TournamentMeta;
use super::pairing::PairingRecord;
use super::standings::StandingsSnapshot;

/// Complete input document: metadata plus the tournament itself
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TournamentData {
    pub meta: TournamentMeta,
    pub t: Tournament,
}

/// Divisions in document order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tournament {
    #[serde(default)]
    pub divisions: IndexMap<String, Division>,
}

/// An independently paired and ranked sub-tournament
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Division {
    pub players: Roster,
    #[serde(default)]
    pub round_controls: Vec<RoundControl>,
    /// Keyed by opaque pairing id; ordered so iteration is deterministic
    #[serde(default)]
    pub pairing_map: BTreeMap<String, PairingRecord>,
    /// Keyed by round number rendered as a string
    #[serde(default)]
    pub standings: BTreeMap<String, StandingsSnapshot>,
}

impl Division {
    pub fn round_count(&self) -> usize {
        self.round_controls.len()
    }

    pub fn player_count(&self) -> usize {
        self.players.persons.len()
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.persons.get(index)
    }

    pub fn standings_for_round(&self, round: u32) -> Option<&StandingsSnapshot> {
        self.standings.get(&round.to_string())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub persons: Vec<Player>,
}

/// Per-round settings. Only the number of rounds matters for scorecards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoundControl {
    #[serde(flatten)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

/// A registered player, identified as `namespace:displayname`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    #[serde(default)]
    pub rating: i32,
}

impl Player {
    pub fn new(id: impl Into<String>, rating: i32) -> Self {
        Self {
            id: id.into(),
            rating,
        }
    }

    /// The text after the last colon of the id
    pub fn display_name(&self) -> &str {
        match self.id.rfind(':') {
            Some(pos) => &self.id[pos + 1..],
            None => &self.id,
        }
    }

    /// The first `len` characters of the id (the whole id if shorter)
    pub fn id_prefix(&self, len: usize) -> &str {
        match self.id.char_indices().nth(len) {
            Some((byte_pos, _)) => &self.id[..byte_pos],
            None => &self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_after_last_colon() {
        let player = Player::new("abc123:conrad", 1500);
        assert_eq!(player.display_name(), "conrad");

        let nested = Player::new("ns:sub:josh", 0);
        assert_eq!(nested.display_name(), "josh");

        let bare = Player::new("anonymous", 0);
        assert_eq!(bare.display_name(), "anonymous");
    }

    #[test]
    fn test_id_prefix() {
        let player = Player::new("xyz:cesar", 0);
        assert_eq!(player.id_prefix(2), "xy");
        assert_eq!(player.id_prefix(4), "xyz:");
        assert_eq!(player.id_prefix(50), "xyz:cesar");
    }

    #[test]
    fn test_rating_defaults_to_zero() {
        let player: Player = serde_json::from_str(r#"{"id": "a:b"}"#).unwrap();
        assert_eq!(player.rating, 0);
    }

    #[test]
    fn test_round_control_accepts_any_fields() {
        let division: Division = serde_json::from_str(
            r#"{
                "players": {"persons": [{"id": "a:one"}]},
                "round_controls": [{"pairing_method": 3, "games_per_round": 1}, {}]
            }"#,
        )
        .unwrap();
        assert_eq!(division.round_count(), 2);
        assert_eq!(division.player_count(), 1);
        assert!(division.pairing_map.is_empty());
    }
}
