use serde::Deserialize;

/// Outcomes that carry a numeric game score
const SCORED_OUTCOMES: [&str; 3] = ["WIN", "LOSS", "DRAW"];

/// Who played whom (or a bye/forfeit) in a given round
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PairingRecord {
    /// Roster indices; a self-pairing lists the same index twice
    pub players: Vec<usize>,
    /// Zero-based round number
    #[serde(default)]
    pub round: u32,
    /// One outcome per listed player, e.g. `WIN`, `LOSS`, `BYE`
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub games: Vec<GameResult>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GameResult {
    /// Scores in the same order as `PairingRecord::players`
    #[serde(default)]
    pub scores: Vec<i32>,
}

/// Where a player sat in a pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seating {
    /// `None` for a self-pairing
    pub opponent: Option<usize>,
    /// True unless the opponent occupies the lead slot of the record
    pub first: bool,
}

impl PairingRecord {
    pub fn involves(&self, player: usize) -> bool {
        self.players.contains(&player)
    }

    /// Resolve the opponent and first/second marker for `player`
    pub fn seating(&self, player: usize) -> Seating {
        let mut seating = Seating {
            opponent: None,
            first: true,
        };
        for (place, &paired) in self.players.iter().enumerate() {
            if paired != player {
                seating.opponent = Some(paired);
                if place == 0 {
                    seating.first = false;
                }
            }
        }
        seating
    }

    /// A real game between two distinct players with a recorded result (not a
    /// bye, forfeit, self-pairing or unplayed pairing)
    pub fn is_scored_game(&self, player: usize) -> bool {
        self.seating(player).opponent.is_some()
            && self.outcomes.len() == 2
            && SCORED_OUTCOMES.contains(&self.outcomes[0].as_str())
    }

    /// Scores of the first game as `(lead slot, second slot)`
    pub fn game_scores(&self) -> Option<(i32, i32)> {
        let game = self.games.first()?;
        match game.scores.as_slice() {
            [a, b, ..] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Label shown in place of an opponent name for a self-pairing
    pub fn outcome_label(&self) -> String {
        self.outcomes
            .first()
            .map(|o| title_case(o))
            .unwrap_or_default()
    }
}

/// Capitalize the first letter of every alphabetic run and lowercase the rest,
/// so `BYE` becomes `Bye` and `FORFEIT_LOSS` becomes `Forfeit_Loss`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(players: Vec<usize>, outcomes: &[&str]) -> PairingRecord {
        PairingRecord {
            players,
            round: 0,
            outcomes: outcomes.iter().map(|s| s.to_string()).collect(),
            games: vec![GameResult {
                scores: vec![400, 350],
            }],
        }
    }

    #[test]
    fn test_seating_lead_slot() {
        let rec = record(vec![0, 1], &["WIN", "LOSS"]);
        assert_eq!(
            rec.seating(0),
            Seating {
                opponent: Some(1),
                first: true
            }
        );
        assert_eq!(
            rec.seating(1),
            Seating {
                opponent: Some(0),
                first: false
            }
        );
    }

    #[test]
    fn test_seating_self_pairing() {
        let rec = record(vec![3, 3], &["BYE", "BYE"]);
        let seating = rec.seating(3);
        assert_eq!(seating.opponent, None);
        assert!(seating.first);
    }

    #[test]
    fn test_scored_game_detection() {
        assert!(record(vec![0, 1], &["WIN", "LOSS"]).is_scored_game(0));
        assert!(record(vec![0, 1], &["DRAW", "DRAW"]).is_scored_game(1));
        assert!(!record(vec![2, 2], &["BYE", "BYE"]).is_scored_game(2));
        assert!(!record(vec![0, 1], &["NONE", "NONE"]).is_scored_game(0));
        assert!(!record(vec![0, 1], &[]).is_scored_game(0));
        assert!(!record(vec![0, 1], &["WIN"]).is_scored_game(0));
    }

    #[test]
    fn test_self_pairing_never_scored() {
        assert!(!record(vec![0, 0], &["WIN", "WIN"]).is_scored_game(0));
        assert!(!record(vec![4, 4], &["DRAW", "DRAW"]).is_scored_game(4));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("BYE"), "Bye");
        assert_eq!(title_case("FORFEIT_LOSS"), "Forfeit_Loss");
        assert_eq!(title_case("void"), "Void");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_round_defaults_to_zero() {
        let rec: PairingRecord = serde_json::from_str(
            r#"{"players": [0, 1], "outcomes": ["WIN", "LOSS"], "games": [{"scores": [400, 350]}]}"#,
        )
        .unwrap();
        assert_eq!(rec.round, 0);
        assert_eq!(rec.game_scores(), Some((400, 350)));
    }
}
