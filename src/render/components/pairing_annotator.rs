//! Pairing annotations for a player's round rows
//!
//! Resolves each known pairing of a player into the opponent, the 1st/2nd
//! marker, and (for scored games) the game score plus the standings as of that
//! round, then draws them into the ruled grid.

use crate::error::InputError;
use crate::model::Division;
use crate::render::canvas::Canvas;

use super::field_layout::{
    legend_shift, name_lift, row_height, to_spread, FIELDS, LOST, OPP_SCORE, ROWS_PER_PAGE,
    SPREAD, WON, YOUR_SCORE,
};

const FONT_SIZE: f32 = 12.0;
const MARKER_RADIUS: f32 = 8.0;
const FIRST_MARKER_X: f32 = 40.0;
const SECOND_MARKER_X: f32 = 70.0;

/// Opponent seed column, nudged left for two-digit seeds
const SEED_X: f32 = 97.0;
const WIDE_SEED_X: f32 = 93.0;
const SEEDED_NAME_X: f32 = 140.0;

/// Everything drawn for one pairing on one row
#[derive(Debug, Clone, PartialEq)]
pub struct RowAnnotation {
    /// Zero-based round of the pairing
    pub round: u32,
    /// Roster index of the opponent; the player's own index for a self-pairing
    pub opponent: usize,
    /// Opponent display name, or the titlecased outcome for a self-pairing
    pub label: String,
    pub first: bool,
    pub score: Option<ScoreLine>,
}

/// Numeric columns of a scored game
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLine {
    pub own: i32,
    pub opp: i32,
    /// Standing as of this round; `None` when the player has no row in it
    pub standing: Option<Standing>,
}

impl ScoreLine {
    pub fn spread(&self) -> String {
        to_spread(self.own - self.opp)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub wins: String,
    pub losses: String,
    /// Cumulative spread text, omitted for the first round
    pub spread: Option<String>,
}

/// Resolve every pairing of `player` displayable on the page starting at round
/// `offset`
pub fn resolve_annotations(
    division: &Division,
    division_name: &str,
    player: usize,
    offset: usize,
) -> Result<Vec<RowAnnotation>, InputError> {
    let player_id = division.player(player).map(|p| p.id.as_str()).unwrap_or("");
    let mut rows = Vec::new();

    for (pairing_id, record) in &division.pairing_map {
        if !record.involves(player) {
            continue;
        }
        let slot = record.round as i64 - offset as i64;
        if slot < 0 || slot >= ROWS_PER_PAGE as i64 {
            continue;
        }

        let seating = record.seating(player);
        let (opponent, label) = match seating.opponent {
            Some(opp) => {
                let name = division
                    .player(opp)
                    .map(|p| p.display_name().to_string())
                    .ok_or_else(|| InputError::PlayerIndexOutOfRange {
                        division: division_name.to_string(),
                        pairing: pairing_id.clone(),
                        index: opp,
                        count: division.player_count(),
                    })?;
                (opp, name)
            }
            None => (player, record.outcome_label()),
        };

        let score = if record.is_scored_game(player) {
            let (lead, second) = record.game_scores().ok_or_else(|| InputError::MissingScores {
                division: division_name.to_string(),
                pairing: pairing_id.clone(),
            })?;
            let (own, opp) = if seating.first {
                (lead, second)
            } else {
                (second, lead)
            };

            let snapshot = division.standings_for_round(record.round).ok_or_else(|| {
                InputError::MissingStandings {
                    division: division_name.to_string(),
                    round: record.round,
                }
            })?;
            let standing = snapshot.row_for(player_id).map(|row| {
                let (wins, losses) = row.record();
                Standing {
                    wins,
                    losses,
                    spread: (record.round > 0).then(|| to_spread(row.spread)),
                }
            });

            Some(ScoreLine { own, opp, standing })
        } else {
            None
        };

        rows.push(RowAnnotation {
            round: record.round,
            opponent,
            label,
            first: seating.first,
            score,
        });
    }

    Ok(rows)
}

/// Draws resolved annotations into a card's round grid
pub struct PairingAnnotator {
    show_seeds: bool,
    rounds: usize,
}

impl PairingAnnotator {
    pub fn new(show_seeds: bool, rounds: usize) -> Self {
        Self { show_seeds, rounds }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, annotations: &[RowAnnotation], offset: usize) {
        for annotation in annotations {
            self.draw_one(canvas, annotation, offset);
        }
    }

    fn draw_one<C: Canvas>(&self, canvas: &mut C, row: &RowAnnotation, offset: usize) {
        let pitch = row_height(self.rounds);
        let slot = (row.round as usize - offset) as f32;

        let name_y = 125.0 + slot * pitch - name_lift(self.rounds);
        let seed = (row.opponent + 1).to_string();
        let seed_x = if seed.len() > 1 { WIDE_SEED_X } else { SEED_X };
        if self.show_seeds {
            canvas.show_text(seed_x, name_y, FONT_SIZE, &seed);
            canvas.show_text(SEEDED_NAME_X, name_y, FONT_SIZE, &row.label);
        } else {
            canvas.show_text(seed_x, name_y, FONT_SIZE, &row.label);
        }

        let y = 130.0 + slot * pitch + legend_shift(self.rounds) - 2.0;
        let marker_x = if row.first {
            FIRST_MARKER_X
        } else {
            SECOND_MARKER_X
        };
        canvas.stroke_circle(marker_x, y, MARKER_RADIUS);

        let Some(score) = &row.score else {
            return;
        };

        // Later rounds split the right-hand cells; the game result goes on top
        let own_y = y - 8.0;
        let opp_y = if row.round != 0 { y - 15.0 } else { own_y };

        canvas.show_text(FIELDS[YOUR_SCORE].x + 20.0, own_y, FONT_SIZE, &score.own.to_string());
        canvas.show_text(FIELDS[OPP_SCORE].x + 20.0, opp_y, FONT_SIZE, &score.opp.to_string());
        canvas.show_text(FIELDS[SPREAD].x + 10.0, opp_y, FONT_SIZE, &score.spread());

        if let Some(standing) = &score.standing {
            if let Some(spread) = &standing.spread {
                canvas.show_text(FIELDS[SPREAD].x + 10.0, y + 5.0, FONT_SIZE, spread);
            }
            canvas.show_text(FIELDS[WON].x + 5.0, own_y, FONT_SIZE, &standing.wins);
            canvas.show_text(FIELDS[LOST].x + 5.0, own_y, FONT_SIZE, &standing.losses);
        }
    }
}
