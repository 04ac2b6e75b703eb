//! Column header row and ruled round rows of a scorecard

use crate::render::canvas::Canvas;

use super::field_layout::{
    legend_shift, row_height, FIELDS, GRID_LEFT, GRID_RIGHT, GRID_TOP, GRID_WIDTH,
    HEADER_BASELINE, HEADER_HEIGHT, HEADER_TOP, OPP_SCORE, SEPARATOR_INSET, SPREAD,
};

const LABEL_FONT_SIZE: f32 = 12.0;
const ROUND_FONT_SIZE: f32 = 18.0;
const LEGEND_FONT_SIZE: f32 = 8.0;

const ROUND_X: f32 = 50.0;
const WIDE_ROUND_X: f32 = 45.0;
const LEGEND_X: f32 = 35.0;
const SEED_RING_X: f32 = 100.0;

/// Renderer for the ruled part of a card
pub struct RoundGridRenderer {
    rounds: usize,
    show_seeds: bool,
}

impl RoundGridRenderer {
    pub fn new(rounds: usize, show_seeds: bool) -> Self {
        Self { rounds, show_seeds }
    }

    /// Boxed column labels with a separator before every column but the first
    pub fn draw_header<C: Canvas>(&self, canvas: &mut C) {
        canvas.stroke_rect(GRID_LEFT, HEADER_TOP, GRID_WIDTH, HEADER_HEIGHT);

        for field in &FIELDS {
            canvas.show_text(field.x, HEADER_BASELINE, LABEL_FONT_SIZE, field.label);
        }
        for field in &FIELDS[1..] {
            let x = field.x - SEPARATOR_INSET;
            canvas.stroke_line(x, HEADER_TOP, x, HEADER_TOP + HEADER_HEIGHT);
        }
    }

    /// One round row; `round` is zero-based, `offset` is the first round on this page
    pub fn draw_row<C: Canvas>(&self, canvas: &mut C, round: usize, offset: usize) {
        let pitch = row_height(self.rounds);
        let slot = (round - offset) as f32;
        let top = GRID_TOP + slot * pitch;

        canvas.stroke_rect(GRID_LEFT, top, GRID_WIDTH, pitch);
        if self.show_seeds {
            // Ring for the opponent's seed number
            canvas.stroke_circle(SEED_RING_X, top + pitch / 2.0, (pitch - 4.0) / 2.0);
        }

        let number = (round + 1).to_string();
        let number_x = if round + 1 >= 10 { WIDE_ROUND_X } else { ROUND_X };
        canvas.show_text(number_x, 125.0 + slot * pitch, ROUND_FONT_SIZE, &number);
        canvas.show_text(
            LEGEND_X,
            130.0 + slot * pitch + legend_shift(self.rounds),
            LEGEND_FONT_SIZE,
            "1st        2nd",
        );

        // After the first round the spread cell is split to hold the running total
        let full_height = if round == 0 { FIELDS.len() } else { SPREAD };
        for field in &FIELDS[1..full_height] {
            let x = field.x - SEPARATOR_INSET;
            canvas.stroke_line(x, top, x, top + pitch);
        }

        if round > 0 {
            let middle = top + pitch / 2.0;
            let spread_x = FIELDS[SPREAD].x - SEPARATOR_INSET;
            canvas.stroke_line(spread_x, top, spread_x, middle);

            let opp_x = FIELDS[OPP_SCORE].x;
            canvas.stroke_line(opp_x - SEPARATOR_INSET, middle, GRID_RIGHT, middle);
            canvas.show_text(
                opp_x - 2.0,
                top + 7.0 * (pitch / 8.0),
                LABEL_FONT_SIZE,
                "Cumulative:",
            );
        }
    }
}
