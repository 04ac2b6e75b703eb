//! Scorecard column geometry shared by every drawing routine
//!
//! All values are points on a 612×792 page, measured from the top-left corner
//! of the card.

/// One scorecard column: label and left x-offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub x: f32,
    pub label: &'static str,
}

const fn field(x: f32, label: &'static str) -> Field {
    Field { x, label }
}

/// Columns in increasing x order
pub const FIELDS: [Field; 7] = [
    field(35.0, "Round"),
    field(85.0, "Opponent"),
    field(300.0, "Won"),
    field(335.0, "Lost"),
    field(370.0, "Your Score"),
    field(440.0, "Opp Score"),
    field(510.0, "Spread"),
];

pub const OPPONENT: usize = 1;
pub const WON: usize = 2;
pub const LOST: usize = 3;
pub const YOUR_SCORE: usize = 4;
pub const OPP_SCORE: usize = 5;
pub const SPREAD: usize = 6;

/// Round rows per physical page
pub const ROWS_PER_PAGE: usize = 16;

/// Left edge and width of the ruled grid
pub const GRID_LEFT: f32 = 25.0;
pub const GRID_WIDTH: f32 = 535.0;
pub const GRID_RIGHT: f32 = GRID_LEFT + GRID_WIDTH;

/// Column header row
pub const HEADER_TOP: f32 = 80.0;
pub const HEADER_HEIGHT: f32 = 20.0;
pub const HEADER_BASELINE: f32 = 95.0;

/// Top of the first round row
pub const GRID_TOP: f32 = HEADER_TOP + HEADER_HEIGHT;

/// Column separators sit this far left of the column's text
pub const SEPARATOR_INSET: f32 = 5.0;

const ROW_HEIGHT: f32 = 40.0;

/// Exactly this many rounds uses a tighter row pitch so two cards fit a page
pub const COMPACT_ROUNDS: usize = 8;
const COMPACT_ROW_HEIGHT: f32 = 35.0;

/// Exactly this many rounds spaces the score sub-rows further apart
pub const LOOSE_ROUNDS: usize = 7;

/// Two cards share a page up to this many rounds
pub const TWO_UP_MAX_ROUNDS: usize = 8;

/// Vertical offset of the second card on a two-up page (half a letter page)
pub const TWO_UP_OFFSET: f32 = 396.0;

/// Row pitch for a division with `rounds` rounds
pub fn row_height(rounds: usize) -> f32 {
    if rounds == COMPACT_ROUNDS {
        COMPACT_ROW_HEIGHT
    } else {
        ROW_HEIGHT
    }
}

/// Extra downward shift of the 1st/2nd legend and score sub-rows
pub fn legend_shift(rounds: usize) -> f32 {
    if rounds == LOOSE_ROUNDS {
        5.0
    } else {
        0.0
    }
}

/// Upward shift of the opponent name on compact cards
pub fn name_lift(rounds: usize) -> f32 {
    if rounds == COMPACT_ROUNDS {
        2.0
    } else {
        0.0
    }
}

/// Number of physical pages one player's card spans
pub fn pages_per_card(rounds: usize) -> usize {
    rounds.div_ceil(ROWS_PER_PAGE).max(1)
}

/// Format a spread with an explicit sign, `+0` for zero
pub fn to_spread(value: i32) -> String {
    if value < 0 {
        value.to_string()
    } else {
        format!("+{}", value)
    }
}
