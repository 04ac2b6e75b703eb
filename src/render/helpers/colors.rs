use printpdf::Rgb;

/// Ink color for all scorecard strokes and text
pub const BLACK: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    icc_profile: None,
};

/// Line width for grid strokes in points
pub const LINE_WIDTH: f32 = 1.0;
