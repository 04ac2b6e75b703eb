//! Card header: seed badge, player name, tournament name, logo and QR code

use crate::error::RenderError;
use crate::model::Player;
use crate::render::canvas::{Canvas, RasterImage};

/// QR code position and scale (the top-right corner of the card)
pub const QR_X: f32 = 490.0;
pub const QR_Y: f32 = 6.0;
pub const QR_SCALE: f32 = 0.20;

/// Logo box, kept clear of the QR code with a 10pt margin
const LOGO_X: f32 = 375.0;
const LOGO_Y: f32 = 10.0;
const LOGO_MAX_HEIGHT: f32 = 70.0;
const LOGO_MAX_WIDTH: f32 = 105.0;

const BADGE_CENTER: f32 = 50.0;
const BADGE_RADIUS: f32 = 25.0;
const BADGE_TEXT_X: f32 = 45.0;
const WIDE_BADGE_TEXT_X: f32 = 40.0;

const NAME_X: f32 = 25.0;
const SEEDED_NAME_X: f32 = 80.0;
const NAME_BASELINE: f32 = 56.0;
const TOURNAMENT_BASELINE: f32 = 76.0;

const NAME_FONT_SIZE: f32 = 20.0;
const TEXT_FONT_SIZE: f32 = 12.0;

const QR_PROMPT: &str = "Enter scores and view standings:";
const QR_PROMPT_X: f32 = 300.0;
const QR_PROMPT_Y: f32 = 75.0;

/// Scale that fits an image inside the logo box without distortion
pub fn logo_scale(image: &RasterImage) -> f32 {
    let height_scale = LOGO_MAX_HEIGHT / image.height as f32;
    let width_scale = LOGO_MAX_WIDTH / image.width as f32;
    height_scale.min(width_scale)
}

/// Draws the block above the column header row
pub struct CardHeaderRenderer<'a> {
    tournament_name: &'a str,
    logo: Option<&'a RasterImage>,
    /// A logo location was given, whether or not it loaded
    logo_configured: bool,
    show_seeds: bool,
    show_qrcode: bool,
}

impl<'a> CardHeaderRenderer<'a> {
    pub fn new(tournament_name: &'a str, logo: Option<&'a RasterImage>) -> Self {
        Self {
            tournament_name,
            logo,
            logo_configured: logo.is_some(),
            show_seeds: true,
            show_qrcode: true,
        }
    }

    pub fn seeds(mut self, show: bool) -> Self {
        self.show_seeds = show;
        self
    }

    pub fn logo_configured(mut self, configured: bool) -> Self {
        self.logo_configured = configured || self.logo.is_some();
        self
    }

    pub fn qrcode(mut self, show: bool) -> Self {
        self.show_qrcode = show;
        self
    }

    /// Place an already-encoded QR code in the corner of the card
    pub fn draw_qr<C: Canvas>(&self, canvas: &mut C, qr: &RasterImage) -> Result<(), RenderError> {
        canvas.draw_image(qr, QR_X, QR_Y, QR_SCALE)
    }

    /// Header for the player at roster index `seed_index`
    pub fn draw<C: Canvas>(
        &self,
        canvas: &mut C,
        player: &Player,
        seed_index: usize,
    ) -> Result<(), RenderError> {
        let mut name_x = NAME_X;
        if self.show_seeds {
            canvas.stroke_circle(BADGE_CENTER, BADGE_CENTER, BADGE_RADIUS);
            let seed = (seed_index + 1).to_string();
            let x = if seed.len() > 1 {
                WIDE_BADGE_TEXT_X
            } else {
                BADGE_TEXT_X
            };
            canvas.show_text(x, NAME_BASELINE, NAME_FONT_SIZE, &seed);
            name_x = SEEDED_NAME_X;
        }

        canvas.show_text(name_x, TOURNAMENT_BASELINE, TEXT_FONT_SIZE, self.tournament_name);

        match self.logo {
            Some(logo) => canvas.draw_image(logo, LOGO_X, LOGO_Y, logo_scale(logo))?,
            None if self.show_qrcode && !self.logo_configured => {
                canvas.show_text(QR_PROMPT_X, QR_PROMPT_Y, TEXT_FONT_SIZE, QR_PROMPT)
            }
            None => {}
        }

        let name = format!("{}  ({})", player.display_name(), player.rating);
        canvas.show_text(name_x, NAME_BASELINE, NAME_FONT_SIZE, &name);
        Ok(())
    }
}
