use crate::cli::Args;

use super::defaults::*;

/// Runtime settings for scorecard generation
#[derive(Debug, Clone)]
pub struct Settings {
    // Page dimensions (points)
    pub page_width: f32,
    pub page_height: f32,

    // Display options
    /// Draw historical opponents, scores, and standings
    pub show_opponents: bool,
    /// Draw seed badges next to player and opponent names
    pub show_seeds: bool,
    /// Stamp each card with a QR code linking to the live results page
    pub show_qrcode: bool,

    // QR code URLs
    pub qr_host: String,
    /// Starting truncation length for player ids in QR URLs (at least 1)
    pub url_trunc: usize,

    /// Size ceiling for tournament logos in bytes
    pub max_logo_bytes: usize,

    /// Compress PDF streams after generation
    pub compress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH_PT,
            page_height: PAGE_HEIGHT_PT,

            show_opponents: true,
            show_seeds: true,
            show_qrcode: true,

            qr_host: DEFAULT_QR_HOST.to_string(),
            url_trunc: DEFAULT_URL_TRUNC,

            max_logo_bytes: DEFAULT_MAX_LOGO_BYTES,

            compress: true,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            show_opponents: args.show_opponents(),
            show_seeds: args.show_seeds(),
            show_qrcode: args.show_qrcode(),
            qr_host: args.qr_host.clone(),
            url_trunc: (args.url_trunc as usize).max(1),
            compress: !args.no_compress,
            ..Default::default()
        }
    }

    pub fn with_opponents(mut self, show: bool) -> Self {
        self.show_opponents = show;
        self
    }

    pub fn with_seeds(mut self, show: bool) -> Self {
        self.show_seeds = show;
        self
    }

    pub fn with_qrcode(mut self, show: bool) -> Self {
        self.show_qrcode = show;
        self
    }

    pub fn with_url_trunc(mut self, trunc: usize) -> Self {
        self.url_trunc = trunc.max(1);
        self
    }

    /// Build the QR URL for a tournament slug and player-id prefix
    pub fn qr_url(&self, slug: &str, id_prefix: &str) -> String {
        if slug.starts_with('/') {
            format!("https://{}{}?es={}", self.qr_host, slug, id_prefix)
        } else {
            format!("https://{}/{}?es={}", self.qr_host, slug, id_prefix)
        }
    }
}
