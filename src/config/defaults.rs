/// Letter page width in points (8.5in at 72 units per inch)
pub const PAGE_WIDTH_PT: f32 = 612.0;

/// Letter page height in points (11in)
pub const PAGE_HEIGHT_PT: f32 = 792.0;

/// Host used to build QR code URLs
pub const DEFAULT_QR_HOST: &str = "woogles.io";

/// Initial number of player-id characters used in QR code URLs
pub const DEFAULT_URL_TRUNC: usize = 2;

/// Logos larger than this are skipped
pub const DEFAULT_MAX_LOGO_BYTES: usize = 1024 * 1024;
