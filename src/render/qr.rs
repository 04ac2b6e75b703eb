//! QR code synthesis for per-player result links

use qrcode::{Color, EcLevel, QrCode, Version};

use crate::error::RenderError;

use super::canvas::{RasterFormat, RasterImage};

/// Modules of white border around the symbol
const QUIET_ZONE: usize = 4;

const DARK: u8 = 0;
const LIGHT: u8 = 255;

/// Produces a scannable image for a URL
pub trait QrEncoder {
    fn encode(&self, url: &str) -> Result<RasterImage, RenderError>;
}

/// Encoder backed by the `qrcode` crate at error-correction level L
#[derive(Debug, Default, Clone, Copy)]
pub struct QrCodeEncoder;

/// Pixel size of one module for a symbol version, `None` when the symbol is too
/// large to print legibly at the fixed card size
pub fn module_size(version: i16) -> Option<usize> {
    match version {
        ..=3 => Some(10),
        4 => Some(9),
        5 => Some(8),
        _ => None,
    }
}

impl QrEncoder for QrCodeEncoder {
    fn encode(&self, url: &str) -> Result<RasterImage, RenderError> {
        let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::L)
            .map_err(|e| RenderError::QrEncode(e.to_string()))?;

        let version = match code.version() {
            Version::Normal(v) | Version::Micro(v) => v,
        };
        let box_size = module_size(version).ok_or_else(|| RenderError::QrPayloadTooLarge {
            url: url.to_string(),
            len: url.len(),
            version,
        })?;

        let modules = code.width();
        let colors = code.to_colors();
        let side = (modules + 2 * QUIET_ZONE) * box_size;

        let mut pixels = vec![LIGHT; side * side];
        for (i, color) in colors.iter().enumerate() {
            if *color != Color::Dark {
                continue;
            }
            let left = (i % modules + QUIET_ZONE) * box_size;
            let top = (i / modules + QUIET_ZONE) * box_size;
            for row in top..top + box_size {
                pixels[row * side + left..row * side + left + box_size].fill(DARK);
            }
        }

        Ok(RasterImage::new(
            url,
            side as u32,
            side as u32,
            RasterFormat::Luma8,
            pixels,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_sizes() {
        assert_eq!(module_size(1), Some(10));
        assert_eq!(module_size(3), Some(10));
        assert_eq!(module_size(4), Some(9));
        assert_eq!(module_size(5), Some(8));
        assert_eq!(module_size(6), None);
    }

    #[test]
    fn test_short_url_encodes() {
        let image = QrCodeEncoder
            .encode("https://woogles.io/tournament/spring?es=ab")
            .unwrap();
        assert_eq!(image.key, "https://woogles.io/tournament/spring?es=ab");
        assert_eq!(image.width, image.height);
        assert_eq!(image.format, RasterFormat::Luma8);
        // Quiet zone corner stays white, finder pattern corner is dark
        assert_eq!(image.pixels[0], LIGHT);
        let finder = (QUIET_ZONE * 10) * image.width as usize + QUIET_ZONE * 10;
        assert_eq!(image.pixels[finder], DARK);
    }

    #[test]
    fn test_long_url_rejected() {
        let url = format!("https://woogles.io/tournament/{}?es=ab", "x".repeat(200));
        let err = QrCodeEncoder.encode(&url).unwrap_err();
        assert!(matches!(err, RenderError::QrPayloadTooLarge { .. }));
    }
}
