//! Tournament logo loading
//!
//! Logos are optional decoration: every failure here is logged and the card is
//! drawn without a logo.

use image::{DynamicImage, ImageFormat, Rgba};
use std::fs::File;
use std::io::Read;

use crate::error::LogoError;

use super::canvas::{RasterFormat, RasterImage};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Non-PNG logos are shrunk to fit this box before use
const THUMBNAIL_MAX_PX: u32 = 300;

/// Retrieves raw logo bytes from a URL or path
pub trait LogoFetcher {
    /// Reads at most `max_bytes + 1` bytes, enough for the caller to detect an
    /// oversized logo without holding all of it
    fn fetch(&self, location: &str, max_bytes: usize) -> Result<Vec<u8>, LogoError>;
}

/// Fetches http(s) URLs with ureq and reads anything else from disk
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpLogoFetcher;

impl LogoFetcher for HttpLogoFetcher {
    fn fetch(&self, location: &str, max_bytes: usize) -> Result<Vec<u8>, LogoError> {
        let fetch_error = |message: String| LogoError::Fetch {
            url: location.to_string(),
            message,
        };

        let limit = max_bytes as u64 + 1;
        let mut bytes = Vec::new();

        if location.starts_with("http://") || location.starts_with("https://") {
            let response = ureq::get(location)
                .call()
                .map_err(|e| fetch_error(e.to_string()))?;
            response
                .into_reader()
                .take(limit)
                .read_to_end(&mut bytes)
                .map_err(|e| fetch_error(e.to_string()))?;
        } else {
            File::open(location)
                .and_then(|file| file.take(limit).read_to_end(&mut bytes))
                .map_err(|e| fetch_error(e.to_string()))?;
        }
        Ok(bytes)
    }
}

/// Decode logo bytes into an RGB raster composited on white
pub fn decode_logo(bytes: &[u8], max_bytes: usize) -> Result<RasterImage, LogoError> {
    if bytes.len() > max_bytes {
        return Err(LogoError::TooLarge {
            size: bytes.len(),
            limit: max_bytes,
        });
    }

    let image = if bytes.starts_with(PNG_SIGNATURE) {
        image::load_from_memory_with_format(bytes, ImageFormat::Png)?
    } else {
        log::info!("Logo is not a PNG, converting");
        image::load_from_memory(bytes)?.thumbnail(THUMBNAIL_MAX_PX, THUMBNAIL_MAX_PX)
    };

    Ok(flatten_on_white(&image))
}

/// Composite transparency against a white background
fn flatten_on_white(image: &DynamicImage) -> RasterImage {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for pixel in rgba.pixels() {
        let Rgba([r, g, b, a]) = *pixel;
        let alpha = a as f32 / 255.0;
        let bg = 255.0 * (1.0 - alpha);
        pixels.push((r as f32 * alpha + bg) as u8);
        pixels.push((g as f32 * alpha + bg) as u8);
        pixels.push((b as f32 * alpha + bg) as u8);
    }

    RasterImage::new("logo", width, height, RasterFormat::Rgb8, pixels)
}

struct CachedLogo {
    location: String,
    /// `None` when loading failed; failures are cached too
    image: Option<RasterImage>,
}

/// Memoizes the logo for one tournament across generation attempts
pub struct LogoCache<F: LogoFetcher> {
    fetcher: F,
    max_bytes: usize,
    cached: Option<CachedLogo>,
}

impl<F: LogoFetcher> LogoCache<F> {
    pub fn new(fetcher: F, max_bytes: usize) -> Self {
        Self {
            fetcher,
            max_bytes,
            cached: None,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn is_populated(&self) -> bool {
        self.cached.is_some()
    }

    /// The decoded logo for `location`, fetching it on first use
    pub fn get(&mut self, location: &str) -> Option<&RasterImage> {
        let hit = matches!(&self.cached, Some(c) if c.location == location);
        if !hit {
            log::info!("Using tournament logo: {}", location);
            let image = match self.load(location) {
                Ok(image) => Some(image),
                Err(e) => {
                    log::warn!("Skipping logo: {}", e);
                    None
                }
            };
            self.cached = Some(CachedLogo {
                location: location.to_string(),
                image,
            });
        }

        self.cached.as_ref().and_then(|c| c.image.as_ref())
    }

    fn load(&self, location: &str) -> Result<RasterImage, LogoError> {
        let bytes = self.fetcher.fetch(location, self.max_bytes)?;
        decode_logo(&bytes, self.max_bytes)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{ImageBuffer, RgbaImage};
    use std::cell::Cell;
    use std::io::Cursor;

    pub(crate) fn encode_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img: RgbaImage = ImageBuffer::from_fn(width, height, |x, _| {
            if x % 2 == 0 {
                Rgba([200, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        let mut out = Cursor::new(Vec::new());
        match format {
            ImageFormat::Png => img.write_to(&mut out, format).unwrap(),
            _ => DynamicImage::ImageRgba8(img)
                .to_rgb8()
                .write_to(&mut out, format)
                .unwrap(),
        }
        out.into_inner()
    }

    struct CountingFetcher {
        bytes: Vec<u8>,
        calls: Cell<usize>,
    }

    impl LogoFetcher for CountingFetcher {
        fn fetch(&self, _location: &str, _max_bytes: usize) -> Result<Vec<u8>, LogoError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.bytes.clone())
        }
    }

    #[test]
    fn test_png_decodes_on_white() {
        let bytes = encode_image(4, 2, ImageFormat::Png);
        let logo = decode_logo(&bytes, 1024 * 1024).unwrap();
        assert_eq!((logo.width, logo.height), (4, 2));
        assert_eq!(logo.format, RasterFormat::Rgb8);
        assert_eq!(&logo.pixels[0..3], &[200, 0, 0]);
        // Fully transparent pixel becomes white
        assert_eq!(&logo.pixels[3..6], &[255, 255, 255]);
    }

    #[test]
    fn test_non_png_is_thumbnailed() {
        let bytes = encode_image(600, 150, ImageFormat::Jpeg);
        let logo = decode_logo(&bytes, 1024 * 1024).unwrap();
        assert_eq!(logo.width, 300);
        assert!(logo.height <= 75);
    }

    #[test]
    fn test_oversized_logo_rejected() {
        let bytes = encode_image(4, 4, ImageFormat::Png);
        let err = decode_logo(&bytes, 10).unwrap_err();
        assert!(matches!(err, LogoError::TooLarge { limit: 10, .. }));
    }

    #[test]
    fn test_fetch_stops_past_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, &[0u8; 4096]).unwrap();
        let location = file.path().to_str().unwrap();

        let bytes = HttpLogoFetcher.fetch(location, 100).unwrap();
        assert_eq!(bytes.len(), 101);
        let err = decode_logo(&bytes, 100).unwrap_err();
        assert!(matches!(err, LogoError::TooLarge { size: 101, limit: 100 }));

        let bytes = HttpLogoFetcher.fetch(location, 1024 * 1024).unwrap();
        assert_eq!(bytes.len(), 4096);
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(decode_logo(b"<html>not found</html>", 1024).is_err());
    }

    #[test]
    fn test_cache_fetches_once() {
        let fetcher = CountingFetcher {
            bytes: encode_image(2, 2, ImageFormat::Png),
            calls: Cell::new(0),
        };
        let mut cache = LogoCache::new(fetcher, 1024 * 1024);
        assert!(!cache.is_populated());
        assert!(cache.get("https://example.org/logo.png").is_some());
        assert!(cache.get("https://example.org/logo.png").is_some());
        assert!(cache.is_populated());
        assert_eq!(cache.fetcher.calls.get(), 1);
    }

    #[test]
    fn test_cache_remembers_failure() {
        let fetcher = CountingFetcher {
            bytes: b"garbage".to_vec(),
            calls: Cell::new(0),
        };
        let mut cache = LogoCache::new(fetcher, 1024 * 1024);
        assert!(cache.get("logo.bin").is_none());
        assert!(cache.get("logo.bin").is_none());
        assert_eq!(cache.fetcher.calls.get(), 1);
    }
}
