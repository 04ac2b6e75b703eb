//! Scorecard rendering

pub mod canvas;
pub mod components;
pub mod helpers;
pub mod layouts;
pub mod logo;
pub mod pdf;
pub mod qr;

// Re-export commonly used items for convenience
pub use canvas::{Canvas, DocumentSink, DrawCall, RasterImage, RecordingCanvas, RecordingSink};
pub use layouts::{DivisionDocument, ScorecardGenerator};
pub use logo::{HttpLogoFetcher, LogoCache, LogoFetcher};
pub use pdf::{PdfCanvas, PdfSink};
pub use qr::{QrCodeEncoder, QrEncoder};
