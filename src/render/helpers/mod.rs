//! Helper utilities for PDF rendering

pub mod colors;
pub mod compress;
pub mod layer;

pub use colors::{BLACK, LINE_WIDTH};
pub use compress::compress_pdf;
pub use layer::LayerBuilder;
