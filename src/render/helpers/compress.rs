//! PDF compression helper
//!
//! Uses lopdf to compress PDF streams after printpdf generates uncompressed output.

use std::io::Cursor;

use crate::error::RenderError;

/// Compress PDF streams to reduce file size.
///
/// Scorecards embed one QR image per card, so division documents get large
/// quickly without this pass.
pub fn compress_pdf(uncompressed: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut doc = lopdf::Document::load_mem(uncompressed).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to parse PDF for compression: {}", e))
    })?;

    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to save compressed PDF: {}", e))
    })?;

    Ok(output.into_inner())
}
