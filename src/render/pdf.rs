//! printpdf backend for the drawing surface
//!
//! Layout code works top-down in points; this backend flips y into PDF space and
//! applies the translation stack itself, so the emitted operations carry
//! absolute page coordinates.

use printpdf::{
    BuiltinFont, Color, Mm, PaintMode, PdfDocument, PdfPage, PdfSaveOptions, Pt, RawImage,
    RawImageData, RawImageFormat, XObjectId, XObjectTransform,
};
use std::collections::HashMap;

use crate::config::Settings;
use crate::error::RenderError;

use super::canvas::{Canvas, DocumentSink, RasterFormat, RasterImage};
use super::helpers::{compress_pdf, LayerBuilder, BLACK, LINE_WIDTH};

/// Font used for every piece of scorecard text
const SCORECARD_FONT: BuiltinFont = BuiltinFont::Helvetica;

/// Images are embedded at one pixel per point before scaling
const IMAGE_DPI: f32 = 72.0;

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

/// One division document being drawn
pub struct PdfCanvas {
    doc: PdfDocument,
    pages: Vec<PdfPage>,
    layer: LayerBuilder,
    /// True once anything has been drawn on the current page
    dirty: bool,
    page_width: f32,
    page_height: f32,
    offset: (f32, f32),
    saved: Vec<(f32, f32)>,
    images: HashMap<String, XObjectId>,
}

impl PdfCanvas {
    pub fn new(title: &str, page_width: f32, page_height: f32) -> Self {
        let mut canvas = Self {
            doc: PdfDocument::new(title),
            pages: Vec::new(),
            layer: LayerBuilder::new(),
            dirty: false,
            page_width,
            page_height,
            offset: (0.0, 0.0),
            saved: Vec::new(),
            images: HashMap::new(),
        };
        canvas.start_page();
        canvas
    }

    fn start_page(&mut self) {
        self.layer = LayerBuilder::new();
        self.layer.set_fill_color(Color::Rgb(BLACK));
        self.layer.set_outline_color(Color::Rgb(BLACK));
        self.layer.set_outline_thickness(LINE_WIDTH);
        self.dirty = false;
    }

    fn flush_page(&mut self) {
        let layer = std::mem::take(&mut self.layer);
        self.pages.push(PdfPage::new(
            pt_to_mm(self.page_width),
            pt_to_mm(self.page_height),
            layer.into_ops(),
        ));
        self.start_page();
    }

    /// Map a top-down layout coordinate to PDF space
    fn pdf_x(&self, x: f32) -> Pt {
        Pt(x + self.offset.0)
    }

    fn pdf_y(&self, y: f32) -> Pt {
        Pt(self.page_height - (y + self.offset.1))
    }

    fn image_id(&mut self, image: &RasterImage) -> XObjectId {
        if let Some(id) = self.images.get(&image.key) {
            return id.clone();
        }

        let data_format = match image.format {
            RasterFormat::Luma8 => RawImageFormat::R8,
            RasterFormat::Rgb8 => RawImageFormat::RGB8,
        };
        let raw = RawImage {
            pixels: RawImageData::U8(image.pixels.clone()),
            width: image.width as usize,
            height: image.height as usize,
            data_format,
            tag: Vec::new(),
        };
        let id = self.doc.add_image(&raw);
        self.images.insert(image.key.clone(), id.clone());
        id
    }

    /// Serialize the document, dropping a trailing blank page
    pub fn finish(mut self, compress: bool) -> Result<Vec<u8>, RenderError> {
        // An empty division still gets one (blank) page
        if self.dirty || self.pages.is_empty() {
            self.flush_page();
        }
        log::debug!("Saving PDF with {} pages", self.pages.len());

        self.doc.with_pages(self.pages);

        let mut warnings = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("printpdf reported {} warnings", warnings.len());
        }

        if !compress {
            return Ok(bytes);
        }

        // Compression is best effort; fall back to the uncompressed bytes
        match compress_pdf(&bytes) {
            Ok(compressed) => Ok(compressed),
            Err(e) => {
                log::warn!("{}", e);
                Ok(bytes)
            }
        }
    }
}

impl Canvas for PdfCanvas {
    fn save(&mut self) {
        self.saved.push(self.offset);
    }

    fn restore(&mut self) {
        if let Some(offset) = self.saved.pop() {
            self.offset = offset;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.offset.0 += dx;
        self.offset.1 += dy;
    }

    fn show_text(&mut self, x: f32, y: f32, font_size: f32, text: &str) {
        let (px, py) = (self.pdf_x(x), self.pdf_y(y));
        self.layer.use_text(text, font_size, px, py, SCORECARD_FONT);
        self.dirty = true;
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (x1, y1) = (self.pdf_x(x), self.pdf_y(y + height));
        let (x2, y2) = (self.pdf_x(x + width), self.pdf_y(y));
        self.layer.add_rect(x1, y1, x2, y2, PaintMode::Stroke);
        self.dirty = true;
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let (ax, ay) = (self.pdf_x(x1), self.pdf_y(y1));
        let (bx, by) = (self.pdf_x(x2), self.pdf_y(y2));
        self.layer.add_line(ax, ay, bx, by);
        self.dirty = true;
    }

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        let (px, py) = (self.pdf_x(cx), self.pdf_y(cy));
        self.layer.add_circle(px, py, Pt(radius), PaintMode::Stroke);
        self.dirty = true;
    }

    fn draw_image(
        &mut self,
        image: &RasterImage,
        x: f32,
        y: f32,
        scale: f32,
    ) -> Result<(), RenderError> {
        if image.width == 0 || image.height == 0 {
            return Err(RenderError::PdfGeneration(format!(
                "Image {} has no pixels",
                image.key
            )));
        }
        let id = self.image_id(image);

        // PDF places images by their lower-left corner
        let bottom = y + image.height as f32 * scale;
        let transform = XObjectTransform {
            translate_x: Some(self.pdf_x(x)),
            translate_y: Some(self.pdf_y(bottom)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        };
        self.layer.use_xobject(id, transform);
        self.dirty = true;
        Ok(())
    }

    fn show_page(&mut self) -> Result<(), RenderError> {
        self.flush_page();
        Ok(())
    }
}

/// Produces one PDF byte buffer per division
#[derive(Debug, Clone)]
pub struct PdfSink {
    page_width: f32,
    page_height: f32,
    compress: bool,
}

impl PdfSink {
    pub fn new(settings: &Settings) -> Self {
        Self {
            page_width: settings.page_width,
            page_height: settings.page_height,
            compress: settings.compress,
        }
    }
}

impl DocumentSink for PdfSink {
    type Canvas = PdfCanvas;
    type Output = Vec<u8>;

    fn open(&self, title: &str) -> Result<PdfCanvas, RenderError> {
        Ok(PdfCanvas::new(title, self.page_width, self.page_height))
    }

    fn close(&self, canvas: PdfCanvas) -> Result<Vec<u8>, RenderError> {
        canvas.finish(self.compress)
    }
}
