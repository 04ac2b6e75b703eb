//! Drawing surface abstraction
//!
//! Scorecard layout code only talks to [`Canvas`] and [`DocumentSink`]; the PDF
//! backend and the recording backend used by tests both implement them.
//! Coordinates are in points with the origin at the top-left corner of the page
//! and y growing downward.

use crate::error::RenderError;

/// Pixel layout of a [`RasterImage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    /// One byte per pixel, grayscale
    Luma8,
    /// Three bytes per pixel
    Rgb8,
}

impl RasterFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            RasterFormat::Luma8 => 1,
            RasterFormat::Rgb8 => 3,
        }
    }
}

/// An image-like buffer handed to the canvas (QR codes, logos)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Identity used by backends to embed identical images once
    pub key: String,
    pub width: u32,
    pub height: u32,
    pub format: RasterFormat,
    pub pixels: Vec<u8>,
}

impl RasterImage {
    pub fn new(
        key: impl Into<String>,
        width: u32,
        height: u32,
        format: RasterFormat,
        pixels: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * format.bytes_per_pixel()
        );
        Self {
            key: key.into(),
            width,
            height,
            format,
            pixels,
        }
    }
}

/// Narrow 2D drawing capability used by the scorecard renderer
pub trait Canvas {
    /// Push the current translation
    fn save(&mut self);

    /// Pop the translation pushed by the matching `save`
    fn restore(&mut self);

    /// Shift the origin for subsequent drawing
    fn translate(&mut self, dx: f32, dy: f32);

    /// Draw text with its baseline starting at (x, y)
    fn show_text(&mut self, x: f32, y: f32, font_size: f32, text: &str);

    /// Stroke a rectangle whose top-left corner is (x, y)
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32);

    /// Paint an image with its top-left corner at (x, y), one pixel per point
    /// before scaling
    fn draw_image(
        &mut self,
        image: &RasterImage,
        x: f32,
        y: f32,
        scale: f32,
    ) -> Result<(), RenderError>;

    /// Emit the current page and start a new blank one
    fn show_page(&mut self) -> Result<(), RenderError>;
}

/// Produces one canvas per division document and finalizes it
pub trait DocumentSink {
    type Canvas: Canvas;
    type Output;

    fn open(&self, title: &str) -> Result<Self::Canvas, RenderError>;

    fn close(&self, canvas: Self::Canvas) -> Result<Self::Output, RenderError>;
}

/// A single recorded drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    Text { x: f32, y: f32, size: f32, text: String },
    Rect { x: f32, y: f32, width: f32, height: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Circle { cx: f32, cy: f32, radius: f32 },
    Image { key: String, x: f32, y: f32, scale: f32 },
    ShowPage,
}

/// Canvas that records every call, for inspecting page geometry
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        self.calls.push(DrawCall::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.calls.push(DrawCall::Translate { dx, dy });
    }

    fn show_text(&mut self, x: f32, y: f32, font_size: f32, text: &str) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            size: font_size,
            text: text.to_string(),
        });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.calls.push(DrawCall::Line { x1, y1, x2, y2 });
    }

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.calls.push(DrawCall::Circle { cx, cy, radius });
    }

    fn draw_image(
        &mut self,
        image: &RasterImage,
        x: f32,
        y: f32,
        scale: f32,
    ) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Image {
            key: image.key.clone(),
            x,
            y,
            scale,
        });
        Ok(())
    }

    fn show_page(&mut self) -> Result<(), RenderError> {
        self.calls.push(DrawCall::ShowPage);
        Ok(())
    }
}

/// Sink whose output is the recorded call sequence of each document
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordingSink;

impl DocumentSink for RecordingSink {
    type Canvas = RecordingCanvas;
    type Output = Vec<DrawCall>;

    fn open(&self, _title: &str) -> Result<RecordingCanvas, RenderError> {
        Ok(RecordingCanvas::new())
    }

    fn close(&self, canvas: RecordingCanvas) -> Result<Vec<DrawCall>, RenderError> {
        Ok(canvas.into_calls())
    }
}

/// Split a recorded call sequence into pages at each `ShowPage`
///
/// Drawing after the last `ShowPage` forms a final page; nothing after it does not.
pub fn split_pages(calls: &[DrawCall]) -> Vec<&[DrawCall]> {
    let mut pages = Vec::new();
    let mut start = 0;
    for (i, call) in calls.iter().enumerate() {
        if *call == DrawCall::ShowPage {
            pages.push(&calls[start..i]);
            start = i + 1;
        }
    }
    if start < calls.len() {
        pages.push(&calls[start..]);
    }
    pages
}
