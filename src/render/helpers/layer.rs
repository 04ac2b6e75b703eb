//! Operation builder for printpdf 0.8
//!
//! Collects PDF operations for one page into a `Vec<Op>`. All coordinates are
//! PDF points in PDF space (origin bottom-left).

use printpdf::{
    BuiltinFont, Color, LinePoint, Op, PaintMode, Point, Polygon, PolygonRing, Pt, TextItem,
    WindingOrder, XObjectId, XObjectTransform,
};

/// Magic number for approximating a quarter circle with one cubic Bezier curve
const BEZIER_CIRCLE_K: f32 = 0.552_284_8;

fn point(x: f32, y: f32, bezier: bool) -> LinePoint {
    LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier,
    }
}

/// A builder that collects PDF operations
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Set the fill color
    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
    }

    /// Set the outline/stroke color
    pub fn set_outline_color(&mut self, color: Color) {
        self.ops.push(Op::SetOutlineColor { col: color });
    }

    /// Set the outline thickness
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Draw text with a builtin font, baseline at (x, y)
    pub fn use_text<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: Pt,
        y: Pt,
        font: BuiltinFont,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor { pos: Point { x, y } });
        self.ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(font_size),
            font,
        });
        self.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text_str)],
            font,
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Add a filled or stroked rectangle
    ///
    /// Takes lower-left x, y and upper-right x, y coordinates with a paint mode
    pub fn add_rect(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt, mode: PaintMode) {
        let points = vec![
            point(x1.0, y1.0, false),
            point(x2.0, y1.0, false),
            point(x2.0, y2.0, false),
            point(x1.0, y2.0, false),
        ];

        self.push_polygon(points, mode);
    }

    /// Draw a line from (x1, y1) to (x2, y2)
    pub fn add_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt) {
        let points = vec![point(x1.0, y1.0, false), point(x2.0, y2.0, false)];
        self.push_polygon(points, PaintMode::Stroke);
    }

    /// Draw a circle approximated by four cubic Bezier curves
    pub fn add_circle(&mut self, center_x: Pt, center_y: Pt, radius: Pt, mode: PaintMode) {
        let (cx, cy, r) = (center_x.0, center_y.0, radius.0);
        let k = BEZIER_CIRCLE_K * r;

        let points = vec![
            // Start at right point
            point(cx + r, cy, false),
            // Curve to top
            point(cx + r, cy + k, true),
            point(cx + k, cy + r, true),
            point(cx, cy + r, true),
            // Curve to left
            point(cx - k, cy + r, true),
            point(cx - r, cy + k, true),
            point(cx - r, cy, true),
            // Curve to bottom
            point(cx - r, cy - k, true),
            point(cx - k, cy - r, true),
            point(cx, cy - r, true),
            // Curve back to right
            point(cx + k, cy - r, true),
            point(cx + r, cy - k, true),
            point(cx + r, cy, true),
        ];

        self.push_polygon(points, mode);
    }

    /// Place an image XObject with the given transform
    ///
    /// Use `PdfDocument::add_image()` to register the image and get the XObjectId.
    pub fn use_xobject(&mut self, id: XObjectId, transform: XObjectTransform) {
        self.ops.push(Op::UseXobject { id, transform });
    }

    fn push_polygon(&mut self, points: Vec<LinePoint>, mode: PaintMode) {
        let polygon = Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        };

        self.ops.push(Op::DrawPolygon { polygon });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_skipped() {
        let mut layer = LayerBuilder::new();
        layer.use_text("", 12.0, Pt(10.0), Pt(10.0), BuiltinFont::Helvetica);
        assert!(layer.ops().is_empty());

        layer.use_text("Round", 12.0, Pt(10.0), Pt(10.0), BuiltinFont::Helvetica);
        assert_eq!(layer.ops().len(), 5);
    }

    #[test]
    fn test_shapes_emit_one_polygon_each() {
        let mut layer = LayerBuilder::new();
        layer.add_rect(Pt(0.0), Pt(0.0), Pt(10.0), Pt(10.0), PaintMode::Stroke);
        layer.add_line(Pt(0.0), Pt(0.0), Pt(10.0), Pt(10.0));
        layer.add_circle(Pt(5.0), Pt(5.0), Pt(2.0), PaintMode::Stroke);
        assert_eq!(layer.ops().len(), 3);
        assert!(layer
            .ops()
            .iter()
            .all(|op| matches!(op, Op::DrawPolygon { .. })));
    }
}
