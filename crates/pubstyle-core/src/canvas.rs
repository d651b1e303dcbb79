// File: crates/pubstyle-core/src/canvas.rs
// Summary: Skia CPU raster canvas addressed in NDC; implements the drawing surface and writes PNGs.

use anyhow::Result;
use skia_safe as skia;

use crate::latex;
use crate::style;
use crate::surface::{DrawingSurface, TextStyle};
use crate::text::TextShaper;
use crate::types::Margins;

/// A raster canvas with ROOT-like pad margins.
///
/// Drawing colors and line widths come from the active [`style`](crate::style).
pub struct Canvas {
    surface: skia::Surface,
    width: i32,
    height: i32,
    margins: Margins,
    shaper: TextShaper,
}

impl Canvas {
    pub fn new(width: i32, height: i32, margins: impl Into<Margins>) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        Ok(Self { surface, width, height, margins: margins.into(), shaper: TextShaper::new() })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    pub fn set_margins(&mut self, margins: impl Into<Margins>) {
        self.margins = margins.into();
    }

    /// NDC to pixel coordinates (y grows downwards in pixels).
    pub fn to_px(&self, x: f64, y: f64) -> (f32, f32) {
        ((x * self.width as f64) as f32, ((1.0 - y) * self.height as f64) as f32)
    }

    /// Frame-relative fractions (0..1 across the frame) to NDC.
    pub fn frame_to_ndc(&self, fx: f64, fy: f64) -> (f64, f64) {
        let m = &self.margins;
        (m.left + fx * m.frame_width(), m.bottom + fy * m.frame_height())
    }

    /// Fill the whole canvas with the style background.
    pub fn clear(&mut self) {
        let background = style::current().background;
        self.surface.canvas().clear(background);
    }

    /// Stroke the frame rectangle bounded by the margins.
    pub fn draw_frame(&mut self) {
        let st = style::current();
        let (l, t) = self.to_px(self.margins.left, 1.0 - self.margins.top);
        let (r, b) = self.to_px(1.0 - self.margins.right, self.margins.bottom);

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(st.frame_line_width);
        paint.set_color(st.frame_line);
        self.surface.canvas().draw_rect(skia::Rect::from_ltrb(l, t, r, b), &paint);
    }

    pub fn fill_rect_ndc(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: skia::Color) {
        let (l, b) = self.to_px(x0.min(x1), y0.min(y1));
        let (r, t) = self.to_px(x0.max(x1), y0.max(y1));
        let mut body = skia::Paint::default();
        body.set_anti_alias(true);
        body.set_style(skia::paint::Style::Fill);
        body.set_color(color);
        self.surface.canvas().draw_rect(skia::Rect::from_ltrb(l, t, r, b), &body);
    }

    pub fn stroke_polyline_ndc(&mut self, points: &[(f64, f64)], color: skia::Color, width: f32) {
        if points.len() < 2 {
            return;
        }
        let mut path = skia::Path::new();
        let (x0, y0) = self.to_px(points[0].0, points[0].1);
        path.move_to((x0, y0));
        for &(x, y) in points.iter().skip(1) {
            path.line_to(self.to_px(x, y));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(width);
        stroke.set_color(color);
        self.surface.canvas().draw_path(&path, &stroke);
    }

    /// Filled circle marker sized by the active style.
    pub fn draw_marker_ndc(&mut self, x: f64, y: f64) {
        let st = style::current();
        let center = self.to_px(x, y);
        let radius = (st.marker_size * self.height as f64) as f32;
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(st.marker);
        self.surface.canvas().draw_circle(center, radius, &paint);
    }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote PNG");
        Ok(())
    }
}

impl DrawingSurface for Canvas {
    fn margins(&self) -> Margins { self.margins }

    fn draw_text_ndc(&mut self, x: f64, y: f64, text: &str, ts: &TextStyle) {
        let (px, py) = self.to_px(x, y);
        let size_px = (ts.size * self.height as f64) as f32;
        let color = style::current().text;
        let text = latex::to_unicode(text);
        tracing::trace!(x, y, size_px, font = ts.font, align = ts.align.code(), text = %text, "draw text");
        let canvas = self.surface.canvas();
        self.shaper.draw_aligned(canvas, &text, px, py, size_px, color, ts.font, ts.align);
    }
}
