// File: crates/pubstyle-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with ROOT font codes and alignment anchors.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle as ParagraphTextStyle};

use crate::alignment::{Alignment, HAlign, VAlign};
use crate::font;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, font_code: i32) -> ParagraphTextStyle {
        let face = font::face(font_code);
        let mut ts = ParagraphTextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(face.families);
        ts.set_font_style(face.skia_style());
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, font_code: i32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, font_code);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` so that `(x, y)` is the anchor named by `align`.
    ///
    /// Bottom anchors the alphabetic baseline, top the top of the line box.
    pub fn draw_aligned(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        font_code: i32,
        align: Alignment,
    ) {
        let p = self.layout(text, size, color, font_code);
        let width = p.longest_line();
        let left = match align.horizontal {
            HAlign::Left => x,
            HAlign::Center => x - width * 0.5,
            HAlign::Right => x - width,
        };
        let top = match align.vertical {
            VAlign::Top => y,
            VAlign::Center => y - p.height() * 0.5,
            VAlign::Bottom => y - p.alphabetic_baseline(),
        };
        p.paint(canvas, (left, top));
    }
}
