// File: crates/pubstyle-core/src/surface.rs
// Summary: Drawing-surface capability (margins + NDC text) and a recording implementation.

use crate::alignment::Alignment;
use crate::types::Margins;

/// Font, size and alignment for one text render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// ROOT font code (`10 * family + precision`).
    pub font: i32,
    /// Text height as a fraction of the surface height.
    pub size: f64,
    pub align: Alignment,
}

/// What the label layout needs from whatever it draws on.
pub trait DrawingSurface {
    /// Current margins of the active pad.
    fn margins(&self) -> Margins;
    /// Render `text` anchored at normalized device coordinates `(x, y)`.
    fn draw_text_ndc(&mut self, x: f64, y: f64, text: &str, style: &TextStyle);
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn margins(&self) -> Margins { (**self).margins() }
    fn draw_text_ndc(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) {
        (**self).draw_text_ndc(x, y, text, style)
    }
}

/// A text render captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct TextCall {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub style: TextStyle,
}

/// Surface that draws nothing and keeps every text call, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub margins: Margins,
    pub calls: Vec<TextCall>,
}

impl RecordingSurface {
    pub fn new(margins: impl Into<Margins>) -> Self {
        Self { margins: margins.into(), calls: Vec::new() }
    }

    pub fn set_margins(&mut self, margins: impl Into<Margins>) {
        self.margins = margins.into();
    }

    pub fn take_calls(&mut self) -> Vec<TextCall> {
        std::mem::take(&mut self.calls)
    }
}

impl DrawingSurface for RecordingSurface {
    fn margins(&self) -> Margins { self.margins }

    fn draw_text_ndc(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) {
        self.calls.push(TextCall { x, y, text: text.to_string(), style: *style });
    }
}
