// File: crates/pubstyle-core/src/luminosity_label.rs
// Summary: Luminosity label anchored at the top right corner, outside the frame.

use serde::Deserialize;

use crate::alignment::{AlignSpec, Alignment, HAlign, VAlign};
use crate::error::LayoutError;
use crate::label::Placement;
use crate::surface::{DrawingSurface, TextStyle};
use crate::types::Margins;

/// The luminosity label, e.g. `19.7 fb^{-1} (8 TeV) + 4.9 fb^{-1} (7 TeV)`.
///
/// Data taking periods are separated by `+` in the text. The label is always
/// rendered when drawn, empty text included.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LuminosityLabel {
    pub text: String,
    pub font: i32,
    /// Text size relative to the top margin height.
    pub scale: f64,
    pub align: Alignment,
    /// Padding above the text relative to the top margin height.
    pub padding_top: f64,
}

impl Default for LuminosityLabel {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: 42,
            scale: 0.6,
            align: Alignment::new(HAlign::Right, VAlign::Bottom),
            padding_top: 0.8,
        }
    }
}

impl LuminosityLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    /// Set the alignment from a name pair or a ROOT code.
    pub fn set_align(&mut self, spec: &AlignSpec) -> Result<(), LayoutError> {
        self.align = spec.resolve()?;
        Ok(())
    }

    pub fn place(&self, m: &Margins) -> Placement {
        Placement {
            x: 1.0 - m.right,
            y: 1.0 - self.padding_top * m.top,
            style: TextStyle { font: self.font, size: self.scale * m.top, align: self.align },
        }
    }

    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Placement {
        let placed = self.place(&surface.margins());
        tracing::debug!(x = placed.x, y = placed.y, size = placed.size(), "draw luminosity label");
        placed.render(surface, &self.text);
        placed
    }
}
