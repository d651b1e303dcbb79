// File: crates/pubstyle-core/src/label.rs
// Summary: Pieces shared by all labels: computed placements and the nested sublabel record.

use serde::Deserialize;

use crate::alignment::Alignment;
use crate::surface::{DrawingSurface, TextStyle};
use crate::types::Margins;

/// Where and how a label was drawn: NDC anchor plus the resolved text style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub style: TextStyle,
}

impl Placement {
    pub fn size(&self) -> f64 { self.style.size }
    pub fn align(&self) -> Alignment { self.style.align }

    pub(crate) fn render<S: DrawingSurface + ?Sized>(&self, surface: &mut S, text: &str) {
        surface.draw_text_ndc(self.x, self.y, text, &self.style);
    }
}

/// Secondary text attached to a primary label ("Preliminary", "Simulation", ...).
///
/// Sits below the parent when the parent is inside the frame and to its right
/// when the parent is outside. An empty `text` means nothing is drawn.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Sublabel {
    pub text: String,
    pub font: i32,
    /// Text size relative to the parent's size.
    pub scale: f64,
    /// Offset from the left margin as a fraction of the frame width (outside only).
    pub padding_left: f64,
    /// Gap below the parent as a multiple of the parent's size (inside only).
    pub padding_top: f64,
}

impl Default for Sublabel {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: 52,
            scale: 0.76,
            padding_left: 0.12,
            padding_top: 1.2,
        }
    }
}

impl Sublabel {
    fn style(&self, parent: &Placement) -> TextStyle {
        TextStyle {
            font: self.font,
            size: self.scale * parent.size(),
            align: parent.align(),
        }
    }

    /// Directly below the parent, same horizontal anchor.
    pub fn place_inside(&self, parent: &Placement) -> Placement {
        Placement {
            x: parent.x,
            y: parent.y - self.padding_top * parent.size(),
            style: self.style(parent),
        }
    }

    /// To the right of the parent, same baseline.
    pub fn place_outside(&self, parent: &Placement, margins: &Margins) -> Placement {
        Placement {
            x: margins.left + self.padding_left * margins.frame_width(),
            y: parent.y,
            style: self.style(parent),
        }
    }
}
