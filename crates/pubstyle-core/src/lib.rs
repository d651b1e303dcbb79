// File: crates/pubstyle-core/src/lib.rs
// Summary: Core library entry point; exports the label layout engine, styles and the Skia canvas.

pub mod alignment;
pub mod canvas;
pub mod cms_canvas;
pub mod cms_label;
pub mod decorate;
pub mod error;
pub mod font;
pub mod label;
pub mod latex;
pub mod luminosity_label;
pub mod style;
pub mod surface;
pub mod text;
pub mod types;

pub use alignment::{AlignSpec, Alignment, HAlign, VAlign};
pub use canvas::Canvas;
pub use cms_canvas::{CmsCanvas, CmsCanvasOptions, CmsSession};
pub use cms_label::{CmsLabel, CmsPlacement, Position};
pub use decorate::{decorate, DecorationPlacement, Decorations};
pub use error::LayoutError;
pub use label::{Placement, Sublabel};
pub use luminosity_label::LuminosityLabel;
pub use style::{Style, StyleGuard};
pub use surface::{DrawingSurface, RecordingSurface, TextCall, TextStyle};
pub use text::TextShaper;
pub use types::Margins;
