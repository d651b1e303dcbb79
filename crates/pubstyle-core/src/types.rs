// File: crates/pubstyle-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, NDC margins).

/// Default CMS canvas width in pixels.
pub const WIDTH: i32 = 800;
/// Default CMS canvas height in pixels.
pub const HEIGHT: i32 = 600;

/// Surface margins as fractions of the full width (left/right) or height (bottom/top).
/// Contract: every field lies in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Margins {
    /// Margins in ROOT order: left, right, bottom, top.
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self { left, right, bottom, top }
    }
    /// Width of the frame in NDC.
    pub fn frame_width(&self) -> f64 { 1.0 - self.left - self.right }
    /// Height of the frame in NDC.
    pub fn frame_height(&self) -> f64 { 1.0 - self.top - self.bottom }
}

impl From<(f64, f64, f64, f64)> for Margins {
    fn from((left, right, bottom, top): (f64, f64, f64, f64)) -> Self {
        Self::new(left, right, bottom, top)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(0.12, 0.04, 0.12, 0.08)
    }
}
