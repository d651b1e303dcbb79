// File: crates/pubstyle-core/src/cms_canvas.rs
// Summary: Canvas with CMS Publications Committee defaults and a TDR-styled drawing session.

use std::ops::{Deref, DerefMut};

use anyhow::Result;
use serde::Deserialize;

use crate::canvas::Canvas;
use crate::cms_label::Position;
use crate::decorate::{decorate, DecorationPlacement, Decorations};
use crate::style::{Style, StyleGuard};
use crate::types::{Margins, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CmsCanvasOptions {
    pub width: i32,
    pub height: i32,
    pub margins: Margins,
}

impl Default for CmsCanvasOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, margins: Margins::default() }
    }
}

/// A canvas for figures in the CMS Publications Committee style.
///
/// Drawing happens inside [`CmsCanvas::enter`], which activates the TDR
/// style until the returned session is dropped.
pub struct CmsCanvas {
    canvas: Canvas,
}

impl CmsCanvas {
    pub fn new(opts: &CmsCanvasOptions) -> Result<Self> {
        Ok(Self { canvas: Canvas::new(opts.width, opts.height, opts.margins)? })
    }

    /// Activate the TDR style and clear the canvas with its background.
    pub fn enter(&mut self) -> CmsSession<'_> {
        self.enter_with(Style::tdr())
    }

    pub fn enter_with(&mut self, style: Style) -> CmsSession<'_> {
        let guard = StyleGuard::enter(style);
        self.canvas.clear();
        CmsSession { canvas: &mut self.canvas, _style: guard }
    }

    pub fn canvas(&self) -> &Canvas { &self.canvas }
    pub fn canvas_mut(&mut self) -> &mut Canvas { &mut self.canvas }
}

/// A styled drawing session; the previous style returns when it is dropped.
pub struct CmsSession<'a> {
    canvas: &'a mut Canvas,
    _style: StyleGuard,
}

impl CmsSession<'_> {
    /// Draw the CMS label at `cms_position` (with `extra_text` as sublabel)
    /// and the luminosity label.
    pub fn decorate(&mut self, lumi_text: &str, cms_position: Position, extra_text: &str) -> DecorationPlacement {
        decorate(&mut *self.canvas, lumi_text, cms_position, extra_text)
    }

    pub fn decorate_with(&mut self, decorations: &Decorations) -> DecorationPlacement {
        decorations.draw(&mut *self.canvas)
    }
}

impl Deref for CmsSession<'_> {
    type Target = Canvas;
    fn deref(&self) -> &Canvas { &*self.canvas }
}

impl DerefMut for CmsSession<'_> {
    fn deref_mut(&mut self) -> &mut Canvas { &mut *self.canvas }
}
