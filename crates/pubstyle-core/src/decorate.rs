// File: crates/pubstyle-core/src/decorate.rs
// Summary: CMS figure decorations: the CMS label followed by the luminosity label.

use serde::Deserialize;

use crate::cms_label::{CmsLabel, CmsPlacement, Position};
use crate::label::Placement;
use crate::luminosity_label::LuminosityLabel;
use crate::surface::DrawingSurface;

/// Both decoration labels with their full style configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Decorations {
    pub cms: CmsLabel,
    pub luminosity: LuminosityLabel,
}

/// Placements produced by [`Decorations::draw`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorationPlacement {
    pub cms: CmsPlacement,
    pub luminosity: Placement,
}

impl Decorations {
    /// Default labels with the given texts, as the CMS canvas uses them.
    pub fn new(lumi_text: impl Into<String>, cms_position: Position, extra_text: impl Into<String>) -> Self {
        Self {
            cms: CmsLabel::new().with_position(cms_position).with_sublabel_text(extra_text),
            luminosity: LuminosityLabel::new(lumi_text),
        }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> DecorationPlacement {
        let cms = self.cms.draw(surface);
        let luminosity = self.luminosity.draw(surface);
        DecorationPlacement { cms, luminosity }
    }
}

/// Draw the default CMS and luminosity labels on `surface`.
///
/// `extra_text` becomes the CMS sublabel; pass an empty string for none.
pub fn decorate<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    lumi_text: &str,
    cms_position: Position,
    extra_text: &str,
) -> DecorationPlacement {
    Decorations::new(lumi_text, cms_position, extra_text).draw(surface)
}
