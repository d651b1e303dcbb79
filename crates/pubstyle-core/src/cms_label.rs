// File: crates/pubstyle-core/src/cms_label.rs
// Summary: The CMS label: four canned corner layouts plus an optional sublabel.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::alignment::{Alignment, HAlign, VAlign};
use crate::error::LayoutError;
use crate::label::{Placement, Sublabel};
use crate::surface::{DrawingSurface, TextStyle};
use crate::types::Margins;

/// Default `padding_top` inside the frame, as a fraction of the frame height.
pub const INSIDE_PADDING_TOP: f64 = 0.035;
/// Default `padding_top` outside the frame, as a fraction of the top margin.
pub const OUTSIDE_PADDING_TOP: f64 = 0.8;

/// Where the CMS label sits on the active canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Position {
    /// Top left corner inside the frame.
    #[default]
    Left,
    /// Top center inside the frame.
    Center,
    /// Top right corner inside the frame.
    Right,
    /// Top left corner outside the frame, in the top margin.
    Outside,
}

impl Position {
    pub const ALL: [Position; 4] = [Self::Left, Self::Center, Self::Right, Self::Outside];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Outside => "outside",
        }
    }

    pub const fn is_inside(self) -> bool {
        !matches!(self, Self::Outside)
    }
}

impl FromStr for Position {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            "outside" => Ok(Self::Outside),
            other => Err(LayoutError::UnrecognizedPosition(other.to_string())),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = LayoutError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The CMS experiment label.
///
/// All fields are plain style attributes the caller may change between draws.
/// Size and position are derived from the surface margins on every draw.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CmsLabel {
    pub text: String,
    pub position: Position,
    pub font: i32,
    /// Text size relative to the top margin height.
    pub scale: f64,
    /// Left padding inside the frame, relative to the frame width.
    pub padding_left: f64,
    /// Right padding inside the frame, relative to the frame width.
    pub padding_right: f64,
    /// Padding above the text. Inside the frame it is relative to the frame
    /// height (default 0.035); outside it is relative to the top margin
    /// (default 0.8). `None` selects the default for the current position.
    pub padding_top: Option<f64>,
    pub sublabel: Sublabel,
}

impl Default for CmsLabel {
    fn default() -> Self {
        Self {
            text: "CMS".to_string(),
            position: Position::Left,
            font: 61,
            scale: 0.75,
            padding_left: 0.045,
            padding_right: 0.045,
            padding_top: None,
            sublabel: Sublabel::default(),
        }
    }
}

/// Placements produced by one [`CmsLabel::draw`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CmsPlacement {
    pub label: Placement,
    /// `None` when the sublabel text is empty.
    pub sublabel: Option<Placement>,
}

impl CmsLabel {
    pub fn new() -> Self { Self::default() }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_sublabel_text(mut self, text: impl Into<String>) -> Self {
        self.sublabel.text = text.into();
        self
    }

    /// Set the position from its name; unknown names are rejected.
    pub fn set_position(&mut self, name: &str) -> Result<(), LayoutError> {
        self.position = name.parse()?;
        Ok(())
    }

    fn padding_top_or(&self, default: f64) -> f64 {
        self.padding_top.unwrap_or(default)
    }

    /// Text size for the given margins: `scale` times the top margin.
    pub fn size(&self, margins: &Margins) -> f64 {
        self.scale * margins.top
    }

    fn inside_y(&self, m: &Margins) -> f64 {
        1.0 - m.top - self.padding_top_or(INSIDE_PADDING_TOP) * m.frame_height()
    }

    /// Anchor and style of the main text for the current position.
    pub fn place_label(&self, m: &Margins) -> Placement {
        let (align, x, y) = match self.position {
            Position::Left => (
                Alignment::new(HAlign::Left, VAlign::Top),
                m.left + self.padding_left * m.frame_width(),
                self.inside_y(m),
            ),
            Position::Center => (
                Alignment::new(HAlign::Center, VAlign::Top),
                m.left + 0.5 * m.frame_width(),
                self.inside_y(m),
            ),
            Position::Right => (
                Alignment::new(HAlign::Right, VAlign::Top),
                1.0 - m.right - self.padding_right * m.frame_width(),
                self.inside_y(m),
            ),
            Position::Outside => (
                Alignment::new(HAlign::Left, VAlign::Bottom),
                m.left,
                1.0 - self.padding_top_or(OUTSIDE_PADDING_TOP) * m.top,
            ),
        };
        Placement {
            x,
            y,
            style: TextStyle { font: self.font, size: self.size(m), align },
        }
    }

    /// Pure layout: what [`draw`](Self::draw) would render for these margins.
    pub fn layout(&self, m: &Margins) -> CmsPlacement {
        let label = self.place_label(m);
        let sublabel = if self.sublabel.text.is_empty() {
            None
        } else if self.position.is_inside() {
            Some(self.sublabel.place_inside(&label))
        } else {
            Some(self.sublabel.place_outside(&label, m))
        };
        CmsPlacement { label, sublabel }
    }

    /// Draw the label, and the sublabel if it has text, on `surface`.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> CmsPlacement {
        let margins = surface.margins();
        let placed = self.layout(&margins);
        tracing::debug!(
            position = %self.position,
            x = placed.label.x,
            y = placed.label.y,
            size = placed.label.size(),
            align = placed.label.align().code(),
            "draw CMS label"
        );
        placed.label.render(surface, &self.text);
        if let Some(sub) = &placed.sublabel {
            tracing::debug!(x = sub.x, y = sub.y, size = sub.size(), "draw CMS sublabel");
            sub.render(surface, &self.sublabel.text);
        }
        placed
    }
}
