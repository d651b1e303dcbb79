// File: crates/pubstyle-core/src/alignment.rs
// Summary: Text alignment names, ROOT alignment codes and the resolver between them.

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::error::LayoutError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VAlign {
    Bottom,
    Center,
    Top,
}

impl HAlign {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    const fn index(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Center => 2,
            Self::Right => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl VAlign {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "bottom" => Some(Self::Bottom),
            "center" => Some(Self::Center),
            "top" => Some(Self::Top),
            _ => None,
        }
    }

    const fn index(self) -> u8 {
        match self {
            Self::Bottom => 1,
            Self::Center => 2,
            Self::Top => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Center => "center",
            Self::Top => "top",
        }
    }
}

/// A (horizontal, vertical) text alignment, encoded for ROOT as `10 * h + v`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Alignment {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

/// The nine recognized alignments in code order.
pub const ALIGNMENTS: [Alignment; 9] = [
    Alignment::new(HAlign::Left, VAlign::Bottom),
    Alignment::new(HAlign::Left, VAlign::Center),
    Alignment::new(HAlign::Left, VAlign::Top),
    Alignment::new(HAlign::Center, VAlign::Bottom),
    Alignment::new(HAlign::Center, VAlign::Center),
    Alignment::new(HAlign::Center, VAlign::Top),
    Alignment::new(HAlign::Right, VAlign::Bottom),
    Alignment::new(HAlign::Right, VAlign::Center),
    Alignment::new(HAlign::Right, VAlign::Top),
];

impl Alignment {
    pub const fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self { horizontal, vertical }
    }

    pub const fn code(self) -> i32 {
        (self.horizontal.index() * 10 + self.vertical.index()) as i32
    }

    /// Look up a pair of alignment names such as `("left", "top")`.
    pub fn from_names(horizontal: &str, vertical: &str) -> Result<Self, LayoutError> {
        match (HAlign::parse(horizontal), VAlign::parse(vertical)) {
            (Some(h), Some(v)) => Ok(Self::new(h, v)),
            _ => Err(LayoutError::UnrecognizedAlignment(format!(
                "({horizontal:?}, {vertical:?})"
            ))),
        }
    }

    /// Look up a raw ROOT alignment code; only the nine table values are accepted.
    pub fn from_code(code: i32) -> Result<Self, LayoutError> {
        ALIGNMENTS
            .iter()
            .copied()
            .find(|a| a.code() == code)
            .ok_or_else(|| LayoutError::UnrecognizedAlignment(code.to_string()))
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.horizontal.name(), self.vertical.name())
    }
}

impl TryFrom<(&str, &str)> for Alignment {
    type Error = LayoutError;

    fn try_from((h, v): (&str, &str)) -> Result<Self, Self::Error> {
        Self::from_names(h, v)
    }
}

impl TryFrom<i32> for Alignment {
    type Error = LayoutError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

/// An alignment request as a caller writes it: a name pair or a legacy numeric code.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AlignSpec {
    Names(String, String),
    Code(i32),
}

impl AlignSpec {
    pub fn names(horizontal: impl Into<String>, vertical: impl Into<String>) -> Self {
        Self::Names(horizontal.into(), vertical.into())
    }

    pub fn resolve(&self) -> Result<Alignment, LayoutError> {
        match self {
            Self::Names(h, v) => Alignment::from_names(h, v),
            Self::Code(code) => Alignment::from_code(*code),
        }
    }
}

impl From<(&str, &str)> for AlignSpec {
    fn from((h, v): (&str, &str)) -> Self {
        Self::names(h, v)
    }
}

impl From<i32> for AlignSpec {
    fn from(code: i32) -> Self {
        Self::Code(code)
    }
}

/// Resolve a request to the numeric code applied to a text primitive.
pub fn resolve(spec: &AlignSpec) -> Result<i32, LayoutError> {
    spec.resolve().map(Alignment::code)
}

impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        AlignSpec::deserialize(deserializer)?
            .resolve()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_ten_h_plus_v() {
        let codes: Vec<i32> = ALIGNMENTS.iter().map(|a| a.code()).collect();
        assert_eq!(codes, vec![11, 12, 13, 21, 22, 23, 31, 32, 33]);
    }

    #[test]
    fn display_uses_names() {
        let a = Alignment::new(HAlign::Right, VAlign::Bottom);
        assert_eq!(a.to_string(), "(right, bottom)");
    }
}
