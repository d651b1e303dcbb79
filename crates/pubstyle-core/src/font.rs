// File: crates/pubstyle-core/src/font.rs
// Summary: Maps ROOT font codes (10 * family + precision) onto system font families and faces.

use skia_safe as skia;

const HELVETICA: &[&str] = &["Helvetica", "Arial", "Liberation Sans", "Nimbus Sans", "DejaVu Sans", "sans-serif"];
const TIMES: &[&str] = &["Times New Roman", "Times", "Liberation Serif", "Nimbus Roman", "DejaVu Serif", "serif"];
const COURIER: &[&str] = &["Courier New", "Courier", "Liberation Mono", "Nimbus Mono PS", "DejaVu Sans Mono", "monospace"];
const SYMBOL: &[&str] = &["Symbol", "Standard Symbols PS", "DejaVu Sans", "sans-serif"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontFace {
    pub families: &'static [&'static str],
    pub bold: bool,
    pub italic: bool,
}

impl FontFace {
    pub fn skia_style(&self) -> skia::FontStyle {
        match (self.bold, self.italic) {
            (true, true) => skia::FontStyle::bold_italic(),
            (true, false) => skia::FontStyle::bold(),
            (false, true) => skia::FontStyle::italic(),
            (false, false) => skia::FontStyle::normal(),
        }
    }
}

/// Face for a ROOT font code. Unknown families fall back to Helvetica regular.
pub fn face(code: i32) -> FontFace {
    let (families, bold, italic) = match code / 10 {
        1 => (TIMES, false, true),
        2 => (TIMES, true, false),
        3 => (TIMES, true, true),
        4 => (HELVETICA, false, false),
        5 => (HELVETICA, false, true),
        6 => (HELVETICA, true, false),
        7 => (HELVETICA, true, true),
        8 => (COURIER, false, false),
        9 => (COURIER, false, true),
        10 => (COURIER, true, false),
        11 => (COURIER, true, true),
        12 => (SYMBOL, false, false),
        13 => (TIMES, false, false),
        _ => {
            tracing::warn!(code, "unknown ROOT font code, using Helvetica");
            (HELVETICA, false, false)
        }
    };
    FontFace { families, bold, italic }
}
