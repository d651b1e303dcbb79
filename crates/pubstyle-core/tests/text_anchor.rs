// File: crates/pubstyle-core/tests/text_anchor.rs
// Purpose: Text drawn on the Skia canvas lands where its alignment anchor says.
// Behavior:
// - Draws "HHHH" at the canvas center with one alignment per fresh canvas.
// - Finds the ink bounding box of dark pixels and checks it against the anchor pixel.

use pubstyle_core::{Alignment, Canvas, DrawingSurface, HAlign, TextStyle, VAlign};

const ANCHOR: (u32, u32) = (400, 300);
// 0.1 of a 600 px canvas.
const SIZE_PX: f64 = 60.0;

struct Ink {
    min_x: u32,
    max_x: u32,
    min_y: u32,
    max_y: u32,
}

fn ink_for(align: Alignment) -> Ink {
    let mut canvas = Canvas::new(800, 600, (0.12, 0.04, 0.12, 0.08)).expect("canvas");
    canvas.clear();
    let style = TextStyle { font: 42, size: 0.1, align };
    canvas.draw_text_ndc(0.5, 0.5, "HHHH", &style);

    let bytes = canvas.png_bytes().expect("png bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    let mut ink = Ink { min_x: u32::MAX, max_x: 0, min_y: u32::MAX, max_y: 0 };
    for (x, y, px) in img.enumerate_pixels() {
        if px.0[0] < 128 {
            ink.min_x = ink.min_x.min(x);
            ink.max_x = ink.max_x.max(x);
            ink.min_y = ink.min_y.min(y);
            ink.max_y = ink.max_y.max(y);
        }
    }
    assert!(ink.min_x <= ink.max_x, "{align}: no text was drawn");
    ink
}

fn assert_near(got: f64, want: f64, tol: f64, what: &str) {
    assert!((got - want).abs() <= tol, "{what}: got {got}, want {want} +/- {tol}");
}

#[test]
fn left_aligned_text_starts_at_anchor() {
    let ink = ink_for(Alignment::new(HAlign::Left, VAlign::Bottom));
    let (ax, _) = ANCHOR;
    assert!(ink.min_x >= ax, "ink starts at {} left of anchor {ax}", ink.min_x);
    assert_near(ink.min_x as f64, ax as f64, 0.15 * SIZE_PX, "left edge");
}

#[test]
fn right_aligned_text_ends_at_anchor() {
    let ink = ink_for(Alignment::new(HAlign::Right, VAlign::Bottom));
    let (ax, _) = ANCHOR;
    assert!(ink.max_x <= ax, "ink ends at {} right of anchor {ax}", ink.max_x);
    assert_near(ink.max_x as f64, ax as f64, 0.15 * SIZE_PX, "right edge");
}

#[test]
fn centered_text_straddles_anchor() {
    let ink = ink_for(Alignment::new(HAlign::Center, VAlign::Bottom));
    let mid = 0.5 * (ink.min_x + ink.max_x) as f64;
    assert_near(mid, ANCHOR.0 as f64, 0.1 * SIZE_PX, "horizontal middle");
    assert!(ink.min_x < ANCHOR.0 && ink.max_x > ANCHOR.0);
}

#[test]
fn bottom_alignment_sits_on_baseline() {
    // "H" has no descender, so its ink ends on the baseline.
    let ink = ink_for(Alignment::new(HAlign::Left, VAlign::Bottom));
    let (_, ay) = ANCHOR;
    assert_near(ink.max_y as f64, ay as f64, 2.0, "baseline");
    assert!(ink.min_y < ay - (0.5 * SIZE_PX) as u32, "glyphs should rise above the baseline");
}

#[test]
fn top_alignment_hangs_below_anchor() {
    let ink = ink_for(Alignment::new(HAlign::Left, VAlign::Top));
    let (_, ay) = ANCHOR;
    assert!(ink.min_y >= ay, "ink starts at row {} above anchor {ay}", ink.min_y);
    assert!(ink.min_y < ay + (0.5 * SIZE_PX) as u32, "ink starts too far below the anchor");
}

#[test]
fn center_alignment_spans_anchor_row() {
    let ink = ink_for(Alignment::new(HAlign::Left, VAlign::Center));
    let (_, ay) = ANCHOR;
    assert!(ink.min_y < ay && ink.max_y > ay, "rows {}..{} miss anchor {ay}", ink.min_y, ink.max_y);
}
