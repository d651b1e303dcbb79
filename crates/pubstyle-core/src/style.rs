// File: crates/pubstyle-core/src/style.rs
// Summary: Global figure style presets and the scoped guard that activates one per thread.

use std::cell::RefCell;
use std::marker::PhantomData;

use skia_safe as skia;

/// Figure-wide drawing attributes, the counterpart of ROOT's `gStyle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub name: &'static str,
    pub background: skia::Color,
    pub frame_line: skia::Color,
    pub frame_line_width: f32,
    pub text: skia::Color,
    pub hist_line: skia::Color,
    pub hist_line_width: f32,
    pub hist_fill: skia::Color,
    pub marker: skia::Color,
    /// Marker radius as a fraction of the canvas height.
    pub marker_size: f64,
    /// ROOT font code for axis titles.
    pub title_font: i32,
    /// Axis title size as a fraction of the canvas height.
    pub title_size: f64,
}

impl Style {
    /// CMS Technical Design Report style.
    pub fn tdr() -> Self {
        Self {
            name: "tdr",
            background: skia::Color::WHITE,
            frame_line: skia::Color::BLACK,
            frame_line_width: 1.0,
            text: skia::Color::BLACK,
            hist_line: skia::Color::BLACK,
            hist_line_width: 1.0,
            hist_fill: skia::Color::from_argb(255, 255, 204, 102), // kOrange-2
            marker: skia::Color::BLACK,
            marker_size: 0.006,
            title_font: 42,
            title_size: 0.06,
        }
    }

    /// ROOT's plain style; what is active before any session is entered.
    pub fn plain() -> Self {
        Self {
            name: "plain",
            background: skia::Color::WHITE,
            frame_line: skia::Color::BLACK,
            frame_line_width: 1.0,
            text: skia::Color::BLACK,
            hist_line: skia::Color::from_argb(255, 0, 0, 255),
            hist_line_width: 1.0,
            hist_fill: skia::Color::WHITE,
            marker: skia::Color::BLACK,
            marker_size: 0.005,
            title_font: 62,
            title_size: 0.035,
        }
    }
}

/// Return a list of built-in style presets.
pub fn presets() -> Vec<Style> {
    vec![Style::tdr(), Style::plain()]
}

/// Find a style by its `name`, falling back to plain.
pub fn find(name: &str) -> Style {
    for s in presets() { if s.name.eq_ignore_ascii_case(name) { return s; } }
    Style::plain()
}

thread_local! {
    static ACTIVE: RefCell<Style> = RefCell::new(Style::plain());
}

/// The style active on this thread.
pub fn current() -> Style {
    ACTIVE.with(|s| *s.borrow())
}

/// Keeps a style active until dropped, then restores the one it replaced.
///
/// Guards restore in LIFO order and are tied to the thread that created them.
#[must_use = "the style is restored as soon as the guard is dropped"]
pub struct StyleGuard {
    previous: Style,
    _not_send: PhantomData<*const ()>,
}

impl StyleGuard {
    pub fn enter(style: Style) -> Self {
        let previous = ACTIVE.with(|s| std::mem::replace(&mut *s.borrow_mut(), style));
        tracing::debug!(style = style.name, previous = previous.name, "enter style");
        Self { previous, _not_send: PhantomData }
    }
}

impl Drop for StyleGuard {
    fn drop(&mut self) {
        let previous = self.previous;
        ACTIVE.with(|s| *s.borrow_mut() = previous);
        tracing::debug!(style = previous.name, "restore style");
    }
}

/// Run `f` with `style` active.
pub fn with_style<R>(style: Style, f: impl FnOnce() -> R) -> R {
    let _guard = StyleGuard::enter(style);
    f()
}
