// File: crates/pubstyle-core/tests/cms_label.rs
// Purpose: CMS label coordinates, sizes and sublabel rules for all four positions.

use pubstyle_core::{CmsLabel, HAlign, LayoutError, Position, RecordingSurface, VAlign};

const MARGINS: (f64, f64, f64, f64) = (0.12, 0.04, 0.12, 0.08);

fn assert_close(got: f64, want: f64) {
    assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
}

fn draw(label: &CmsLabel) -> RecordingSurface {
    let mut surface = RecordingSurface::new(MARGINS);
    label.draw(&mut surface);
    surface
}

#[test]
fn left_uses_frame_relative_padding() {
    let surface = draw(&CmsLabel::new());
    assert_eq!(surface.calls.len(), 1);
    let call = &surface.calls[0];
    assert_close(call.x, 0.1578);
    assert_close(call.y, 0.892);
    assert_close(call.style.size, 0.06);
    assert_eq!(call.text, "CMS");
    assert_eq!(call.style.font, 61);
    assert_eq!(call.style.align.code(), 13);
}

#[test]
fn center_and_right_share_inside_baseline() {
    let center = draw(&CmsLabel::new().with_position(Position::Center));
    assert_close(center.calls[0].x, 0.54);
    assert_close(center.calls[0].y, 0.892);
    assert_eq!(center.calls[0].style.align.code(), 23);

    let right = draw(&CmsLabel::new().with_position(Position::Right));
    assert_close(right.calls[0].x, 0.9222);
    assert_close(right.calls[0].y, 0.892);
    assert_eq!(right.calls[0].style.align.code(), 33);
}

#[test]
fn outside_uses_top_margin_relative_padding() {
    let surface = draw(&CmsLabel::new().with_position(Position::Outside));
    let call = &surface.calls[0];
    assert_close(call.x, 0.12);
    assert_close(call.y, 0.936);
    assert_eq!(call.style.align.horizontal, HAlign::Left);
    assert_eq!(call.style.align.vertical, VAlign::Bottom);
}

#[test]
fn explicit_padding_top_wins_for_every_position() {
    let mut label = CmsLabel::new();
    label.padding_top = Some(0.1);
    assert_close(draw(&label).calls[0].y, 1.0 - 0.08 - 0.1 * 0.8);

    label.position = Position::Outside;
    label.padding_top = Some(0.5);
    assert_close(draw(&label).calls[0].y, 1.0 - 0.5 * 0.08);
}

#[test]
fn empty_sublabel_is_not_rendered() {
    for position in Position::ALL {
        let label = CmsLabel::new().with_position(position);
        let mut surface = RecordingSurface::new(MARGINS);
        let placed = label.draw(&mut surface);
        assert_eq!(surface.calls.len(), 1, "{position}");
        assert!(placed.sublabel.is_none());
    }
}

#[test]
fn inside_sublabel_sits_below_with_parent_alignment() {
    let label = CmsLabel::new().with_sublabel_text("Preliminary");
    let surface = draw(&label);
    assert_eq!(surface.calls.len(), 2);
    let (main, sub) = (&surface.calls[0], &surface.calls[1]);
    assert_eq!(sub.text, "Preliminary");
    assert_eq!(sub.style.font, 52);
    assert_close(sub.style.size, 0.76 * main.style.size);
    assert_close(sub.x, main.x);
    assert_close(sub.y, 0.892 - 1.2 * 0.06);
    assert_eq!(sub.style.align, main.style.align);
}

#[test]
fn outside_sublabel_sits_right_on_same_baseline() {
    let label = CmsLabel::new().with_position(Position::Outside).with_sublabel_text("Simulation");
    let surface = draw(&label);
    assert_eq!(surface.calls.len(), 2);
    let (main, sub) = (&surface.calls[0], &surface.calls[1]);
    assert_close(sub.x, 0.12 + 0.12 * 0.84);
    assert_close(sub.y, main.y);
    assert_close(sub.style.size, 0.76 * 0.06);
    assert_eq!(sub.style.align.code(), 11);
}

#[test]
fn margins_are_reread_on_every_draw() {
    let label = CmsLabel::new().with_sublabel_text("Preliminary");
    let mut surface = RecordingSurface::new(MARGINS);
    let first = label.draw(&mut surface);
    let first_calls = surface.take_calls();
    surface.set_margins((0.1, 0.1, 0.1, 0.2));
    let second = label.draw(&mut surface);

    assert_close(first.label.size(), 0.06);
    assert_close(second.label.size(), 0.15);
    assert_close(second.label.x, 0.1 + 0.045 * 0.8);
    assert_close(second.label.y, 1.0 - 0.2 - 0.035 * 0.7);
    let sub = second.sublabel.expect("sublabel drawn");
    assert_close(sub.size(), 0.76 * 0.15);
    assert_eq!(first_calls.len(), 2);
    assert_close(first_calls[0].style.size, 0.06);
    assert_eq!(surface.calls.len(), 2);
    assert_close(surface.calls[0].style.size, 0.15);
}

#[test]
fn layout_matches_draw_without_rendering() {
    let label = CmsLabel::new().with_position(Position::Right).with_sublabel_text("Unpublished");
    let mut surface = RecordingSurface::new(MARGINS);
    let drawn = label.draw(&mut surface);
    assert_eq!(label.layout(&surface.margins), drawn);
}

#[test]
fn position_names_parse_or_fail() {
    for position in Position::ALL {
        assert_eq!(position.name().parse::<Position>(), Ok(position));
    }
    let mut label = CmsLabel::new();
    assert_eq!(
        label.set_position("top"),
        Err(LayoutError::UnrecognizedPosition("top".to_string()))
    );
    assert_eq!(label.position, Position::Left);
    label.set_position("outside").expect("known position");
    assert_eq!(label.position, Position::Outside);
}
