#![allow(clippy::float_cmp)]

use super::*;
use crate::color::{BACKGROUND, Rgba};
use crate::input::PointerEvent;

// =============================================================
// Helpers
// =============================================================

const WHITE: Rgba = Rgba([255, 255, 255, 255]);

fn core() -> EngineCore {
    EngineCore::new(64, 48)
}

fn ev(x: f64, y: f64) -> PointerEvent {
    PointerEvent::new(x, y)
}

/// A horizontal stroke from `x0` to `x1` at height `y`, in two segments.
fn draw_stroke(core: &mut EngineCore, x0: f64, x1: f64, y: f64) {
    core.on_pointer_down(ev(x0, y));
    core.on_pointer_move(ev((x0 + x1) / 2.0, y));
    core.on_pointer_move(ev(x1, y));
    core.on_pointer_up();
}

fn has_render_needed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_core_is_idle_and_blank() {
    let c = core();
    assert!(!c.is_drawing());
    assert!(c.ink_bounds().is_none());
    assert!(c.labels().is_empty());
    assert_eq!(c.surface.width(), 64);
    assert_eq!(c.surface.height(), 48);
}

// =============================================================
// Input state machine
// =============================================================

#[test]
fn pointer_down_enters_drawing_and_snapshots() {
    let mut c = core();
    let actions = c.on_pointer_down(ev(10.0, 10.0));
    assert!(c.is_drawing());
    assert_eq!(c.history.undo_len(), 1);
    assert_eq!(actions, vec![Action::HistoryChanged { can_undo: true, can_redo: false }]);
}

#[test]
fn pointer_move_while_idle_is_ignored() {
    let mut c = core();
    let actions = c.on_pointer_move(ev(10.0, 10.0));
    assert!(actions.is_empty());
    assert!(c.ink_bounds().is_none());
    assert_eq!(c.history.undo_len(), 0);
}

#[test]
fn pointer_move_while_drawing_draws() {
    let mut c = core();
    c.on_pointer_down(ev(10.0, 10.0));
    let actions = c.on_pointer_move(ev(30.0, 10.0));
    assert!(has_render_needed(&actions));
    assert_eq!(c.surface.pixel(20, 10), Some(WHITE));
}

#[test]
fn moves_within_one_stroke_push_one_snapshot() {
    let mut c = core();
    c.on_pointer_down(ev(5.0, 5.0));
    for i in 1..20 {
        c.on_pointer_move(ev(5.0 + f64::from(i), 5.0));
    }
    c.on_pointer_up();
    assert_eq!(c.history.undo_len(), 1);
}

#[test]
fn rapid_strokes_push_one_snapshot_each() {
    let mut c = core();
    for i in 0..5 {
        let y = 5.0 + f64::from(i) * 8.0;
        draw_stroke(&mut c, 5.0, 40.0, y);
    }
    assert_eq!(c.history.undo_len(), 5);
}

#[test]
fn pointer_up_returns_to_idle() {
    let mut c = core();
    c.on_pointer_down(ev(10.0, 10.0));
    c.on_pointer_up();
    assert!(!c.is_drawing());
    assert!(c.on_pointer_move(ev(40.0, 40.0)).is_empty());
}

#[test]
fn pointer_leave_ends_stroke() {
    let mut c = core();
    c.on_pointer_down(ev(10.0, 10.0));
    c.on_pointer_leave();
    assert!(!c.is_drawing());
    assert!(c.surface.pen().is_none());
}

#[test]
fn pointer_up_while_idle_is_noop() {
    let mut c = core();
    assert!(c.on_pointer_up().is_empty());
    assert!(!c.is_drawing());
}

#[test]
fn second_pointer_down_starts_new_stroke() {
    let mut c = core();
    c.on_pointer_down(ev(10.0, 10.0));
    c.on_pointer_down(ev(40.0, 30.0));
    assert_eq!(c.history.undo_len(), 2);
    assert_eq!(c.surface.pen(), Some(Point::new(40.0, 30.0)));
}

#[test]
fn client_coordinates_are_made_canvas_local() {
    let mut c = core();
    c.set_canvas_origin(Point::new(100.0, 50.0));
    c.on_pointer_down(ev(110.0, 60.0));
    c.on_pointer_move(ev(130.0, 60.0));
    assert_eq!(c.surface.pixel(20, 10), Some(WHITE));
    assert_eq!(c.input, InputState::Drawing);
    assert_eq!(c.surface.pen(), Some(Point::new(30.0, 10.0)));
}

#[test]
fn pressure_scales_stroke_width() {
    let mut c = core();
    c.set_brush_size(20);
    c.on_pointer_down(ev(10.0, 20.0).with_pressure(0.1));
    c.on_pointer_move(ev(50.0, 20.0).with_pressure(0.1));
    // Width 2 covers rows 19 and 20 only.
    assert_eq!(c.surface.pixel(30, 20), Some(WHITE));
    assert_eq!(c.surface.pixel(30, 25), Some(BACKGROUND));
}

#[test]
fn missing_pressure_uses_full_brush() {
    let mut c = core();
    c.set_brush_size(20);
    c.on_pointer_down(ev(10.0, 20.0));
    c.on_pointer_move(ev(50.0, 20.0));
    assert_eq!(c.surface.pixel(30, 25), Some(WHITE));
}

#[test]
fn eraser_toggle_mid_stroke_applies_per_segment() {
    let mut c = core();
    c.set_brush_size(4);
    // Ink under the second segment so erasing is observable.
    draw_stroke(&mut c, 30.0, 60.0, 20.0);
    c.set_brush_size(2);

    c.on_pointer_down(ev(5.0, 20.0));
    c.on_pointer_move(ev(20.0, 20.0));
    c.toggle_eraser();
    c.on_pointer_move(ev(50.0, 20.0));
    c.on_pointer_up();

    assert_eq!(c.surface.pixel(12, 20), Some(WHITE));
    assert_eq!(c.surface.pixel(40, 20), Some(BACKGROUND));
    assert_eq!(c.surface.pixel(58, 20), Some(WHITE));
}

#[test]
fn color_change_mid_stroke_applies_per_segment() {
    let mut c = core();
    c.on_pointer_down(ev(5.0, 20.0));
    c.on_pointer_move(ev(20.0, 20.0));
    assert!(c.set_color("#ee3333"));
    c.on_pointer_move(ev(50.0, 20.0));
    c.on_pointer_up();

    assert_eq!(c.surface.pixel(10, 20), Some(WHITE));
    assert_eq!(c.surface.pixel(40, 20), Some(Rgba([0xee, 0x33, 0x33, 255])));
}

// =============================================================
// Undo / redo through the engine
// =============================================================

#[test]
fn undo_then_redo_restores_bitmap() {
    let mut c = core();
    draw_stroke(&mut c, 5.0, 40.0, 10.0);
    draw_stroke(&mut c, 5.0, 40.0, 30.0);
    let before = c.surface.snapshot();

    let undo = c.undo();
    assert!(has_render_needed(&undo));
    assert_ne!(c.surface.snapshot(), before);
    let redo = c.redo();
    assert!(has_render_needed(&redo));
    assert_eq!(c.surface.snapshot(), before);
}

#[test]
fn undo_on_empty_history_returns_no_actions() {
    let mut c = core();
    let before = c.surface.snapshot();
    assert!(c.undo().is_empty());
    assert_eq!(c.surface.snapshot(), before);
    assert_eq!(c.history.redo_len(), 0);
}

#[test]
fn redo_on_empty_returns_no_actions() {
    let mut c = core();
    draw_stroke(&mut c, 5.0, 40.0, 10.0);
    assert!(c.redo().is_empty());
}

#[test]
fn stroke_after_undo_clears_redo() {
    let mut c = core();
    draw_stroke(&mut c, 5.0, 40.0, 10.0);
    draw_stroke(&mut c, 5.0, 40.0, 30.0);
    c.undo();
    assert!(c.history.can_redo());

    let actions = c.on_pointer_down(ev(20.0, 20.0));
    assert_eq!(actions, vec![Action::HistoryChanged { can_undo: true, can_redo: false }]);
    c.on_pointer_up();
    let current = c.surface.snapshot();
    assert!(c.redo().is_empty());
    assert_eq!(c.surface.snapshot(), current);
}

#[test]
fn undo_reports_history_state() {
    let mut c = core();
    draw_stroke(&mut c, 5.0, 40.0, 10.0);
    let actions = c.undo();
    assert!(actions.contains(&Action::HistoryChanged { can_undo: false, can_redo: true }));
}

// =============================================================
// Tool state
// =============================================================

#[test]
fn unknown_color_is_ignored() {
    let mut c = core();
    assert!(!c.set_color("mauve-ish"));
    assert_eq!(c.tools.color, WHITE);
}

#[test]
fn brush_size_is_clamped() {
    let mut c = core();
    c.set_brush_size(99);
    assert_eq!(c.tools.brush_size, 20);
    c.set_brush_size(0);
    assert_eq!(c.tools.brush_size, 1);
}

// =============================================================
// Overlay
// =============================================================

#[test]
fn place_labels_uses_ink_bounds() {
    let mut c = EngineCore::new(1000, 1000);
    c.set_brush_size(1);
    c.on_pointer_down(ev(0.5, 0.5));
    c.on_pointer_move(ev(95.5, 100.5));
    c.on_pointer_up();
    assert_eq!(c.ink_bounds(), Some(InkBounds { min_x: 0, max_x: 95, min_y: 0, max_y: 100 }));

    let n = c.place_labels(vec!["x = 5".to_string(), "x + 1 = 6".to_string()]);
    assert_eq!(n, 2);
    assert_eq!(c.labels()[0].text, "x = 5");
    assert_eq!(c.labels()[1].text, "x + 1 = 6");
    assert!((c.labels()[0].position.x - 10.0).abs() < 1e-9);
    assert!((c.labels()[0].position.y - 50.0).abs() < 1e-9);
}

#[test]
fn place_labels_on_blank_canvas_uses_default_anchor() {
    let mut c = core();
    c.place_labels(vec!["1 = 1".to_string()]);
    assert_eq!(c.labels()[0].position, Point::new(10.0, 200.0));
}

#[test]
fn dragged_label_survives_next_batch() {
    let mut c = core();
    draw_stroke(&mut c, 5.0, 40.0, 10.0);
    c.place_labels(vec!["a = 1".to_string()]);
    assert!(c.drag_label(0, Point::new(300.0, 400.0)));

    draw_stroke(&mut c, 5.0, 40.0, 30.0);
    c.place_labels(vec!["b = 2".to_string()]);
    assert_eq!(c.labels()[0].position, Point::new(300.0, 400.0));
    assert_eq!(c.labels().len(), 2);
}

// =============================================================
// Clearing
// =============================================================

#[test]
fn clear_ink_keeps_labels_and_is_undoable() {
    let mut c = core();
    draw_stroke(&mut c, 5.0, 40.0, 10.0);
    draw_stroke(&mut c, 5.0, 40.0, 30.0);
    let before = c.surface.snapshot();
    c.place_labels(vec!["a = 1".to_string()]);

    let actions = c.clear_ink();
    assert!(has_render_needed(&actions));
    assert!(actions.contains(&Action::HistoryChanged { can_undo: true, can_redo: false }));
    assert!(c.ink_bounds().is_none());
    assert_eq!(c.history.undo_len(), 3);
    assert_eq!(c.labels().len(), 1);

    c.undo();
    assert_eq!(c.surface.snapshot(), before);
    c.redo();
    assert!(c.ink_bounds().is_none());
}

#[test]
fn clear_ink_on_blank_surface_records_nothing() {
    let mut c = core();
    assert!(c.clear_ink().is_empty());
    assert!(!c.history.can_undo());
}

#[test]
fn place_labels_for_uses_given_bounds() {
    let mut c = EngineCore::new(1000, 1000);
    draw_stroke(&mut c, 500.0, 900.0, 900.0);
    let captured = InkBounds { min_x: 0, max_x: 95, min_y: 0, max_y: 100 };
    c.place_labels_for(Some(captured), vec!["x = 1".to_string()]);
    assert_eq!(c.labels()[0].position, Point::new(10.0, 50.0));
}

#[test]
fn reset_clears_everything() {
    let mut c = core();
    draw_stroke(&mut c, 5.0, 40.0, 10.0);
    draw_stroke(&mut c, 5.0, 40.0, 30.0);
    c.undo();
    c.place_labels(vec!["a = 1".to_string()]);
    c.on_pointer_down(ev(3.0, 3.0));

    let actions = c.reset();
    assert!(has_render_needed(&actions));
    assert!(!c.is_drawing());
    assert!(c.ink_bounds().is_none());
    assert_eq!(c.history.undo_len(), 0);
    assert_eq!(c.history.redo_len(), 0);
    assert!(c.labels().is_empty());
    assert_eq!(c.overlay.anchor(), Point::new(10.0, 200.0));
}

#[test]
fn reset_keeps_tool_settings() {
    let mut c = core();
    c.set_color("#40c057");
    c.set_brush_size(9);
    c.reset();
    assert_eq!(c.tools.color_name, "#40c057");
    assert_eq!(c.tools.brush_size, 9);
}
