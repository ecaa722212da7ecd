#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;
use crate::geo::GeoPoint;

// =============================================================
// Helpers
// =============================================================

/// Picker backed by a fixed table of screen positions; anything else misses.
struct TablePicker {
    hits: HashMap<(i64, i64), GeoPoint>,
}

impl TablePicker {
    fn new(entries: &[((f64, f64), (f64, f64))]) -> Self {
        let hits = entries
            .iter()
            .map(|&((x, y), (lon, lat))| (key(ScreenPoint::new(x, y)), GeoPoint::new(lon, lat)))
            .collect();
        Self { hits }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn key(p: ScreenPoint) -> (i64, i64) {
    (p.x.round() as i64, p.y.round() as i64)
}

impl SurfacePicker for TablePicker {
    fn resolve(&self, screen: ScreenPoint) -> Option<GeoPoint> {
        self.hits.get(&key(screen)).copied()
    }
}

fn identity_picker() -> impl Fn(ScreenPoint) -> Option<GeoPoint> {
    |s: ScreenPoint| Some(GeoPoint::new(s.x, s.y))
}

fn shift() -> Modifiers {
    Modifiers::shift()
}

fn none() -> Modifiers {
    Modifiers::default()
}

fn pt(x: f64, y: f64) -> ScreenPoint {
    ScreenPoint::new(x, y)
}

/// Arm a drag and capture `a` and `b` as the two corners.
fn drag(sel: &mut RectangleSelector, a: ScreenPoint, b: ScreenPoint) {
    let picker = identity_picker();
    sel.on_pointer_down(Button::Primary, shift());
    sel.on_pointer_move(a, shift(), &picker);
    sel.on_pointer_move(b, shift(), &picker);
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_selector_is_idle_and_hidden() {
    let sel = RectangleSelector::default();
    assert_eq!(sel.state(), InteractionState::Idle);
    assert!(!sel.is_visible());
    assert!(sel.current_rectangle().is_none());
}

#[test]
fn default_config_uses_shift() {
    let sel = RectangleSelector::default();
    assert_eq!(sel.config().drag_modifier, DragModifier::Shift);
}

// =============================================================
// Pointer down
// =============================================================

#[test]
fn pointer_down_with_shift_arms() {
    let mut sel = RectangleSelector::default();
    assert!(sel.on_pointer_down(Button::Primary, shift()));
    assert_eq!(sel.state(), InteractionState::DragStarted);
}

#[test]
fn pointer_down_without_modifier_is_ignored() {
    let mut sel = RectangleSelector::default();
    assert!(!sel.on_pointer_down(Button::Primary, none()));
    assert_eq!(sel.state(), InteractionState::Idle);
}

#[test]
fn pointer_down_secondary_button_is_ignored() {
    let mut sel = RectangleSelector::default();
    assert!(!sel.on_pointer_down(Button::Secondary, shift()));
    assert_eq!(sel.state(), InteractionState::Idle);
}

#[test]
fn pointer_down_respects_configured_modifier() {
    let mut sel = RectangleSelector::new(SelectorConfig { drag_modifier: DragModifier::Ctrl });
    assert!(!sel.on_pointer_down(Button::Primary, shift()));
    assert!(sel.on_pointer_down(Button::Primary, Modifiers { ctrl: true, ..Default::default() }));
}

// =============================================================
// Pointer move
// =============================================================

#[test]
fn move_while_idle_is_ignored() {
    let mut sel = RectangleSelector::default();
    let picker = identity_picker();
    assert!(!sel.on_pointer_move(pt(1.0, 1.0), shift(), &picker));
    assert_eq!(sel.state(), InteractionState::Idle);
}

#[test]
fn move_without_modifier_is_ignored() {
    let mut sel = RectangleSelector::default();
    let picker = identity_picker();
    sel.on_pointer_down(Button::Primary, shift());
    sel.on_pointer_move(pt(0.0, 0.0), none(), &picker);
    assert_eq!(sel.state(), InteractionState::DragStarted);
}

#[test]
fn first_move_captures_corner_only() {
    // P3: a single corner never shows the selection or sets bounds.
    let mut sel = RectangleSelector::default();
    let picker = identity_picker();
    sel.on_pointer_down(Button::Primary, shift());
    let published = sel.on_pointer_move(pt(0.1, 0.2), shift(), &picker);
    assert!(!published);
    assert!(!sel.is_visible());
    assert!(sel.current_rectangle().is_none());
    assert_eq!(sel.state(), InteractionState::DragActive { first: GeoPoint::new(0.1, 0.2) });
}

#[test]
fn second_move_publishes_bounding_rectangle() {
    // P1: edges are the min/max of the two corners.
    let mut sel = RectangleSelector::default();
    drag(&mut sel, pt(0.3, -0.1), pt(-0.2, 0.4));
    assert_eq!(sel.current_rectangle(), Some(GeoRectangle { west: -0.2, south: -0.1, east: 0.3, north: 0.4 }));
    assert!(sel.is_visible());
}

#[test]
fn later_moves_keep_first_corner() {
    let mut sel = RectangleSelector::default();
    let picker = identity_picker();
    drag(&mut sel, pt(0.0, 0.0), pt(1.0, 1.0));
    sel.on_pointer_move(pt(-1.0, 2.0), shift(), &picker);
    assert_eq!(sel.current_rectangle(), Some(GeoRectangle { west: -1.0, south: 0.0, east: 0.0, north: 2.0 }));
}

#[test]
fn repeated_identical_move_does_not_republish() {
    let mut sel = RectangleSelector::default();
    let picker = identity_picker();
    drag(&mut sel, pt(0.0, 0.0), pt(1.0, 1.0));
    assert!(!sel.on_pointer_move(pt(1.0, 1.0), shift(), &picker));
}

#[test]
fn ray_miss_keeps_previous_state() {
    // P2: a miss changes neither rectangle nor visibility.
    let picker = TablePicker::new(&[((10.0, 10.0), (0.0, 0.0)), ((20.0, 20.0), (0.02, 0.01))]);
    let mut sel = RectangleSelector::default();
    sel.on_pointer_down(Button::Primary, shift());
    sel.on_pointer_move(pt(10.0, 10.0), shift(), &picker);
    sel.on_pointer_move(pt(20.0, 20.0), shift(), &picker);
    let before = sel.selection();
    let before_state = sel.state();

    assert!(!sel.on_pointer_move(pt(999.0, 999.0), shift(), &picker));
    assert_eq!(sel.selection(), before);
    assert_eq!(sel.state(), before_state);
}

#[test]
fn ray_miss_before_first_corner_keeps_waiting() {
    let picker = TablePicker::new(&[((5.0, 5.0), (0.5, 0.5))]);
    let mut sel = RectangleSelector::default();
    sel.on_pointer_down(Button::Primary, shift());
    sel.on_pointer_move(pt(1.0, 1.0), shift(), &picker);
    assert_eq!(sel.state(), InteractionState::DragStarted);
    sel.on_pointer_move(pt(5.0, 5.0), shift(), &picker);
    assert_eq!(sel.state(), InteractionState::DragActive { first: GeoPoint::new(0.5, 0.5) });
}

#[test]
fn coincident_corners_are_legal() {
    let mut sel = RectangleSelector::default();
    drag(&mut sel, pt(0.5, 0.5), pt(0.5, 0.5));
    assert_eq!(sel.current_rectangle(), Some(GeoRectangle { west: 0.5, south: 0.5, east: 0.5, north: 0.5 }));
    assert!(sel.is_visible());
}

// =============================================================
// Pointer up
// =============================================================

#[test]
fn pointer_up_returns_to_idle_and_keeps_selection() {
    let mut sel = RectangleSelector::default();
    drag(&mut sel, pt(0.0, 0.0), pt(0.02, 0.01));
    assert!(sel.on_pointer_up(Button::Primary, shift()));
    assert_eq!(sel.state(), InteractionState::Idle);
    assert!(sel.is_visible());
    assert_eq!(sel.current_rectangle(), Some(GeoRectangle { west: 0.0, south: 0.0, east: 0.02, north: 0.01 }));
}

#[test]
fn pointer_up_without_modifier_is_ignored() {
    let mut sel = RectangleSelector::default();
    drag(&mut sel, pt(0.0, 0.0), pt(1.0, 1.0));
    assert!(!sel.on_pointer_up(Button::Primary, none()));
    assert!(sel.state().is_dragging());
}

#[test]
fn pointer_up_while_idle_is_noop() {
    let mut sel = RectangleSelector::default();
    assert!(!sel.on_pointer_up(Button::Primary, shift()));
}

#[test]
fn moves_after_pointer_up_are_ignored() {
    let mut sel = RectangleSelector::default();
    let picker = identity_picker();
    drag(&mut sel, pt(0.0, 0.0), pt(1.0, 1.0));
    sel.on_pointer_up(Button::Primary, shift());
    assert!(!sel.on_pointer_move(pt(5.0, 5.0), shift(), &picker));
    assert_eq!(sel.current_rectangle(), Some(GeoRectangle { west: 0.0, south: 0.0, east: 1.0, north: 1.0 }));
}

// =============================================================
// Re-arming
// =============================================================

#[test]
fn rearm_mid_drag_restarts_corner_capture() {
    let mut sel = RectangleSelector::default();
    let picker = identity_picker();
    drag(&mut sel, pt(0.0, 0.0), pt(1.0, 1.0));
    assert!(sel.on_pointer_down(Button::Primary, shift()));
    assert_eq!(sel.state(), InteractionState::DragStarted);

    // The next move is a new first corner, not a rectangle update.
    assert!(!sel.on_pointer_move(pt(3.0, 3.0), shift(), &picker));
    assert_eq!(sel.current_rectangle(), Some(GeoRectangle { west: 0.0, south: 0.0, east: 1.0, north: 1.0 }));

    sel.on_pointer_move(pt(4.0, 2.0), shift(), &picker);
    assert_eq!(sel.current_rectangle(), Some(GeoRectangle { west: 3.0, south: 2.0, east: 4.0, north: 3.0 }));
}

#[test]
fn next_drag_overwrites_previous_rectangle() {
    let mut sel = RectangleSelector::default();
    drag(&mut sel, pt(0.0, 0.0), pt(1.0, 1.0));
    sel.on_pointer_up(Button::Primary, shift());
    drag(&mut sel, pt(-1.0, -1.0), pt(-0.5, -0.5));
    assert_eq!(sel.current_rectangle(), Some(GeoRectangle { west: -1.0, south: -1.0, east: -0.5, north: -0.5 }));
}

// =============================================================
// Click
// =============================================================

#[test]
fn click_hides_and_keeps_bounds() {
    // P4
    let mut sel = RectangleSelector::default();
    drag(&mut sel, pt(0.0, 0.0), pt(1.0, 1.0));
    sel.on_pointer_up(Button::Primary, shift());
    let rect = sel.current_rectangle();

    assert!(sel.on_click());
    assert!(!sel.is_visible());
    assert_eq!(sel.current_rectangle(), rect);
}

#[test]
fn click_when_hidden_reports_no_change() {
    let mut sel = RectangleSelector::default();
    assert!(!sel.on_click());
    assert!(!sel.is_visible());
}

#[test]
fn click_mid_drag_keeps_interaction_state() {
    let mut sel = RectangleSelector::default();
    drag(&mut sel, pt(0.0, 0.0), pt(1.0, 1.0));
    let state = sel.state();
    sel.on_click();
    assert_eq!(sel.state(), state);
    assert!(!sel.is_visible());
}

#[test]
fn move_after_click_shows_again() {
    let mut sel = RectangleSelector::default();
    let picker = identity_picker();
    drag(&mut sel, pt(0.0, 0.0), pt(1.0, 1.0));
    sel.on_click();
    assert!(sel.on_pointer_move(pt(1.0, 1.0), shift(), &picker));
    assert!(sel.is_visible());
}

// =============================================================
// Scenario
// =============================================================

#[test]
fn scenario_drag_produces_expected_rectangle() {
    let picker = TablePicker::new(&[((100.0, 100.0), (0.0, 0.0)), ((200.0, 150.0), (0.02, 0.01))]);
    let mut sel = RectangleSelector::default();
    sel.on_pointer_down(Button::Primary, shift());
    sel.on_pointer_move(pt(100.0, 100.0), shift(), &picker);
    sel.on_pointer_move(pt(200.0, 150.0), shift(), &picker);
    sel.on_pointer_up(Button::Primary, shift());

    assert_eq!(sel.current_rectangle(), Some(GeoRectangle { west: 0.0, south: 0.0, east: 0.02, north: 0.01 }));
    assert!(sel.is_visible());
}

// =============================================================
// Publication
// =============================================================

#[test]
fn subscriber_sees_whole_snapshot() {
    let mut sel = RectangleSelector::default();
    let rx = sel.subscribe();
    drag(&mut sel, pt(0.0, 0.0), pt(2.0, 3.0));
    let seen = *rx.borrow();
    assert_eq!(seen, sel.selection());
    assert_eq!(seen.rectangle, Some(GeoRectangle { west: 0.0, south: 0.0, east: 2.0, north: 3.0 }));
}

#[test]
fn subscriber_not_notified_by_first_corner() {
    let mut sel = RectangleSelector::default();
    let picker = identity_picker();
    let rx = sel.subscribe();
    sel.on_pointer_down(Button::Primary, shift());
    sel.on_pointer_move(pt(0.0, 0.0), shift(), &picker);
    assert_eq!(rx.has_changed().ok(), Some(false));
}

#[tokio::test]
async fn subscriber_task_receives_update() {
    let mut sel = RectangleSelector::default();
    let mut rx = sel.subscribe();
    let waiter = tokio::spawn(async move {
        rx.changed().await.unwrap();
        *rx.borrow_and_update()
    });
    drag(&mut sel, pt(0.0, 0.0), pt(1.0, 1.0));
    let seen = waiter.await.unwrap();
    assert!(seen.visible);
    assert_eq!(seen.rectangle, Some(GeoRectangle { west: 0.0, south: 0.0, east: 1.0, north: 1.0 }));
}

#[test]
fn handle_reports_live_coordinates() {
    let mut sel = RectangleSelector::default();
    let handle = sel.handle();
    assert!(handle.coordinates().is_none());
    drag(&mut sel, pt(0.0, 0.0), pt(1.0, 1.0));
    assert!(handle.is_live());
    assert_eq!(handle.coordinates(), Some(GeoRectangle { west: 0.0, south: 0.0, east: 1.0, north: 1.0 }));
}

#[test]
fn handle_after_selector_dropped_has_no_coordinates() {
    let mut sel = RectangleSelector::default();
    drag(&mut sel, pt(0.0, 0.0), pt(1.0, 1.0));
    let handle = sel.handle();
    drop(sel);
    assert!(!handle.is_live());
    assert!(handle.coordinates().is_none());
    assert!(handle.snapshot().rectangle.is_some());
}
