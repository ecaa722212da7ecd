//! Rectangle selector: turns modified pointer drags into a geographic rectangle.
//!
//! The selector is the single writer of the current [`Selection`]. Every
//! change is published as one whole value through a `tokio::sync::watch`
//! channel, so a renderer reading on another task or thread never sees a
//! rectangle with some edges from one move and some from the next.
//!
//! Gesture flow:
//!
//! 1. pointer-down with the drag modifier arms the drag ([`InteractionState::DragStarted`]);
//! 2. the first resolvable move records the first corner ([`InteractionState::DragActive`]);
//! 3. each later move publishes the bounding rectangle of the first corner and
//!    the pointer, and makes it visible;
//! 4. pointer-up returns to idle and leaves the last rectangle in place.
//!
//! A plain click hides the selection without touching its bounds.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::camera::ScreenPoint;
use crate::geo::GeoRectangle;
use crate::input::{Button, DragModifier, InteractionState, Modifiers};
use crate::picker::SurfacePicker;

/// The published selection: the rectangle (once one has formed) and whether to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// `None` until a drag has produced a rectangle with two corners.
    pub rectangle: Option<GeoRectangle>,
    /// Whether the overlay should be drawn.
    pub visible: bool,
}

/// Selector configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Key that must be held for pointer events to draw a rectangle.
    pub drag_modifier: DragModifier,
}

/// Read-only handle to the selection published by a [`RectangleSelector`].
///
/// Cheap to clone. Outlives the selector; once the selector is gone the
/// handle still reports the last snapshot but [`SelectionHandle::coordinates`]
/// yields nothing.
#[derive(Debug, Clone)]
pub struct SelectionHandle {
    rx: watch::Receiver<Selection>,
}

impl SelectionHandle {
    /// The most recently published selection.
    #[must_use]
    pub fn snapshot(&self) -> Selection {
        *self.rx.borrow()
    }

    /// Whether the publishing selector still exists.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.rx.has_changed().is_ok()
    }

    /// Live rectangle coordinates, or `None` when no rectangle has formed or
    /// the selector is gone.
    #[must_use]
    pub fn coordinates(&self) -> Option<GeoRectangle> {
        if !self.is_live() {
            return None;
        }
        self.snapshot().rectangle
    }
}

/// Pointer-driven rectangle selection state machine.
#[derive(Debug)]
pub struct RectangleSelector {
    config: SelectorConfig,
    state: InteractionState,
    tx: watch::Sender<Selection>,
}

impl Default for RectangleSelector {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl RectangleSelector {
    #[must_use]
    pub fn new(config: SelectorConfig) -> Self {
        let (tx, _rx) = watch::channel(Selection::default());
        Self { config, state: InteractionState::Idle, tx }
    }

    // --- Input events ---

    /// Handle a pointer press. Returns `true` if a drag was armed.
    ///
    /// Only the primary button with the drag modifier held arms a drag.
    /// Pressing again mid-drag restarts corner capture.
    pub fn on_pointer_down(&mut self, button: Button, modifiers: Modifiers) -> bool {
        if button != Button::Primary || !self.config.drag_modifier.is_held(modifiers) {
            return false;
        }
        if self.state.is_dragging() {
            tracing::debug!(state = ?self.state, "drag re-armed; first corner cleared");
        } else {
            tracing::debug!("drag armed");
        }
        self.state = InteractionState::DragStarted;
        true
    }

    /// Handle a pointer move. Returns `true` if a new selection was published.
    pub fn on_pointer_move<P>(&mut self, screen: ScreenPoint, modifiers: Modifiers, picker: &P) -> bool
    where
        P: SurfacePicker + ?Sized,
    {
        if !self.state.is_dragging() || !self.config.drag_modifier.is_held(modifiers) {
            return false;
        }

        let Some(point) = picker.resolve(screen) else {
            tracing::trace!(x = screen.x, y = screen.y, "pick missed the surface");
            return false;
        };

        match self.state {
            InteractionState::DragStarted => {
                tracing::debug!(lon = point.longitude, lat = point.latitude, "first corner captured");
                self.state = InteractionState::DragActive { first: point };
                false
            }
            InteractionState::DragActive { first } => {
                let next = Selection { rectangle: Some(GeoRectangle::from_corners(first, point)), visible: true };
                self.publish(next)
            }
            InteractionState::Idle => false,
        }
    }

    /// Handle a pointer release. Returns `true` if a drag ended.
    ///
    /// The release must carry the drag modifier, matching the press. The last
    /// rectangle becomes the final selection and its visibility is kept.
    pub fn on_pointer_up(&mut self, button: Button, modifiers: Modifiers) -> bool {
        if button != Button::Primary || !self.config.drag_modifier.is_held(modifiers) {
            return false;
        }
        if !self.state.is_dragging() {
            return false;
        }
        self.state = InteractionState::Idle;
        tracing::debug!(selection = ?self.selection(), "drag ended");
        true
    }

    /// Handle a plain click: hide the selection. Returns `true` if visibility changed.
    ///
    /// Bounds and interaction state are left as they are.
    pub fn on_click(&mut self) -> bool {
        let changed = self.tx.send_if_modified(|selection| {
            let was_visible = selection.visible;
            selection.visible = false;
            was_visible
        });
        if changed {
            tracing::debug!("selection dismissed");
        }
        changed
    }

    // --- Queries ---

    /// The current rectangle, by value. `None` until one has formed.
    #[must_use]
    pub fn current_rectangle(&self) -> Option<GeoRectangle> {
        self.tx.borrow().rectangle
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.tx.borrow().visible
    }

    /// The whole published selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        *self.tx.borrow()
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> SelectorConfig {
        self.config
    }

    /// Subscribe to selection changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Selection> {
        self.tx.subscribe()
    }

    /// A read-only handle for consumers that only sample the selection.
    #[must_use]
    pub fn handle(&self) -> SelectionHandle {
        SelectionHandle { rx: self.tx.subscribe() }
    }

    fn publish(&self, next: Selection) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
        if changed {
            tracing::trace!(selection = ?next, "selection published");
        }
        changed
    }
}
