use crate::area::{Area, AreaCalculator, AreaError, area_message};
use crate::camera::{Camera, ScreenPoint, Viewport};
use crate::ellipsoid::Ellipsoid;
use crate::geo::{GeoPoint, GeoRectangle};
use crate::input::{Button, InteractionState, Modifiers};
use crate::overlay::{OverlayQuad, overlay_quad};
use crate::picker::{EllipsoidPicker, SurfacePicker};
use crate::selector::{RectangleSelector, Selection, SelectionHandle, SelectorConfig};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Cursor shown while a rectangle drag is armed.
pub const CURSOR_DRAWING: &str = "crosshair";
/// Cursor restored when the drag ends.
pub const CURSOR_DEFAULT: &str = "default";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A new selection snapshot was published.
    SelectionChanged(Selection),
    /// The host should redraw the overlay.
    RenderNeeded,
    /// The host should switch the pointer cursor.
    SetCursor(String),
    /// The host should show this message to the user.
    ShowMessage(String),
}

/// Core engine state: the selector plus everything needed to resolve pointer
/// positions and measure the result.
///
/// Without a custom picker, pointer positions are resolved against the bare
/// ellipsoid through the current camera.
pub struct EngineCore {
    pub selector: RectangleSelector,
    pub camera: Camera,
    pub area: AreaCalculator,
    picker: Option<Box<dyn SurfacePicker>>,
    handle: SelectionHandle,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(SelectorConfig::default(), Camera::default(), Ellipsoid::WGS84)
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: SelectorConfig, camera: Camera, ellipsoid: Ellipsoid) -> Self {
        let selector = RectangleSelector::new(config);
        let handle = selector.handle();
        Self { selector, camera, area: AreaCalculator::new(ellipsoid), picker: None, handle }
    }

    /// Resolve pointer positions through `picker` instead of the camera/ellipsoid pick.
    #[must_use]
    pub fn with_picker(mut self, picker: impl SurfacePicker + 'static) -> Self {
        self.picker = Some(Box::new(picker));
        self
    }

    // --- Camera / viewport ---

    /// Update viewport dimensions (CSS pixels).
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.camera.set_viewport(Viewport::new(width, height));
        vec![Action::RenderNeeded]
    }

    /// Replace the camera.
    pub fn set_camera(&mut self, camera: Camera) -> Vec<Action> {
        self.camera = camera;
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, _screen_pt: ScreenPoint, button: Button, modifiers: Modifiers) -> Vec<Action> {
        if self.selector.on_pointer_down(button, modifiers) {
            vec![Action::SetCursor(CURSOR_DRAWING.into())]
        } else {
            Vec::new()
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: ScreenPoint, modifiers: Modifiers) -> Vec<Action> {
        let Self { selector, camera, area, picker, .. } = self;
        let published = match picker {
            Some(custom) => selector.on_pointer_move(screen_pt, modifiers, &**custom),
            None => {
                let fallback = EllipsoidPicker::new(*camera, area.ellipsoid);
                selector.on_pointer_move(screen_pt, modifiers, &fallback)
            }
        };
        if published { self.selection_changed() } else { Vec::new() }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: ScreenPoint, button: Button, modifiers: Modifiers) -> Vec<Action> {
        if self.selector.on_pointer_up(button, modifiers) {
            vec![Action::SetCursor(CURSOR_DEFAULT.into())]
        } else {
            Vec::new()
        }
    }

    /// A plain click anywhere dismisses the selection overlay.
    pub fn on_click(&mut self, _screen_pt: ScreenPoint) -> Vec<Action> {
        if self.selector.on_click() { self.selection_changed() } else { Vec::new() }
    }

    // --- Area ---

    /// Measure the current selection.
    ///
    /// # Errors
    ///
    /// See [`AreaCalculator::measure`].
    pub fn measure_area(&self) -> Result<Area, AreaError> {
        self.area.measure(Some(&self.handle))
    }

    /// The "calculate area" UI action: measure and report a user message.
    #[must_use]
    pub fn calculate_area(&self) -> Action {
        Action::ShowMessage(area_message(&self.measure_area()))
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selector.selection()
    }

    #[must_use]
    pub fn current_rectangle(&self) -> Option<GeoRectangle> {
        self.selector.current_rectangle()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.selector.is_visible()
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.selector.state()
    }

    /// Subscribe to selection changes (for a renderer on another task).
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<Selection> {
        self.selector.subscribe()
    }

    #[must_use]
    pub fn handle(&self) -> SelectionHandle {
        self.handle.clone()
    }

    #[must_use]
    pub fn ellipsoid(&self) -> Ellipsoid {
        self.area.ellipsoid
    }

    /// Resolve a screen position the same way pointer moves are resolved.
    #[must_use]
    pub fn resolve(&self, screen_pt: ScreenPoint) -> Option<GeoPoint> {
        match &self.picker {
            Some(custom) => custom.resolve(screen_pt),
            None => EllipsoidPicker::new(self.camera, self.area.ellipsoid).resolve(screen_pt),
        }
    }

    /// The overlay quad for the current selection under the current camera.
    #[must_use]
    pub fn overlay(&self) -> Option<OverlayQuad> {
        overlay_quad(&self.selection(), &self.camera, &self.area.ellipsoid)
    }

    fn selection_changed(&self) -> Vec<Action> {
        vec![Action::SelectionChanged(self.selection()), Action::RenderNeeded]
    }
}
