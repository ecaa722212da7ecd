//! Selection overlay: the screen-space quad a renderer fills for the current selection.
//!
//! This module never draws. It takes a read-only [`Selection`] snapshot and
//! the camera, and produces the projected corners and fill colour the host's
//! renderer needs. Edges are straight screen-space segments between projected
//! corners, which is accurate for the small rectangles a drag produces.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use serde::Serialize;

use crate::camera::{Camera, ScreenPoint};
use crate::consts::OVERLAY_ALPHA;
use crate::ellipsoid::Ellipsoid;
use crate::geo::{GeoPoint, GeoRectangle};
use crate::selector::Selection;

/// An sRGB colour with straight alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// CSS `rgba()` notation.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Translucent red used for the selection fill.
pub const SELECTION_FILL: Rgba = Rgba { r: 255, g: 0, b: 0, a: OVERLAY_ALPHA };

/// Projected selection rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayQuad {
    /// Corners in drawing order: southwest, southeast, northeast, northwest.
    pub corners: [ScreenPoint; 4],
    pub fill: Rgba,
}

impl OverlayQuad {
    /// Screen-space area of the quad in square pixels (shoelace formula).
    #[must_use]
    pub fn screen_area(&self) -> f64 {
        let c = &self.corners;
        let twice: f64 = (0..4)
            .map(|i| {
                let (a, b) = (c[i], c[(i + 1) % 4]);
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice.abs() * 0.5
    }
}

/// The overlay for `selection`, or `None` when there is nothing to draw.
///
/// Nothing is drawn when the selection is hidden, has no rectangle yet, or
/// any corner projects behind the camera.
#[must_use]
pub fn overlay_quad(selection: &Selection, camera: &Camera, ellipsoid: &Ellipsoid) -> Option<OverlayQuad> {
    if !selection.visible {
        return None;
    }
    let rect = selection.rectangle?;
    Some(OverlayQuad { corners: project_corners(&rect, camera, ellipsoid)?, fill: SELECTION_FILL })
}

fn project_corners(rect: &GeoRectangle, camera: &Camera, ellipsoid: &Ellipsoid) -> Option<[ScreenPoint; 4]> {
    let project = |p: GeoPoint| camera.project(ellipsoid.to_cartesian(p));
    Some([
        project(rect.southwest())?,
        project(rect.southeast())?,
        project(rect.northeast())?,
        project(rect.northwest())?,
    ])
}
