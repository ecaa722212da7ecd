//! Screen→surface resolution.
//!
//! The selector never looks at cameras or meshes; it only asks a
//! [`SurfacePicker`] where a screen position lands on the globe. Hosts with a
//! real renderer implement the trait over their own picking, and any closure
//! `Fn(ScreenPoint) -> Option<GeoPoint>` works as a picker too.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

use crate::camera::{Camera, ScreenPoint};
use crate::ellipsoid::Ellipsoid;
use crate::geo::GeoPoint;

/// Resolves a screen position to the surface point under it.
pub trait SurfacePicker {
    /// The geographic point under `screen`, or `None` if the ray misses the surface.
    fn resolve(&self, screen: ScreenPoint) -> Option<GeoPoint>;
}

impl<F> SurfacePicker for F
where
    F: Fn(ScreenPoint) -> Option<GeoPoint>,
{
    fn resolve(&self, screen: ScreenPoint) -> Option<GeoPoint> {
        self(screen)
    }
}

/// Picks against the bare ellipsoid through a [`Camera`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EllipsoidPicker {
    pub camera: Camera,
    pub ellipsoid: Ellipsoid,
}

impl EllipsoidPicker {
    #[must_use]
    pub fn new(camera: Camera, ellipsoid: Ellipsoid) -> Self {
        Self { camera, ellipsoid }
    }
}

impl SurfacePicker for EllipsoidPicker {
    fn resolve(&self, screen: ScreenPoint) -> Option<GeoPoint> {
        let hit = self.camera.pick_ellipsoid(screen, &self.ellipsoid)?;
        self.ellipsoid.to_geographic(hit)
    }
}
