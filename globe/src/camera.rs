#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FOV_Y_DEG;
use crate::ellipsoid::{Cartesian3, Ellipsoid};
use crate::geo::GeoPoint;

/// A point in screen space (CSS pixels, origin at the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width * 0.5, self.height * 0.5)
    }

    fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A ray in Earth-centered space. `direction` is a unit vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Cartesian3,
    pub direction: Cartesian3,
}

/// Headless perspective camera over the globe.
///
/// `direction`, `up` and `right` form an orthonormal basis; `fov_y` is the
/// vertical field of view in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Cartesian3,
    pub direction: Cartesian3,
    pub up: Cartesian3,
    pub right: Cartesian3,
    pub fov_y: f64,
    pub viewport: Viewport,
}

impl Default for Camera {
    fn default() -> Self {
        Self::looking_at(&Ellipsoid::WGS84, GeoPoint::default(), 10_000_000.0, Viewport::default())
    }
}

impl Camera {
    /// Place the camera `height_m` above `target`, looking straight down with north up.
    #[must_use]
    pub fn looking_at(ellipsoid: &Ellipsoid, target: GeoPoint, height_m: f64, viewport: Viewport) -> Self {
        let normal = ellipsoid.geodetic_normal(target);
        let position = ellipsoid.to_cartesian(target) + normal * height_m;
        let east = Cartesian3::new(-target.longitude.sin(), target.longitude.cos(), 0.0);
        let north = normal.cross(east);
        let direction = normal * -1.0;
        Self {
            position,
            direction,
            up: north,
            right: direction.cross(north),
            fov_y: DEFAULT_FOV_Y_DEG.to_radians(),
            viewport,
        }
    }

    /// Replace the vertical field of view, given in degrees.
    #[must_use]
    pub fn with_fov_deg(mut self, fov_deg: f64) -> Self {
        self.fov_y = fov_deg.to_radians();
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn frustum_half_extents(&self) -> (f64, f64) {
        let half_h = (self.fov_y * 0.5).tan();
        let aspect = self.viewport.width / self.viewport.height;
        (half_h * aspect, half_h)
    }

    /// The pick ray through a screen point. `None` for an empty viewport.
    #[must_use]
    pub fn ray(&self, screen: ScreenPoint) -> Option<Ray> {
        if self.viewport.is_empty() {
            return None;
        }
        let (half_w, half_h) = self.frustum_half_extents();
        let ndc_x = 2.0 * screen.x / self.viewport.width - 1.0;
        let ndc_y = 1.0 - 2.0 * screen.y / self.viewport.height;
        let direction = (self.direction + self.right * (ndc_x * half_w) + self.up * (ndc_y * half_h)).normalize()?;
        Some(Ray { origin: self.position, direction })
    }

    /// Project an Earth-centered point into screen space.
    ///
    /// Returns `None` for points at or behind the camera plane. Occlusion by
    /// the globe itself is not tested.
    #[must_use]
    pub fn project(&self, world: Cartesian3) -> Option<ScreenPoint> {
        if self.viewport.is_empty() {
            return None;
        }
        let v = world - self.position;
        let depth = v.dot(self.direction);
        if depth <= 0.0 {
            return None;
        }
        let (half_w, half_h) = self.frustum_half_extents();
        let ndc_x = v.dot(self.right) / (depth * half_w);
        let ndc_y = v.dot(self.up) / (depth * half_h);
        Some(ScreenPoint {
            x: (ndc_x + 1.0) * 0.5 * self.viewport.width,
            y: (1.0 - ndc_y) * 0.5 * self.viewport.height,
        })
    }

    /// Surface point under `screen`, or `None` when the ray misses the ellipsoid.
    #[must_use]
    pub fn pick_ellipsoid(&self, screen: ScreenPoint, ellipsoid: &Ellipsoid) -> Option<Cartesian3> {
        let ray = self.ray(screen)?;
        ellipsoid.ray_intersection(ray.origin, ray.direction)
    }
}
