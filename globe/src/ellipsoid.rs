//! Reference ellipsoid and Earth-centered Cartesian coordinates.
//!
//! Geographic coordinates are geodetic: the latitude of a surface point is the
//! angle of the ellipsoid normal at that point, not the angle from the centre.
//! Every conversion here works at height zero, on the surface itself.

#[cfg(test)]
#[path = "ellipsoid_test.rs"]
mod ellipsoid_test;

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::{NEAR_ZERO_SQUARED, WGS84_EQUATORIAL_RADIUS_M, WGS84_POLAR_RADIUS_M};
use crate::geo::GeoPoint;

/// A point or vector in Earth-centered, Earth-fixed space (meters).
///
/// `x` points at (0°, 0°), `y` at (90°E, 0°), `z` at the north pole.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const UNIT_Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[must_use]
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    #[must_use]
    pub fn normalize(self) -> Option<Self> {
        let len_sq = self.magnitude_squared();
        if len_sq < NEAR_ZERO_SQUARED {
            return None;
        }
        Some(self * (1.0 / len_sq.sqrt()))
    }

    /// Straight-line (chord) distance between two points.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Component-wise product.
    #[must_use]
    pub fn scale_by(self, other: Self) -> Self {
        Self { x: self.x * other.x, y: self.y * other.y, z: self.z * other.z }
    }
}

impl Add for Cartesian3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl Sub for Cartesian3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Mul<f64> for Cartesian3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

/// An ellipsoid of revolution around the `z` axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major axis in meters (`x` and `y` radius).
    pub equatorial_radius: f64,
    /// Semi-minor axis in meters (`z` radius).
    pub polar_radius: f64,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

impl Ellipsoid {
    /// The WGS84 reference ellipsoid.
    pub const WGS84: Self = Self { equatorial_radius: WGS84_EQUATORIAL_RADIUS_M, polar_radius: WGS84_POLAR_RADIUS_M };

    #[must_use]
    pub fn new(equatorial_radius: f64, polar_radius: f64) -> Self {
        Self { equatorial_radius, polar_radius }
    }

    /// A sphere of the given radius.
    #[must_use]
    pub fn sphere(radius: f64) -> Self {
        Self { equatorial_radius: radius, polar_radius: radius }
    }

    #[must_use]
    pub fn radii(&self) -> Cartesian3 {
        Cartesian3::new(self.equatorial_radius, self.equatorial_radius, self.polar_radius)
    }

    #[must_use]
    pub fn radii_squared(&self) -> Cartesian3 {
        let r = self.radii();
        r.scale_by(r)
    }

    /// Unit normal of the surface at the given geographic point.
    #[must_use]
    pub fn geodetic_normal(&self, point: GeoPoint) -> Cartesian3 {
        let cos_lat = point.latitude.cos();
        Cartesian3::new(
            cos_lat * point.longitude.cos(),
            cos_lat * point.longitude.sin(),
            point.latitude.sin(),
        )
    }

    /// Surface point at the given longitude/latitude (height zero).
    #[must_use]
    pub fn to_cartesian(&self, point: GeoPoint) -> Cartesian3 {
        let n = self.geodetic_normal(point);
        let k = self.radii_squared().scale_by(n);
        let gamma = n.dot(k).sqrt();
        k * (1.0 / gamma)
    }

    /// Geographic coordinates of a point on the surface.
    ///
    /// The point is assumed to lie on (or numerically very near) the surface;
    /// its geodetic normal determines the latitude. Returns `None` for the
    /// centre, where no normal exists.
    #[must_use]
    pub fn to_geographic(&self, surface: Cartesian3) -> Option<GeoPoint> {
        let r2 = self.radii_squared();
        let normal =
            Cartesian3::new(surface.x / r2.x, surface.y / r2.y, surface.z / r2.z).normalize()?;
        Some(GeoPoint::new(normal.y.atan2(normal.x), normal.z.clamp(-1.0, 1.0).asin()))
    }

    /// Nearest intersection of a ray with the surface, if the ray hits it.
    ///
    /// `direction` need not be normalized. Intersections behind `origin` are
    /// ignored; an origin inside the ellipsoid yields the exit point.
    #[must_use]
    pub fn ray_intersection(&self, origin: Cartesian3, direction: Cartesian3) -> Option<Cartesian3> {
        // Scale space so the ellipsoid becomes the unit sphere.
        let inv = Cartesian3::new(
            1.0 / self.equatorial_radius,
            1.0 / self.equatorial_radius,
            1.0 / self.polar_radius,
        );
        let o = origin.scale_by(inv);
        let d = direction.scale_by(inv);

        let a = d.magnitude_squared();
        if a < NEAR_ZERO_SQUARED {
            return None;
        }
        let b = 2.0 * o.dot(d);
        let c = o.magnitude_squared() - 1.0;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = (-b - root) / (2.0 * a);
        let far = (-b + root) / (2.0 * a);
        let t = if near >= 0.0 {
            near
        } else if far >= 0.0 {
            far
        } else {
            return None;
        };

        Some(origin + direction * t)
    }
}
