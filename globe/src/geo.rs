//! Geographic coordinate types.
//!
//! All angles are radians. Longitudes grow eastward and latitudes northward,
//! so a [`GeoRectangle`] is described by its west/south/east/north edges.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use serde::{Deserialize, Serialize};

/// A point on the ellipsoid surface, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Build a point from longitude/latitude given in degrees.
    #[must_use]
    pub fn from_degrees(longitude_deg: f64, latitude_deg: f64) -> Self {
        Self { longitude: longitude_deg.to_radians(), latitude: latitude_deg.to_radians() }
    }
}

/// An axis-aligned longitude/latitude rectangle, in radians.
///
/// Built from two corners via [`GeoRectangle::from_corners`], which guarantees
/// `west <= east` and `south <= north`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoRectangle {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl GeoRectangle {
    /// Bounding rectangle of two opposite corners, in either order.
    #[must_use]
    pub fn from_corners(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            west: a.longitude.min(b.longitude),
            south: a.latitude.min(b.latitude),
            east: a.longitude.max(b.longitude),
            north: a.latitude.max(b.latitude),
        }
    }

    #[must_use]
    pub fn southwest(&self) -> GeoPoint {
        GeoPoint::new(self.west, self.south)
    }

    #[must_use]
    pub fn southeast(&self) -> GeoPoint {
        GeoPoint::new(self.east, self.south)
    }

    #[must_use]
    pub fn northeast(&self) -> GeoPoint {
        GeoPoint::new(self.east, self.north)
    }

    #[must_use]
    pub fn northwest(&self) -> GeoPoint {
        GeoPoint::new(self.west, self.north)
    }

    /// Longitude span in radians.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Latitude span in radians.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Whether `point` lies inside or on the edge of the rectangle.
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.longitude >= self.west
            && point.longitude <= self.east
            && point.latitude >= self.south
            && point.latitude <= self.north
    }
}
