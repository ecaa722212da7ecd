//! Area of a selected rectangle.
//!
//! The measurement is a planar approximation: the rectangle's width and
//! height are the straight-line (chord) distances between its corners on the
//! ellipsoid surface, and the area is their product. It under-measures the
//! true surface area, more so for large rectangles and near the poles.

#[cfg(test)]
#[path = "area_test.rs"]
mod area_test;

use std::fmt;

use serde::Serialize;

use crate::consts::SQUARE_METERS_PER_SQUARE_KM;
use crate::ellipsoid::Ellipsoid;
use crate::geo::GeoRectangle;
use crate::selector::SelectionHandle;

/// Why an area could not be measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AreaError {
    /// No rectangle has ever been formed.
    #[error("No rectangle found.")]
    NoSelection,
    /// A rectangle existed but its coordinates could not be read at query time.
    #[error("Rectangle coordinates are not properly defined.")]
    UndefinedCoordinates,
}

/// A measured area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Area {
    pub square_km: f64,
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Area: {:.2} square kilometers", self.square_km)
    }
}

/// User-facing message for a measurement result.
#[must_use]
pub fn area_message(result: &Result<Area, AreaError>) -> String {
    match result {
        Ok(area) => area.to_string(),
        Err(err) => err.to_string(),
    }
}

/// Area of `rect` on `ellipsoid` in square kilometers (chord-product approximation).
#[must_use]
pub fn rectangle_area_km2(rect: &GeoRectangle, ellipsoid: &Ellipsoid) -> f64 {
    let southwest = ellipsoid.to_cartesian(rect.southwest());
    let southeast = ellipsoid.to_cartesian(rect.southeast());
    let northwest = ellipsoid.to_cartesian(rect.northwest());

    let width = southwest.distance(southeast);
    let height = southwest.distance(northwest);

    width * height / SQUARE_METERS_PER_SQUARE_KM
}

/// Measures selections against a reference ellipsoid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AreaCalculator {
    pub ellipsoid: Ellipsoid,
}

impl AreaCalculator {
    #[must_use]
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }

    /// Area of a rectangle in square kilometers.
    #[must_use]
    pub fn area_km2(&self, rect: &GeoRectangle) -> f64 {
        rectangle_area_km2(rect, &self.ellipsoid)
    }

    /// Measure the selection behind `handle`.
    ///
    /// # Errors
    ///
    /// [`AreaError::NoSelection`] when there is no handle or no rectangle has
    /// formed yet; [`AreaError::UndefinedCoordinates`] when a rectangle had
    /// formed but its selector no longer provides coordinates.
    pub fn measure(&self, handle: Option<&SelectionHandle>) -> Result<Area, AreaError> {
        let handle = handle.ok_or(AreaError::NoSelection)?;
        if handle.snapshot().rectangle.is_none() {
            return Err(AreaError::NoSelection);
        }
        let rect = handle.coordinates().ok_or(AreaError::UndefinedCoordinates)?;
        let area = Area { square_km: self.area_km2(&rect) };
        tracing::info!(square_km = area.square_km, "area measured");
        Ok(area)
    }
}
