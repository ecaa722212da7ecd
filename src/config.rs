//! Command-line and environment configuration for the replay binary.

use std::path::PathBuf;

use clap::Parser;
use globe::camera::{Camera, Viewport};
use globe::consts::{DEFAULT_FOV_Y_DEG, WGS84_EQUATORIAL_RADIUS_M, WGS84_POLAR_RADIUS_M};
use globe::ellipsoid::Ellipsoid;
use globe::geo::GeoPoint;
use globe::input::DragModifier;
use globe::selector::SelectorConfig;

use crate::ReplayError;

pub const DEFAULT_CAMERA_HEIGHT_M: f64 = 1_000_000.0;
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

#[derive(Parser, Debug)]
#[command(name = "globe-area", about = "Replay pointer events through the globe rectangle selector")]
pub struct Cli {
    /// JSON event script; read from stdin when absent.
    #[arg(long, env = "GLOBE_SCRIPT")]
    pub script: Option<PathBuf>,

    #[arg(long, env = "GLOBE_CAMERA_LON_DEG", default_value_t = 0.0, allow_negative_numbers = true)]
    pub camera_lon_deg: f64,

    #[arg(long, env = "GLOBE_CAMERA_LAT_DEG", default_value_t = 0.0, allow_negative_numbers = true)]
    pub camera_lat_deg: f64,

    /// Camera height above the target, in meters.
    #[arg(long, env = "GLOBE_CAMERA_HEIGHT_M", default_value_t = DEFAULT_CAMERA_HEIGHT_M)]
    pub camera_height_m: f64,

    #[arg(long, env = "GLOBE_VIEWPORT_WIDTH", default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub viewport_width: f64,

    #[arg(long, env = "GLOBE_VIEWPORT_HEIGHT", default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    pub viewport_height: f64,

    /// Vertical field of view, in degrees.
    #[arg(long, env = "GLOBE_FOV_DEG", default_value_t = DEFAULT_FOV_Y_DEG)]
    pub fov_deg: f64,

    /// Key that must be held to draw: shift, ctrl, alt or meta.
    #[arg(long, env = "GLOBE_DRAG_MODIFIER", default_value_t = DragModifier::Shift)]
    pub drag_modifier: DragModifier,

    #[arg(long, env = "GLOBE_EQUATORIAL_RADIUS_M", default_value_t = WGS84_EQUATORIAL_RADIUS_M)]
    pub equatorial_radius_m: f64,

    #[arg(long, env = "GLOBE_POLAR_RADIUS_M", default_value_t = WGS84_POLAR_RADIUS_M)]
    pub polar_radius_m: f64,
}

/// Validated replay settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayConfig {
    pub script: Option<PathBuf>,
    pub camera_target: GeoPoint,
    pub camera_height_m: f64,
    pub viewport: Viewport,
    pub fov_deg: f64,
    pub selector: SelectorConfig,
    pub ellipsoid: Ellipsoid,
}

impl Cli {
    /// Validate raw arguments into a [`ReplayConfig`].
    pub fn into_config(self) -> Result<ReplayConfig, ReplayError> {
        check_range("camera longitude", self.camera_lon_deg, -180.0, 180.0)?;
        check_range("camera latitude", self.camera_lat_deg, -90.0, 90.0)?;
        check_positive("camera height", self.camera_height_m)?;
        check_positive("viewport width", self.viewport_width)?;
        check_positive("viewport height", self.viewport_height)?;
        check_positive("equatorial radius", self.equatorial_radius_m)?;
        check_positive("polar radius", self.polar_radius_m)?;
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(ReplayError::InvalidConfig(format!(
                "field of view must be between 0 and 180 degrees, got {}",
                self.fov_deg
            )));
        }

        Ok(ReplayConfig {
            script: self.script,
            camera_target: GeoPoint::from_degrees(self.camera_lon_deg, self.camera_lat_deg),
            camera_height_m: self.camera_height_m,
            viewport: Viewport::new(self.viewport_width, self.viewport_height),
            fov_deg: self.fov_deg,
            selector: SelectorConfig { drag_modifier: self.drag_modifier },
            ellipsoid: Ellipsoid::new(self.equatorial_radius_m, self.polar_radius_m),
        })
    }
}

impl ReplayConfig {
    /// Camera looking straight down at the configured target, north up.
    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera::looking_at(&self.ellipsoid, self.camera_target, self.camera_height_m, self.viewport)
            .with_fov_deg(self.fov_deg)
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), ReplayError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ReplayError::InvalidConfig(format!("{name} must be a positive number, got {value}")))
    }
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<(), ReplayError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ReplayError::InvalidConfig(format!("{name} must be within {min}..={max}, got {value}")))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
