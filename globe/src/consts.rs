//! Shared numeric constants for the globe crate.

// ── Ellipsoid ───────────────────────────────────────────────────

/// WGS84 semi-major (equatorial) axis in meters.
pub const WGS84_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// WGS84 semi-minor (polar) axis in meters.
pub const WGS84_POLAR_RADIUS_M: f64 = 6_356_752.314_245_179;

// ── Units ───────────────────────────────────────────────────────

/// Square meters in one square kilometer.
pub const SQUARE_METERS_PER_SQUARE_KM: f64 = 1_000_000.0;

// ── Camera ──────────────────────────────────────────────────────

/// Default vertical field of view, in degrees.
pub const DEFAULT_FOV_Y_DEG: f64 = 60.0;

/// Squared-length floor below which a vector is treated as zero.
pub const NEAR_ZERO_SQUARED: f64 = 1e-24;

// ── Overlay ─────────────────────────────────────────────────────

/// Opacity of the selection overlay fill.
pub const OVERLAY_ALPHA: f64 = 0.5;
