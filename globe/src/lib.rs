//! Rectangle selection and area measurement on a 3D globe.
//!
//! This crate owns the logic behind "shift-drag a box on the globe, then ask
//! how big it is": translating raw pointer events into a geographic rectangle,
//! publishing that rectangle to whoever draws it, and measuring the final
//! selection on a reference ellipsoid. Rendering and picking against real
//! terrain belong to the host; the crate only consumes a screen→surface
//! resolver through [`picker::SurfacePicker`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Host-facing facade [`engine::EngineCore`] returning [`engine::Action`]s |
//! | [`selector`] | Drag state machine and atomic selection publication |
//! | [`area`] | Chord-product area approximation and its failure outcomes |
//! | [`geo`] | Geographic point and rectangle types |
//! | [`ellipsoid`] | Reference ellipsoid and Cartesian conversions |
//! | [`camera`] | Headless perspective camera, pick rays and projection |
//! | [`picker`] | The screen→surface resolver trait and its ellipsoid implementation |
//! | [`input`] | Modifier keys, mouse buttons, drag modifier and interaction state |
//! | [`overlay`] | Screen-space quad for the translucent selection overlay |
//! | [`consts`] | Shared numeric constants (ellipsoid radii, unit conversions) |

pub mod area;
pub mod camera;
pub mod consts;
pub mod ellipsoid;
pub mod engine;
pub mod geo;
pub mod input;
pub mod overlay;
pub mod picker;
pub mod selector;
