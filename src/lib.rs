//! Geometry for ring-shaped percentage indicators.
//!
//! The crate turns a percentage, a circle, a stroke and a sweep
//! configuration into display-agnostic drawing primitives: the background
//! ring band, the filled foreground arc, and radial guide lines at the
//! start and/or end of the fill.
//!
//! Angles are in degrees, in screen coordinates (y down). 0° points east
//! and positive angles turn clockwise on screen, so -90° is 12 o'clock.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{Result, RingError};
