pub mod angle_2d;

pub use angle_2d::{bearing_degrees, normalize_degrees, polar_point};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;
