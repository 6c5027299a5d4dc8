//! 2D angle utilities in screen space.
//!
//! Convention: degrees, +y down, 0° = east, positive = clockwise on screen.
//! `polar_point` and `bearing_degrees` are inverses of each other.

use super::{Point2, Vector2, FULL_TURN, TOLERANCE};

/// Normalizes an angle in degrees to `[0, 360)`.
///
/// Non-finite input maps to `0.0`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let a = degrees.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if a >= FULL_TURN - TOLERANCE {
        0.0
    } else {
        a
    }
}

/// Returns the point at `radius` from `center` in direction `degrees`.
#[must_use]
pub fn polar_point(center: &Point2, radius: f64, degrees: f64) -> Point2 {
    let theta = degrees.to_radians();
    center + Vector2::new(theta.cos(), theta.sin()) * radius
}

/// Returns the direction of `point` as seen from `center`, in `[0, 360)`.
///
/// A point coincident with the center has no direction and yields `0.0`.
#[must_use]
pub fn bearing_degrees(center: &Point2, point: &Point2) -> f64 {
    let d = point - center;
    if d.norm() < TOLERANCE {
        return 0.0;
    }
    normalize_degrees(d.y.atan2(d.x).to_degrees())
}
