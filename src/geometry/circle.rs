use crate::error::{Result, RingError};
use crate::math::Point2;

/// The center line of the ring: a center point and a radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidGeometry`] if the radius is not a positive
    /// finite number or the center is not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RingError::InvalidGeometry(format!(
                "circle radius must be positive, got {radius}"
            )));
        }
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(RingError::InvalidGeometry(
                "circle center must be finite".into(),
            ));
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}
