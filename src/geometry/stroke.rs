use crate::error::{Result, RingError};

/// Thickness of the ring. The drawable band spans `radius ± width / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSpec {
    width: f64,
}

impl StrokeSpec {
    /// Creates a new stroke spec.
    ///
    /// A zero width is allowed and yields a hairline ring. The upper bound
    /// depends on the circle and is checked when the geometry is computed.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidGeometry`] if `width` is negative or not finite.
    pub fn new(width: f64) -> Result<Self> {
        if !(width.is_finite() && width >= 0.0) {
            return Err(RingError::InvalidGeometry(format!(
                "stroke width must be non-negative, got {width}"
            )));
        }
        Ok(Self { width })
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns half the stroke width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }
}
