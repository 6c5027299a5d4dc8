use crate::error::{Result, RingError};

/// Widths of the thin contour rings hugging the band's inner and outer edge.
///
/// A width of `0` means that contour is not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContourSpec {
    inner_width: f64,
    outer_width: f64,
}

impl ContourSpec {
    /// Creates a new contour spec.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidGeometry`] if either width is negative or
    /// not finite.
    pub fn new(inner_width: f64, outer_width: f64) -> Result<Self> {
        for (side, width) in [("inner", inner_width), ("outer", outer_width)] {
            if !(width.is_finite() && width >= 0.0) {
                return Err(RingError::InvalidGeometry(format!(
                    "{side} contour width must be non-negative, got {width}"
                )));
            }
        }
        Ok(Self {
            inner_width,
            outer_width,
        })
    }

    /// Returns the inner contour width.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        self.inner_width
    }

    /// Returns the outer contour width.
    #[must_use]
    pub fn outer_width(&self) -> f64 {
        self.outer_width
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_draws_nothing() {
        let c = ContourSpec::default();
        assert!(c.inner_width().abs() < f64::EPSILON);
        assert!(c.outer_width().abs() < f64::EPSILON);
    }

    #[test]
    fn new_with_valid_widths() {
        let c = ContourSpec::new(1.5, 2.0).unwrap();
        assert!((c.inner_width() - 1.5).abs() < f64::EPSILON);
        assert!((c.outer_width() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_or_nan_width_fails() {
        assert!(matches!(
            ContourSpec::new(-1.0, 0.0),
            Err(RingError::InvalidGeometry(_))
        ));
        assert!(ContourSpec::new(0.0, f64::NAN).is_err());
    }
}
