mod tessellate_arc;

pub use tessellate_arc::TessellateArc;

use crate::error::{Result, RingError};
use crate::math::Point2;

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Maximum allowed deviation from the true geometry.
    pub tolerance: f64,
    /// Minimum number of segments for a full circle.
    pub min_segments: usize,
    /// Maximum number of segments for a full circle.
    pub max_segments: usize,
}

impl TessellationParams {
    /// Checks that the parameters describe a usable tessellation.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidParameters`] if the tolerance is not
    /// positive or the segment bounds are empty or inverted.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(RingError::InvalidParameters(
                "tolerance must be positive".to_owned(),
            ));
        }
        if self.min_segments == 0 || self.min_segments > self.max_segments {
            return Err(RingError::InvalidParameters(format!(
                "segment bounds [{}, {}] are invalid",
                self.min_segments, self.max_segments
            )));
        }
        Ok(())
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_segments: 4,
            max_segments: 256,
        }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}
