use tracing::{debug, trace};

use crate::error::{Result, RingError};
use crate::geometry::{
    ArcBand, Circle, ContourBand, ContourSpec, GuideLine, LineMode, LineRole, Percent, RingBand,
    RingGeometry, StrokeSpec, SweepConfig,
};
use crate::math::{normalize_degrees, polar_point};

/// Computes the drawable geometry of a ring indicator for one frame.
///
/// Pure and stateless: identical inputs always produce identical output, and
/// the operation may run concurrently from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct ComputeRingGeometry {
    circle: Circle,
    stroke: StrokeSpec,
    percent: Percent,
    sweep: SweepConfig,
    line_mode: LineMode,
    contours: ContourSpec,
}

impl ComputeRingGeometry {
    /// Creates a new `ComputeRingGeometry` operation.
    ///
    /// `percent` accepts anything convertible to [`Percent`]; raw `f64`
    /// values are clamped to `[0, 1]`.
    #[must_use]
    pub fn new(
        circle: Circle,
        stroke: StrokeSpec,
        percent: impl Into<Percent>,
        sweep: SweepConfig,
        line_mode: LineMode,
    ) -> Self {
        Self {
            circle,
            stroke,
            percent: percent.into(),
            sweep,
            line_mode,
            contours: ContourSpec::default(),
        }
    }

    /// Adds contour rings along the band's inner and outer edges.
    #[must_use]
    pub fn with_contours(mut self, contours: ContourSpec) -> Self {
        self.contours = contours;
        self
    }

    /// Executes the computation.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidGeometry`] if the stroke is at least as
    /// wide as the circle's diameter, leaving no positive inner radius, or
    /// if the inner contour reaches the center.
    pub fn execute(&self) -> Result<RingGeometry> {
        let radius = self.circle.radius();
        let half = self.stroke.half_width();
        let inner_radius = radius - half;
        if inner_radius <= 0.0 {
            return Err(RingError::InvalidGeometry(format!(
                "stroke width {} must be less than the diameter {}",
                self.stroke.width(),
                radius * 2.0
            )));
        }
        let outer_radius = radius + half;
        let center = *self.circle.center();

        let inner_width = self.contours.inner_width();
        if inner_width > 0.0 && inner_radius - inner_width <= 0.0 {
            return Err(RingError::InvalidGeometry(format!(
                "inner contour width {inner_width} leaves no room inside radius {inner_radius}"
            )));
        }
        let contour = |edge: f64, width: f64| {
            (width > 0.0).then_some(ContourBand {
                center,
                radius: edge,
                stroke_width: width,
            })
        };
        let inner_contour = contour(inner_radius - inner_width * 0.5, inner_width);
        let outer_width = self.contours.outer_width();
        let outer_contour = contour(outer_radius + outer_width * 0.5, outer_width);

        let start_angle = self.sweep.start_angle();
        let direction = self.sweep.direction();
        let sweep_angle = self.percent.degrees();
        let end_angle = normalize_degrees(start_angle + sweep_angle * direction.sign());

        debug!(
            percent = self.percent.fraction(),
            start_angle,
            end_angle,
            ?direction,
            line_mode = ?self.line_mode,
            "computing ring geometry"
        );

        let background = RingBand {
            center,
            radius,
            inner_radius,
            outer_radius,
            stroke_width: self.stroke.width(),
        };

        let foreground = if self.percent.is_zero() {
            None
        } else {
            Some(ArcBand {
                center,
                radius,
                stroke_width: self.stroke.width(),
                start_angle,
                sweep_angle,
                direction,
            })
        };

        let line = |role: LineRole, angle: f64| GuideLine {
            role,
            angle,
            inner: polar_point(&center, inner_radius, angle),
            outer: polar_point(&center, outer_radius, angle),
        };

        // Coincident start/end lines (0% or 100%) are both kept.
        let lines = match self.line_mode {
            LineMode::None => Vec::new(),
            LineMode::Start => vec![line(LineRole::Start, start_angle)],
            LineMode::End => vec![line(LineRole::End, end_angle)],
            LineMode::Both => vec![
                line(LineRole::Start, start_angle),
                line(LineRole::End, end_angle),
            ],
        };
        trace!(count = lines.len(), "guide lines emitted");

        Ok(RingGeometry {
            background,
            foreground,
            lines,
            inner_contour,
            outer_contour,
        })
    }
}
