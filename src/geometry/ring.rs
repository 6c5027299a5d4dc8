use crate::math::{normalize_degrees, polar_point, Point2, Vector2, FULL_TURN, TOLERANCE};

use super::{Direction, SweepConfig};

/// The full 360° background band, drawn regardless of the percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingBand {
    /// Center of the ring.
    pub center: Point2,
    /// Radius of the band's center line.
    pub radius: f64,
    /// `radius - stroke / 2`.
    pub inner_radius: f64,
    /// `radius + stroke / 2`.
    pub outer_radius: f64,
    /// Stroke width of the band.
    pub stroke_width: f64,
}

impl RingBand {
    /// Returns the band as a closed 360° arc anchored at the sweep's start,
    /// for renderers that draw the background in blocks.
    #[must_use]
    pub fn full_arc(&self, sweep: &SweepConfig) -> ArcBand {
        ArcBand {
            center: self.center,
            radius: self.radius,
            stroke_width: self.stroke_width,
            start_angle: sweep.start_angle(),
            sweep_angle: FULL_TURN,
            direction: sweep.direction(),
        }
    }
}

/// The filled foreground arc.
///
/// `sweep_angle` is the unsigned extent in `(0, 360]`; `direction` says which
/// way it runs from `start_angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcBand {
    /// Center of the ring.
    pub center: Point2,
    /// Radius of the arc's center line.
    pub radius: f64,
    /// Stroke width of the arc.
    pub stroke_width: f64,
    /// Start angle θ₀ in `[0, 360)` degrees.
    pub start_angle: f64,
    /// Unsigned sweep in degrees.
    pub sweep_angle: f64,
    /// Direction of the sweep.
    pub direction: Direction,
}

impl ArcBand {
    /// Returns `sweep_angle` limited to `[0, 360]`; non-finite sweeps count as `0`.
    #[must_use]
    pub fn clamped_sweep(&self) -> f64 {
        if self.sweep_angle.is_finite() {
            self.sweep_angle.clamp(0.0, FULL_TURN)
        } else {
            0.0
        }
    }

    /// Returns the sweep with the direction applied (negative when counter-clockwise).
    #[must_use]
    pub fn signed_sweep(&self) -> f64 {
        self.sweep_angle * self.direction.sign()
    }

    /// Returns the end angle `θ₀ + signed sweep`, normalized to `[0, 360)`.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        normalize_degrees(self.start_angle + self.signed_sweep())
    }

    /// Returns `(start, sweep)` with a non-negative sweep that covers the
    /// same points, for canvases that only draw clockwise arcs.
    #[must_use]
    pub fn positive_span(&self) -> (f64, f64) {
        match self.direction {
            Direction::Clockwise => (self.start_angle, self.sweep_angle),
            Direction::CounterClockwise => (
                normalize_degrees(self.start_angle - self.sweep_angle),
                self.sweep_angle,
            ),
        }
    }

    /// Returns `true` if the arc closes on itself.
    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        (self.sweep_angle - FULL_TURN).abs() < TOLERANCE
    }

    /// Evaluates the arc's center line at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        polar_point(
            &self.center,
            self.radius,
            self.start_angle + self.signed_sweep() * t,
        )
    }
}

/// A thin full circle drawn along one edge of the background band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourBand {
    /// Center of the ring.
    pub center: Point2,
    /// Radius of the contour's center line.
    pub radius: f64,
    /// Stroke width of the contour.
    pub stroke_width: f64,
}

/// Which boundary of the foreground a guide line marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineRole {
    /// The start angle θ₀.
    Start,
    /// The end of the filled arc.
    End,
}

/// A radial segment spanning the ring's thickness at one angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    /// What the line marks.
    pub role: LineRole,
    /// Angle of the line in `[0, 360)` degrees.
    pub angle: f64,
    /// Endpoint on the inner radius.
    pub inner: Point2,
    /// Endpoint on the outer radius.
    pub outer: Point2,
}

impl GuideLine {
    /// Length of the segment; equals the stroke width.
    #[must_use]
    pub fn length(&self) -> f64 {
        let d: Vector2 = self.outer - self.inner;
        d.norm()
    }
}

/// Everything a renderer needs to draw one frame of the indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct RingGeometry {
    /// Background band, always present.
    pub background: RingBand,
    /// Foreground arc; `None` when the percent is zero.
    pub foreground: Option<ArcBand>,
    /// Guide lines in `[start, end]` order, 0 to 2 entries.
    pub lines: Vec<GuideLine>,
    /// Contour inside the band; `None` when its width is zero.
    pub inner_contour: Option<ContourBand>,
    /// Contour outside the band; `None` when its width is zero.
    pub outer_contour: Option<ContourBand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn arc(start: f64, sweep: f64, direction: Direction) -> ArcBand {
        ArcBand {
            center: Point2::origin(),
            radius: 10.0,
            stroke_width: 2.0,
            start_angle: start,
            sweep_angle: sweep,
            direction,
        }
    }

    #[test]
    fn clockwise_end_angle() {
        let a = arc(270.0, 90.0, Direction::Clockwise);
        assert_abs_diff_eq!(a.signed_sweep(), 90.0);
        assert_abs_diff_eq!(a.end_angle(), 0.0);
    }

    #[test]
    fn counter_clockwise_end_angle() {
        let a = arc(270.0, 90.0, Direction::CounterClockwise);
        assert_abs_diff_eq!(a.signed_sweep(), -90.0);
        assert_abs_diff_eq!(a.end_angle(), 180.0);
    }

    #[test]
    fn positive_span_flips_counter_clockwise() {
        let cw = arc(270.0, 90.0, Direction::Clockwise);
        let (start, sweep) = cw.positive_span();
        assert_abs_diff_eq!(start, 270.0);
        assert_abs_diff_eq!(sweep, 90.0);
        let ccw = arc(270.0, 90.0, Direction::CounterClockwise);
        let (start, sweep) = ccw.positive_span();
        assert_abs_diff_eq!(start, 180.0);
        assert_abs_diff_eq!(sweep, 90.0);
    }

    #[test]
    fn clamped_sweep_limits_extent() {
        assert_abs_diff_eq!(arc(0.0, 1e300, Direction::Clockwise).clamped_sweep(), 360.0);
        assert_abs_diff_eq!(arc(0.0, -5.0, Direction::Clockwise).clamped_sweep(), 0.0);
        assert_abs_diff_eq!(arc(0.0, f64::INFINITY, Direction::Clockwise).clamped_sweep(), 0.0);
        assert_abs_diff_eq!(arc(0.0, f64::NAN, Direction::Clockwise).clamped_sweep(), 0.0);
        assert_abs_diff_eq!(arc(0.0, 90.0, Direction::Clockwise).clamped_sweep(), 90.0);
    }

    #[test]
    fn full_circle_detection() {
        assert!(arc(0.0, 360.0, Direction::Clockwise).is_full_circle());
        assert!(!arc(0.0, 359.0, Direction::Clockwise).is_full_circle());
    }

    #[test]
    fn point_at_follows_direction() {
        // From 12 o'clock, a quarter clockwise lands at 3 o'clock.
        let cw = arc(270.0, 90.0, Direction::Clockwise);
        let p = cw.point_at(1.0);
        assert_abs_diff_eq!(p.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-9);
        // Counter-clockwise lands at 9 o'clock.
        let ccw = arc(270.0, 90.0, Direction::CounterClockwise);
        let q = ccw.point_at(1.0);
        assert_abs_diff_eq!(q.x, -10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(q.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn background_full_arc() {
        let band = RingBand {
            center: Point2::origin(),
            radius: 10.0,
            inner_radius: 9.0,
            outer_radius: 11.0,
            stroke_width: 2.0,
        };
        let a = band.full_arc(&SweepConfig::default());
        assert!(a.is_full_circle());
        assert_abs_diff_eq!(a.start_angle, 270.0);
        assert_abs_diff_eq!(a.end_angle(), 270.0);
    }

    #[test]
    fn guide_line_length() {
        let line = GuideLine {
            role: LineRole::Start,
            angle: 0.0,
            inner: Point2::new(9.0, 0.0),
            outer: Point2::new(11.0, 0.0),
        };
        assert_abs_diff_eq!(line.length(), 2.0);
    }
}
