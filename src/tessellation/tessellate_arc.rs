use tracing::trace;

use crate::error::Result;
use crate::geometry::ArcBand;
use crate::math::FULL_TURN;

use super::{Polyline, TessellationParams};

/// Tessellates the center line of an arc into a polyline.
///
/// The full-circle segment count comes from the sagitta bound
/// `r (1 - cos(π / n)) <= tolerance`, clamped to the parameter bounds, and is
/// then scaled by the arc's share of a full turn.
#[derive(Debug)]
pub struct TessellateArc {
    arc: ArcBand,
    params: TessellationParams,
}

impl TessellateArc {
    /// Creates a new `TessellateArc` operation.
    #[must_use]
    pub fn new(arc: ArcBand, params: TessellationParams) -> Self {
        Self { arc, params }
    }

    /// Executes the tessellation.
    ///
    /// The result has `segments + 1` points from the start to the end of the
    /// arc; a full circle repeats its first point at the end. Sweeps beyond a
    /// full turn are drawn as a full turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the tessellation parameters are invalid.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn execute(&self) -> Result<Polyline> {
        self.params.validate()?;

        let full = self.full_circle_segments();
        let arc = ArcBand {
            sweep_angle: self.arc.clamped_sweep(),
            ..self.arc
        };
        let fraction = arc.sweep_angle / FULL_TURN;
        let segments = ((full as f64 * fraction).ceil() as usize).max(1);
        trace!(full, segments, "tessellating arc");

        let points = (0..=segments)
            .map(|i| arc.point_at(i as f64 / segments as f64))
            .collect();
        Ok(Polyline { points })
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn full_circle_segments(&self) -> usize {
        let radius = self.arc.radius;
        let ratio = 1.0 - self.params.tolerance / radius;
        let n = if ratio <= -1.0 {
            self.params.min_segments
        } else {
            let half_angle = ratio.clamp(-1.0, 1.0).acos();
            if half_angle <= 0.0 {
                self.params.max_segments
            } else {
                (std::f64::consts::PI / half_angle).ceil() as usize
            }
        };
        n.clamp(self.params.min_segments, self.params.max_segments)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Direction;
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;

    fn arc(radius: f64, start: f64, sweep: f64, direction: Direction) -> ArcBand {
        ArcBand {
            center: Point2::origin(),
            radius,
            stroke_width: 1.0,
            start_angle: start,
            sweep_angle: sweep,
            direction,
        }
    }

    #[test]
    fn endpoints_match_arc() {
        let a = arc(100.0, 270.0, 90.0, Direction::Clockwise);
        let poly = TessellateArc::new(a, TessellationParams::default())
            .execute()
            .unwrap();
        let first = poly.points.first().unwrap();
        let last = poly.points.last().unwrap();
        assert_abs_diff_eq!(first.y, -100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn points_stay_on_radius() {
        let a = arc(25.0, 10.0, 200.0, Direction::CounterClockwise);
        let poly = TessellateArc::new(a, TessellationParams::default())
            .execute()
            .unwrap();
        for p in &poly.points {
            assert_abs_diff_eq!(p.coords.norm(), 25.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn full_circle_respects_max_segments() {
        let a = arc(1000.0, 0.0, 360.0, Direction::Clockwise);
        let params = TessellationParams {
            tolerance: 1e-6,
            min_segments: 4,
            max_segments: 64,
        };
        let poly = TessellateArc::new(a, params).execute().unwrap();
        assert_eq!(poly.points.len(), 65);
        let first = poly.points[0];
        let last = poly.points[64];
        assert_abs_diff_eq!(first.x, last.x, epsilon = 1e-9);
        assert_abs_diff_eq!(first.y, last.y, epsilon = 1e-9);
    }

    #[test]
    fn coarse_tolerance_uses_min_segments() {
        let a = arc(1.0, 0.0, 360.0, Direction::Clockwise);
        let params = TessellationParams {
            tolerance: 5.0,
            ..TessellationParams::default()
        };
        let poly = TessellateArc::new(a, params).execute().unwrap();
        assert_eq!(poly.points.len(), 5);
    }

    #[test]
    fn oversized_sweep_is_one_full_turn() {
        let params = TessellationParams {
            tolerance: 1e-6,
            min_segments: 4,
            max_segments: 32,
        };
        let a = arc(10.0, 0.0, 1e300, Direction::Clockwise);
        let poly = TessellateArc::new(a, params).execute().unwrap();
        assert_eq!(poly.points.len(), 33);
    }

    #[test]
    fn non_finite_sweep_collapses_to_start() {
        let a = arc(10.0, 0.0, f64::INFINITY, Direction::Clockwise);
        let poly = TessellateArc::new(a, TessellationParams::default())
            .execute()
            .unwrap();
        assert_eq!(poly.points.len(), 2);
        assert_abs_diff_eq!(poly.points[0].x, poly.points[1].x, epsilon = 1e-9);
    }

    #[test]
    fn invalid_params_fail() {
        let a = arc(10.0, 0.0, 90.0, Direction::Clockwise);
        let params = TessellationParams {
            tolerance: -1.0,
            ..TessellationParams::default()
        };
        assert!(TessellateArc::new(a, params).execute().is_err());
    }
}
