use crate::geometry::{Direction, Percent, SweepConfig};
use crate::math::{bearing_degrees, normalize_degrees, Point2, FULL_TURN, TOLERANCE};

/// Maps a point around the ring to the percent the ring shows at that angle.
///
/// This is the inverse of the foreground sweep: the angle from θ₀ to the
/// point, measured in the sweep direction, as a fraction of a full turn.
/// Hosts use it to let the user seek by touching the ring.
#[derive(Debug, Clone, Copy)]
pub struct PercentAtPoint {
    center: Point2,
    sweep: SweepConfig,
}

impl PercentAtPoint {
    /// Creates a new `PercentAtPoint` query.
    #[must_use]
    pub fn new(center: Point2, sweep: SweepConfig) -> Self {
        Self { center, sweep }
    }

    /// Executes the query for `point`.
    ///
    /// A point on the center has no direction and yields [`Percent::ZERO`].
    #[must_use]
    pub fn execute(&self, point: &Point2) -> Percent {
        if (point - self.center).norm() < TOLERANCE {
            return Percent::ZERO;
        }
        let bearing = bearing_degrees(&self.center, point);
        let start = self.sweep.start_angle();
        let from_start = match self.sweep.direction() {
            Direction::Clockwise => bearing - start,
            Direction::CounterClockwise => start - bearing,
        };
        Percent::new(normalize_degrees(from_start) / FULL_TURN)
    }
}
