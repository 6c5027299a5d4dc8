use crate::math::normalize_degrees;

/// Direction in which the fill grows from the start angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Clockwise on screen; positive signed sweep.
    #[default]
    Clockwise,
    /// Counter-clockwise on screen; negative signed sweep.
    CounterClockwise,
}

impl Direction {
    /// Returns `1.0` for clockwise and `-1.0` for counter-clockwise.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// Where the fill starts and which way it grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    start_angle: f64,
    direction: Direction,
}

impl SweepConfig {
    /// Creates a sweep configuration.
    ///
    /// `start_angle` is in degrees and may be any real value; it is stored
    /// normalized to `[0, 360)`.
    #[must_use]
    pub fn new(start_angle: f64, direction: Direction) -> Self {
        Self {
            start_angle: normalize_degrees(start_angle),
            direction,
        }
    }

    /// Returns the normalized start angle θ₀ in `[0, 360)`.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the sweep direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for SweepConfig {
    /// Starts at 12 o'clock and grows clockwise.
    fn default() -> Self {
        Self::new(-90.0, Direction::Clockwise)
    }
}
