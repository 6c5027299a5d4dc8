/// Filled fraction of the ring, always within `[0, 1]`.
///
/// Construction never fails: out-of-range input from noisy or overshooting
/// animation sources is clamped. `NaN` becomes `0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(f64);

impl Percent {
    /// An empty ring.
    pub const ZERO: Self = Self(0.0);

    /// A full ring.
    pub const FULL: Self = Self(1.0);

    /// Creates a percent, clamping `fraction` to `[0, 1]`.
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self::ZERO;
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Maps `value` on a `[0, max]` scale to a percent.
    ///
    /// A non-positive or non-finite `max` yields [`Percent::ZERO`].
    #[must_use]
    pub fn from_value(value: f64, max: f64) -> Self {
        if !(max.is_finite() && max > 0.0) {
            return Self::ZERO;
        }
        Self::new(value / max)
    }

    /// Returns the fraction in `[0, 1]`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Returns the angular extent of this fraction, in `[0, 360]` degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.0 * crate::math::FULL_TURN
    }

    /// Returns `true` if nothing is filled.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }
}

impl From<f64> for Percent {
    fn from(fraction: f64) -> Self {
        Self::new(fraction)
    }
}
