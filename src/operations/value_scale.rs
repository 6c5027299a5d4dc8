use crate::error::{Result, RingError};
use crate::geometry::Percent;

/// How a raw value is snapped before it becomes a percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Keep the value as is.
    #[default]
    None,
    /// Round to the nearest whole number.
    WholeNumber,
    /// Round to the nearest block boundary, `max / count` apart.
    Block(u32),
}

/// Converts host values on a `[0, max]` scale into [`Percent`]s.
///
/// Values are rounded first, then limited to the allowed range, then
/// divided by `max` and clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    max_value: f64,
    min_allowed: f64,
    max_allowed: Option<f64>,
    rounding: Rounding,
}

impl ValueScale {
    /// Creates a new value scale.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidParameters`] if `max_value` is not a
    /// positive finite number or the rounding uses zero blocks.
    pub fn new(max_value: f64, rounding: Rounding) -> Result<Self> {
        if !(max_value.is_finite() && max_value > 0.0) {
            return Err(RingError::InvalidParameters(format!(
                "max value must be positive, got {max_value}"
            )));
        }
        if rounding == Rounding::Block(0) {
            return Err(RingError::InvalidParameters(
                "block rounding needs at least one block".into(),
            ));
        }
        Ok(Self {
            max_value,
            min_allowed: 0.0,
            max_allowed: None,
            rounding,
        })
    }

    /// Limits accepted values to `[min, max]`. `None` leaves the upper end open.
    #[must_use]
    pub fn with_allowed(mut self, min: f64, max: Option<f64>) -> Self {
        self.min_allowed = min;
        self.max_allowed = max;
        self
    }

    /// Returns the value that fills the whole ring.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Returns `value` rounded and limited, still on the host's scale.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        let rounded = match self.rounding {
            Rounding::None => value,
            Rounding::WholeNumber => value.round(),
            Rounding::Block(count) => {
                let per_block = self.max_value / f64::from(count);
                (value / per_block).round() * per_block
            }
        };
        let lower = rounded.max(self.min_allowed);
        match self.max_allowed {
            Some(upper) => lower.min(upper),
            None => lower,
        }
    }

    /// Converts `value` to the percent it fills.
    #[must_use]
    pub fn percent_for(&self, value: f64) -> Percent {
        Percent::from_value(self.snap(value), self.max_value)
    }

    /// Converts a percent back to a value on this scale.
    #[must_use]
    pub fn value_for(&self, percent: Percent) -> f64 {
        percent.fraction() * self.max_value
    }
}
