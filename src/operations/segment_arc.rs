use tracing::trace;

use crate::error::{Result, RingError};
use crate::geometry::ArcBand;
use crate::math::{normalize_degrees, FULL_TURN, TOLERANCE};

/// Upper bound on blocks per ring.
pub const MAX_BLOCKS: u32 = 3600;

/// Division of the ring into evenly spaced blocks.
///
/// The ring holds `count` blocks, one every `360 / count` degrees. Each
/// block fills `scale` of its pitch; the rest is a gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    count: u32,
    scale: f64,
}

impl BlockLayout {
    /// Creates a new block layout.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidParameters`] if `count` is outside
    /// `2..=MAX_BLOCKS` or `scale` is outside `(0, 1]`.
    pub fn new(count: u32, scale: f64) -> Result<Self> {
        if !(2..=MAX_BLOCKS).contains(&count) {
            return Err(RingError::InvalidParameters(format!(
                "block count must be in [2, {MAX_BLOCKS}], got {count}"
            )));
        }
        if !(scale > 0.0 && scale <= 1.0) {
            return Err(RingError::InvalidParameters(format!(
                "block scale must be in (0, 1], got {scale}"
            )));
        }
        Ok(Self { count, scale })
    }

    /// Returns the number of blocks in a full ring.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Angular distance between block starts.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        FULL_TURN / f64::from(self.count)
    }

    /// Angular extent of one block.
    #[must_use]
    pub fn block_degrees(&self) -> f64 {
        self.pitch() * self.scale
    }
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self {
            count: 18,
            scale: 0.9,
        }
    }
}

/// Splits an arc into blocks laid out along its sweep direction.
///
/// Blocks start at the arc's start angle and repeat every pitch; the last
/// one is cut short where the arc ends. Sweeps are limited to one full turn.
#[derive(Debug, Clone, Copy)]
pub struct SegmentArc {
    arc: ArcBand,
    layout: BlockLayout,
}

impl SegmentArc {
    /// Creates a new `SegmentArc` operation.
    #[must_use]
    pub fn new(arc: ArcBand, layout: BlockLayout) -> Self {
        Self { arc, layout }
    }

    /// Executes the split, returning one arc per visible block.
    #[must_use]
    pub fn execute(&self) -> Vec<ArcBand> {
        let pitch = self.layout.pitch();
        let block = self.layout.block_degrees();
        let total = self.arc.clamped_sweep();
        let sign = self.arc.direction.sign();

        let mut blocks = Vec::new();
        for i in 0..self.layout.count {
            let offset = f64::from(i) * pitch;
            if offset >= total - TOLERANCE {
                break;
            }
            blocks.push(ArcBand {
                start_angle: normalize_degrees(self.arc.start_angle + sign * offset),
                sweep_angle: block.min(total - offset),
                ..self.arc
            });
        }
        trace!(blocks = blocks.len(), total, "segmented arc");
        blocks
    }
}
