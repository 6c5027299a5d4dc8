mod compute_ring_geometry;
mod percent_at_point;
mod segment_arc;
mod value_scale;

pub use compute_ring_geometry::ComputeRingGeometry;
pub use percent_at_point::PercentAtPoint;
pub use segment_arc::{BlockLayout, SegmentArc, MAX_BLOCKS};
pub use value_scale::{Rounding, ValueScale};
