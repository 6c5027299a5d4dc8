mod circle;
mod contour;
mod line_mode;
mod percent;
mod ring;
mod stroke;
mod sweep;

pub use circle::Circle;
pub use contour::ContourSpec;
pub use line_mode::LineMode;
pub use percent::Percent;
pub use ring::{ArcBand, ContourBand, GuideLine, LineRole, RingBand, RingGeometry};
pub use stroke::StrokeSpec;
pub use sweep::{Direction, SweepConfig};
