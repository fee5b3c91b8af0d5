pub mod detector;
pub mod geometry;
pub mod obstacle;

pub use detector::*;
pub use geometry::{circle_intersections, intersect_segments, SegmentIntersection};
pub use obstacle::*;
