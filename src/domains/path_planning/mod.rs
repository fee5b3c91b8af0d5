pub mod grids;
pub mod path;
pub mod planner;

pub use grids::*;
pub use path::*;
pub use planner::*;
