pub mod interpolation;
pub mod player;

pub use interpolation::*;
pub use player::*;
