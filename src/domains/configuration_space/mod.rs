pub mod builder;
pub mod grid;

pub use builder::*;
pub use grid::*;
