pub mod arm;
pub mod types;

pub use arm::*;
pub use types::*;
