pub mod collision;
pub mod configuration_space;
pub mod kinematics;
pub mod logger;
pub mod path_planning;
pub mod playback;
pub mod workspace;

pub use collision::*;
pub use configuration_space::*;
pub use kinematics::*;
pub use logger::*;
pub use path_planning::*;
pub use playback::*;
pub use workspace::*;
