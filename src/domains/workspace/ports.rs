use crate::domains::configuration_space::AvailabilityGrid;
use crate::domains::path_planning::{DistanceGrid, Path};

/// Port for collaborators that visualize planning results.
/// Implementations must not block; they are called inline from the planning commands.
pub trait PlanningObserver: Send + Sync {
    fn configuration_space_built(&self, grid: &AvailabilityGrid);
    fn search_completed(&self, distances: &DistanceGrid, path: &Path);
}
