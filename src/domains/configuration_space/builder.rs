use super::grid::{AvailabilityGrid, GridCell, GRID_RESOLUTION};
use crate::domains::collision::{arm_collides, Obstacle};
use crate::domains::kinematics::ArmModel;
use std::time::Instant;
use tracing::{debug, info};

/// Classify every integer-degree configuration as free or occupied.
///
/// Runs `360 * 360 * obstacles.len()` link/box tests synchronously.
pub fn build_configuration_space(arm: &ArmModel, obstacles: &[Obstacle]) -> AvailabilityGrid {
    let started = Instant::now();
    let mut grid = AvailabilityGrid::blocked();

    for alpha in 0..GRID_RESOLUTION {
        for beta in 0..GRID_RESOLUTION {
            let cell = GridCell::new(alpha, beta);
            let free = !arm_collides(arm, cell.to_configuration(), obstacles);
            grid.set(cell, free);
        }
    }

    debug!(elapsed_ms = started.elapsed().as_millis() as u64, "configuration space sampled");
    info!(
        obstacles = obstacles.len(),
        free_cells = grid.free_count(),
        "configuration space built"
    );
    grid
}
