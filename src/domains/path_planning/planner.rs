use super::grids::{DistanceGrid, PredecessorGrid};
use super::path::Path;
use crate::domains::configuration_space::{AvailabilityGrid, GridCell};
use crate::domains::kinematics::Configuration;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::{debug, info};

/// Everything a single search produces. The distance grid is kept for visualization.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub start: GridCell,
    pub goal: GridCell,
    pub path: Path,
    pub distances: DistanceGrid,
    pub predecessors: PredecessorGrid,
    pub expanded: usize,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Shortest 4-connected path on the toroidal configuration grid.
///
/// Both endpoints are snapped to the nearest integer-degree cell. Returns an empty
/// path when the goal cannot be reached.
pub fn find_path(
    start: Configuration,
    goal: Configuration,
    availability: &AvailabilityGrid,
) -> SearchOutcome {
    search(GridCell::nearest(start), GridCell::nearest(goal), availability)
}

pub fn search(start: GridCell, goal: GridCell, availability: &AvailabilityGrid) -> SearchOutcome {
    let started = Instant::now();
    let mut distances = DistanceGrid::unvisited();
    let mut predecessors = PredecessorGrid::empty();
    let mut frontier = VecDeque::new();
    let mut expanded = 0usize;
    let mut reached = false;

    distances.set(start, 0);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        expanded += 1;
        if current == goal {
            reached = true;
            break;
        }

        let next_distance = distances.get(current) + 1;
        for neighbor in current.neighbors() {
            if availability.is_free(neighbor) && distances.get(neighbor) > next_distance {
                distances.set(neighbor, next_distance);
                predecessors.set(neighbor, current);
                frontier.push_back(neighbor);
            }
        }
    }

    let path = if reached {
        trace_back(goal, &predecessors)
    } else {
        Path::empty()
    };

    debug!(
        expanded,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "configuration search finished"
    );
    info!(
        start = ?(start.alpha, start.beta),
        goal = ?(goal.alpha, goal.beta),
        steps = path.step_count(),
        found = reached,
        "path search completed"
    );

    SearchOutcome {
        start,
        goal,
        path,
        distances,
        predecessors,
        expanded,
    }
}

fn trace_back(goal: GridCell, predecessors: &PredecessorGrid) -> Path {
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(previous) = predecessors.get(current) {
        cells.push(previous);
        current = previous;
    }
    cells.reverse();
    Path::new(cells)
}
