use kinematic_chain::domains::configuration_space::{AvailabilityGrid, GridCell, CELL_COUNT, GRID_RESOLUTION};
use kinematic_chain::domains::kinematics::Configuration;
use kinematic_chain::domains::path_planning::*;

fn cells_are_adjacent(a: GridCell, b: GridCell) -> bool {
    a.neighbors().contains(&b)
}

fn assert_valid_path(path: &Path, start: GridCell, goal: GridCell, grid: &AvailabilityGrid) {
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(goal));
    for pair in path.cells().windows(2) {
        assert!(cells_are_adjacent(pair[0], pair[1]), "{:?} -> {:?}", pair[0], pair[1]);
    }
    for cell in &path.cells()[1..] {
        assert!(grid.is_free(*cell));
    }
}

#[cfg(test)]
mod open_grid_tests {
    use super::*;

    #[test]
    fn test_manhattan_distance_on_open_grid() {
        let grid = AvailabilityGrid::open();
        let outcome = find_path(
            Configuration::from_degrees(0.0, 0.0),
            Configuration::from_degrees(10.0, 10.0),
            &grid,
        );

        assert!(outcome.found());
        assert_eq!(outcome.path.step_count(), 20);
        assert_eq!(outcome.path.len(), 21);
        assert_valid_path(&outcome.path, GridCell::new(0, 0), GridCell::new(10, 10), &grid);
        assert_eq!(outcome.distances.get(GridCell::new(10, 10)), 20);
    }

    #[test]
    fn test_wraps_around_alpha_axis() {
        let grid = AvailabilityGrid::open();
        let outcome = search(GridCell::new(350, 0), GridCell::new(5, 0), &grid);

        assert_eq!(outcome.path.step_count(), 15);
        assert_valid_path(&outcome.path, GridCell::new(350, 0), GridCell::new(5, 0), &grid);
        let alphas: Vec<usize> = outcome.path.cells().iter().map(|c| c.alpha).collect();
        assert!(alphas.windows(2).any(|w| w == [359, 0]));
        assert!(!alphas.contains(&180));
    }

    #[test]
    fn test_wraps_around_beta_axis() {
        let grid = AvailabilityGrid::open();
        let outcome = search(GridCell::new(0, 2), GridCell::new(0, 357), &grid);

        assert_eq!(outcome.path.step_count(), 5);
    }

    #[test]
    fn test_opposite_corner_of_torus() {
        let grid = AvailabilityGrid::open();
        let outcome = search(GridCell::new(0, 0), GridCell::new(180, 180), &grid);

        assert_eq!(outcome.path.step_count(), 360);
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = AvailabilityGrid::open();
        let outcome = search(GridCell::new(42, 7), GridCell::new(42, 7), &grid);

        assert_eq!(outcome.path.cells(), &[GridCell::new(42, 7)]);
        assert_eq!(outcome.path.step_count(), 0);
        assert_eq!(outcome.expanded, 1);
    }

    #[test]
    fn test_inputs_snap_to_nearest_cells() {
        let grid = AvailabilityGrid::open();
        let outcome = find_path(
            Configuration::from_degrees(359.6, -0.4),
            Configuration::from_degrees(2.2, 0.0),
            &grid,
        );

        assert_eq!(outcome.start, GridCell::new(0, 0));
        assert_eq!(outcome.goal, GridCell::new(2, 0));
        assert_eq!(outcome.path.step_count(), 2);
    }

    #[test]
    fn test_search_is_deterministic() {
        let grid = AvailabilityGrid::open();
        let a = search(GridCell::new(3, 4), GridCell::new(30, 40), &grid);
        let b = search(GridCell::new(3, 4), GridCell::new(30, 40), &grid);

        assert_eq!(a.path, b.path);
    }
}

#[cfg(test)]
mod obstructed_grid_tests {
    use super::*;

    /// Blocks every cell with `alpha == wall_alpha` except at `gap_beta`.
    fn wall_with_gap(wall_alpha: usize, gap_beta: usize) -> AvailabilityGrid {
        let mut grid = AvailabilityGrid::open();
        for beta in 0..GRID_RESOLUTION {
            if beta != gap_beta {
                grid.set(GridCell::new(wall_alpha, beta), false);
            }
        }
        grid
    }

    #[test]
    fn test_detours_through_gap() {
        let grid = wall_with_gap(5, 50);
        let outcome = search(GridCell::new(0, 0), GridCell::new(10, 0), &grid);

        assert_eq!(outcome.path.step_count(), 110);
        assert!(outcome.path.cells().contains(&GridCell::new(5, 50)));
        assert_valid_path(&outcome.path, GridCell::new(0, 0), GridCell::new(10, 0), &grid);
    }

    #[test]
    fn test_blocked_goal_yields_empty_path() {
        let mut grid = AvailabilityGrid::open();
        grid.set(GridCell::new(10, 10), false);
        let outcome = search(GridCell::new(0, 0), GridCell::new(10, 10), &grid);

        assert!(!outcome.found());
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.distances.visited_count(), CELL_COUNT - 1);
        assert!(!outcome.distances.is_visited(GridCell::new(10, 10)));
        assert_eq!(outcome.distances.get(GridCell::new(10, 10)), UNVISITED);
    }

    #[test]
    fn test_enclosed_goal_yields_empty_path() {
        let mut grid = AvailabilityGrid::open();
        for neighbor in GridCell::new(100, 100).neighbors() {
            grid.set(neighbor, false);
        }
        let outcome = search(GridCell::new(0, 0), GridCell::new(100, 100), &grid);

        assert!(outcome.path.is_empty());
        assert!(outcome.expanded > CELL_COUNT / 2);
    }

    #[test]
    fn test_start_has_no_predecessor() {
        let grid = AvailabilityGrid::open();
        let outcome = search(GridCell::new(0, 0), GridCell::new(3, 0), &grid);

        assert_eq!(outcome.distances.get(GridCell::new(0, 0)), 0);
        assert_eq!(outcome.predecessors.get(GridCell::new(0, 0)), None);
        assert_eq!(
            outcome.predecessors.get(GridCell::new(1, 0)),
            Some(GridCell::new(0, 0))
        );
    }
}
