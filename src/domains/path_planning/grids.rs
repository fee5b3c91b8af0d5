use crate::domains::configuration_space::{GridCell, CELL_COUNT};

/// Marks a cell the search never reached. Larger than any possible path length.
pub const UNVISITED: u32 = (CELL_COUNT + 1) as u32;

/// BFS depth of every cell from the search start.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceGrid {
    cells: Vec<u32>,
}

impl DistanceGrid {
    pub fn unvisited() -> Self {
        Self {
            cells: vec![UNVISITED; CELL_COUNT],
        }
    }

    pub fn get(&self, cell: GridCell) -> u32 {
        self.cells[cell.index()]
    }

    pub fn set(&mut self, cell: GridCell, distance: u32) {
        self.cells[cell.index()] = distance;
    }

    pub fn is_visited(&self, cell: GridCell) -> bool {
        self.get(cell) != UNVISITED
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|&&d| d != UNVISITED).count()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }
}

/// The cell each visited cell was first reached from. `None` for the start cell
/// and for cells never reached.
#[derive(Debug, Clone, PartialEq)]
pub struct PredecessorGrid {
    cells: Vec<Option<GridCell>>,
}

impl PredecessorGrid {
    pub fn empty() -> Self {
        Self {
            cells: vec![None; CELL_COUNT],
        }
    }

    pub fn get(&self, cell: GridCell) -> Option<GridCell> {
        self.cells[cell.index()]
    }

    pub fn set(&mut self, cell: GridCell, predecessor: GridCell) {
        self.cells[cell.index()] = Some(predecessor);
    }
}
