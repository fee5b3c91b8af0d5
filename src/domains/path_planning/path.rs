use crate::domains::configuration_space::GridCell;
use serde::{Deserialize, Serialize};

/// Ordered integer-degree configurations from start to goal, both included.
/// Empty when no path exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    cells: Vec<GridCell>,
}

impl Path {
    pub fn new(cells: Vec<GridCell>) -> Self {
        Self { cells }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells, endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Number of unit moves between consecutive cells.
    pub fn step_count(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<GridCell> {
        self.cells.get(index).copied()
    }

    pub fn first(&self) -> Option<GridCell> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<GridCell> {
        self.cells.last().copied()
    }
}
