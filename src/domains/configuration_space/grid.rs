use crate::common::DomainError;
use crate::domains::kinematics::Configuration;
use serde::{Deserialize, Serialize};

/// Cells per angle axis, one per integer degree.
pub const GRID_RESOLUTION: usize = 360;
pub const CELL_COUNT: usize = GRID_RESOLUTION * GRID_RESOLUTION;

/// Neighbor offsets in (alpha, beta), in the order the search expands them.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// An integer-degree configuration on the toroidal grid, both axes in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CellFields")]
pub struct GridCell {
    pub alpha: usize,
    pub beta: usize,
}

/// Unchecked wire form of [`GridCell`].
#[derive(Deserialize)]
struct CellFields {
    alpha: usize,
    beta: usize,
}

impl TryFrom<CellFields> for GridCell {
    type Error = DomainError;

    fn try_from(fields: CellFields) -> Result<Self, Self::Error> {
        if fields.alpha >= GRID_RESOLUTION || fields.beta >= GRID_RESOLUTION {
            return Err(DomainError::InvalidCommand {
                reason: format!("grid cell ({}, {}) out of range", fields.alpha, fields.beta),
            });
        }
        Ok(Self {
            alpha: fields.alpha,
            beta: fields.beta,
        })
    }
}

impl GridCell {
    /// Panics if either axis is out of range; callers wrap before constructing.
    pub fn new(alpha: usize, beta: usize) -> Self {
        assert!(
            alpha < GRID_RESOLUTION && beta < GRID_RESOLUTION,
            "grid cell ({}, {}) out of range",
            alpha,
            beta
        );
        Self { alpha, beta }
    }

    /// Snap an angle pair in degrees to the nearest cell, wrapping into `[0, 360)`.
    pub fn nearest_degrees(alpha_deg: f64, beta_deg: f64) -> Self {
        Self {
            alpha: snap_degrees(alpha_deg),
            beta: snap_degrees(beta_deg),
        }
    }

    pub fn nearest(configuration: Configuration) -> Self {
        let (alpha, beta) = configuration.to_degrees();
        Self::nearest_degrees(alpha, beta)
    }

    pub fn from_index(index: usize) -> Self {
        Self::new(index / GRID_RESOLUTION, index % GRID_RESOLUTION)
    }

    pub fn index(&self) -> usize {
        GRID_RESOLUTION * self.alpha + self.beta
    }

    pub fn to_configuration(self) -> Configuration {
        Configuration::from_degrees(self.alpha as f64, self.beta as f64)
    }

    pub fn neighbors(self) -> [GridCell; 4] {
        NEIGHBOR_OFFSETS.map(|(da, db)| GridCell {
            alpha: wrap_axis(self.alpha, da),
            beta: wrap_axis(self.beta, db),
        })
    }
}

fn wrap_axis(value: usize, offset: isize) -> usize {
    (value as isize + offset).rem_euclid(GRID_RESOLUTION as isize) as usize
}

fn snap_degrees(degrees: f64) -> usize {
    let rounded = degrees.round().rem_euclid(GRID_RESOLUTION as f64);
    // rem_euclid can land on 360.0 for tiny negative inputs.
    (rounded as usize) % GRID_RESOLUTION
}

/// Which configurations are collision-free, indexed by `360 * alpha + beta`.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityGrid {
    cells: Vec<bool>,
}

impl AvailabilityGrid {
    pub fn open() -> Self {
        Self {
            cells: vec![true; CELL_COUNT],
        }
    }

    pub fn blocked() -> Self {
        Self {
            cells: vec![false; CELL_COUNT],
        }
    }

    pub fn is_free(&self, cell: GridCell) -> bool {
        self.cells[cell.index()]
    }

    pub fn set(&mut self, cell: GridCell, free: bool) {
        self.cells[cell.index()] = free;
    }

    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|&&free| free).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }
}

impl Default for AvailabilityGrid {
    fn default() -> Self {
        Self::open()
    }
}
