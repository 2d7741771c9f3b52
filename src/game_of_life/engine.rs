//! Generation engine: validated grid state plus stepping

use super::{GameOfLifeRules, Grid};
use thiserror::Error;

/// Errors from engine construction
///
/// Both a wrong row count and a wrong row length are the same kind of
/// failure: the supplied cells do not form the declared height x width
/// rectangle. Construction fails outright; no simulation proceeds.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid initial configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

/// Owns the current grid and generation counter for a simulation run
///
/// The engine validates its initial grid eagerly, then steps it one
/// generation at a time. Each step reads a frozen snapshot of the current
/// generation and swaps in a freshly computed buffer, so neighbor counts
/// never observe partially updated state. Stepping itself cannot fail.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    grid: Grid,
    generation: u64,
}

impl GenerationEngine {
    /// Validate a candidate grid against declared dimensions and build the engine
    ///
    /// Fails with `EngineError::InvalidConfiguration` if the number of rows
    /// differs from `height` or any row's length differs from `width`. The
    /// check runs once, before any transition is attempted.
    pub fn new(cells: Vec<Vec<bool>>, height: usize, width: usize) -> Result<Self, EngineError> {
        if height == 0 || width == 0 {
            return Err(EngineError::InvalidConfiguration {
                reason: format!("grid dimensions must be positive, got {}x{}", height, width),
            });
        }

        if cells.len() != height {
            return Err(EngineError::InvalidConfiguration {
                reason: format!("expected {} rows, got {}", height, cells.len()),
            });
        }

        for (i, row) in cells.iter().enumerate() {
            if row.len() != width {
                return Err(EngineError::InvalidConfiguration {
                    reason: format!("row {} has {} cells, expected {}", i, row.len(), width),
                });
            }
        }

        let grid = Grid {
            width,
            height,
            cells: cells.into_iter().flatten().collect(),
        };

        Ok(Self {
            grid,
            generation: 0,
        })
    }

    /// Build the engine from an already-validated grid
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    /// The current grid (generation `self.generation()`)
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// How many transitions have been applied since the initial state
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Count living neighbors of a cell in the current generation
    pub fn alive_neighbor_count(&self, row: usize, col: usize) -> u8 {
        self.grid.count_neighbors(row, col)
    }

    /// Advance one generation and return the new grid
    ///
    /// Deterministic, no I/O; the engine can be stepped indefinitely.
    pub fn advance(&mut self) -> &Grid {
        self.grid = GameOfLifeRules::evolve(&self.grid);
        self.generation += 1;
        &self.grid
    }
}
