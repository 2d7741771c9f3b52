//! Grid representation and utilities for Game of Life

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a Game of Life grid
///
/// Cells are stored row-major in a flat buffer. Edges are hard boundaries:
/// cells outside the grid are always dead (no wraparound).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        if cells.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let height = cells.len();
        let width = cells[0].len();

        if width == 0 {
            anyhow::bail!("Grid width cannot be zero");
        }

        // Verify all rows have the same length
        for (i, row) in cells.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), width);
            }
        }

        let flat_cells: Vec<bool> = cells.into_iter().flatten().collect();

        Ok(Self {
            width,
            height,
            cells: flat_cells,
        })
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell value at coordinates
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            false // Out of bounds cells are considered dead
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        if row >= self.height || col >= self.width {
            anyhow::bail!(
                "Coordinates ({}, {}) out of bounds for {}x{} grid",
                row,
                col,
                self.height,
                self.width
            );
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Count living neighbors for a cell
    ///
    /// Examines the Moore neighborhood clipped to grid bounds, so corner
    /// cells see at most 3 neighbors and edge cells at most 5.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue; // Skip the cell itself
                }

                let r = row as isize + dr;
                let c = col as isize + dc;

                if r >= 0
                    && r < self.height as isize
                    && c >= 0
                    && c < self.width as isize
                    && self.cells[self.index(r as usize, c as usize)]
                {
                    count += 1;
                }
            }
        }

        count
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = self.get(row, col);
                let symbol = if cell { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
