//! Console formatting for grids and run summaries

use crate::game_of_life::Grid;

/// Formats grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::new();
        for row in 0..grid.height {
            for col in 0..grid.width {
                output.push(if grid.get(row, col) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// One-line statistics for a grid
    pub fn format_grid_stats(grid: &Grid) -> String {
        let total = grid.width * grid.height;
        let living = grid.living_count();
        let density = if total > 0 {
            (living as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        format!(
            "{}x{} grid, {} living cells ({:.1}% density)",
            grid.height, grid.width, living, density
        )
    }
}
