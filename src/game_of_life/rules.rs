//! Game of Life transition rules (B3/S23)

use super::Grid;
use rayon::prelude::*;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute a cell's next state from its current state and neighbor count
    ///
    /// Standard B3/S23: a live cell survives with 2 or 3 neighbors, a dead
    /// cell is born with exactly 3, everything else dies or stays dead.
    pub fn next_state(current_state: bool, neighbor_count: u8) -> bool {
        matches!(
            (current_state, neighbor_count),
            (true, 2) | (true, 3) | (false, 3)
        )
    }

    /// Evolve the grid one generation forward
    ///
    /// Every cell's next state is computed against `current` as a frozen
    /// snapshot and written into a fresh buffer, so no read ever observes a
    /// partially updated generation. Rows are evaluated in parallel; reads
    /// only touch the snapshot, writes only the new buffer.
    pub fn evolve(current: &Grid) -> Grid {
        let next_cells: Vec<bool> = (0..current.height)
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..current.width).map(move |col| {
                    let neighbors = current.count_neighbors(row, col);
                    Self::next_state(current.get(row, col), neighbors)
                })
            })
            .collect();

        Grid {
            width: current.width,
            height: current.height,
            cells: next_cells,
        }
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

    /// Get the maximum possible neighbor count for any cell
    pub fn max_neighbor_count() -> u8 {
        8 // Maximum 8 neighbors in Moore neighborhood
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_is_total() {
        // Every (state, count) pair matches the B3/S23 table
        for count in 0..=GameOfLifeRules::max_neighbor_count() {
            let live_next = GameOfLifeRules::next_state(true, count);
            let dead_next = GameOfLifeRules::next_state(false, count);

            assert_eq!(live_next, count == 2 || count == 3);
            assert_eq!(dead_next, count == 3);
        }
    }

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::next_state(true, 2)); // Survival
        assert!(GameOfLifeRules::next_state(true, 3)); // Survival
        assert!(GameOfLifeRules::next_state(false, 3)); // Birth
        assert!(!GameOfLifeRules::next_state(true, 1)); // Underpopulation
        assert!(!GameOfLifeRules::next_state(true, 4)); // Overpopulation
        assert!(!GameOfLifeRules::next_state(false, 2)); // No birth
        assert!(!GameOfLifeRules::next_state(false, 0));
    }

    #[test]
    fn test_still_life_block() {
        // 2x2 block should remain stable
        let cells = vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        let evolved = GameOfLifeRules::evolve(&grid);

        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        // Horizontal blinker at row 2, columns 1-3 of a 5x5 grid
        let mut grid = Grid::new(5, 5);
        for col in 1..=3 {
            grid.set(2, col, true).unwrap();
        }

        // One step: vertical line at column 2, rows 1-3
        let evolved = GameOfLifeRules::evolve(&grid);
        let mut expected = Grid::new(5, 5);
        for row in 1..=3 {
            expected.set(row, 2, true).unwrap();
        }
        assert_eq!(evolved, expected);

        // Second step returns to the original orientation
        let evolved_twice = GameOfLifeRules::evolve(&evolved);
        assert_eq!(evolved_twice, grid);
    }

    #[test]
    fn test_evolve_preserves_shape() {
        let grid = Grid::new(7, 4);
        let evolved = GameOfLifeRules::evolve(&grid);
        assert_eq!(evolved.width, 7);
        assert_eq!(evolved.height, 4);
        assert_eq!(evolved.cells.len(), 28);
    }

    #[test]
    fn test_evolve_generations() {
        // A blinker is period 2: any even number of steps is the identity
        let cells = vec![
            vec![false, false, false],
            vec![true, true, true],
            vec![false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        let after_four = GameOfLifeRules::evolve_generations(grid.clone(), 4);
        assert_eq!(after_four, grid);
    }
}
