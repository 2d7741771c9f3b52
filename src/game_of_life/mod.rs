//! Game of Life core functionality

pub mod engine;
pub mod grid;
pub mod io;
pub mod rules;

pub use engine::{EngineError, GenerationEngine};
pub use grid::Grid;
pub use io::{create_example_patterns, load_grid_from_file, random_grid, save_grid_to_file};
pub use rules::GameOfLifeRules;
