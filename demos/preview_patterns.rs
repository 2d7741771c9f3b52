//! Demonstration of the simulation pipeline on the classic patterns
//!
//! Steps a blinker and a glider in memory and prints each generation,
//! using the same engine and sink machinery the CLI drives.

use game_of_life_sim::game_of_life::io::parse_grid_from_string;
use game_of_life_sim::game_of_life::GenerationEngine;
use game_of_life_sim::utils::GridFormatter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Pattern Preview ===\n");

    preview("Blinker (period-2 oscillator)", "00000\n00000\n01110\n00000\n00000\n", 2)?;
    preview("Glider (moves one cell diagonally every 4 steps)", "00100\n10100\n01100\n00000\n00000\n", 4)?;

    Ok(())
}

fn preview(name: &str, pattern: &str, generations: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}:", name);

    let grid = parse_grid_from_string(pattern)?;
    let mut engine = GenerationEngine::from_grid(grid);

    println!("Generation 0:");
    print!("{}", GridFormatter::format_grid_compact(engine.grid()));

    for _ in 0..generations {
        engine.advance();
        println!("Generation {}:", engine.generation());
        print!("{}", GridFormatter::format_grid_compact(engine.grid()));
    }

    println!();
    Ok(())
}
