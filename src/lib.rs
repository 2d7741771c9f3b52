//! Conway's Game of Life forward simulator
//!
//! This library simulates Conway's Game of Life: it loads or randomly seeds
//! a rectangular grid, steps it generation by generation with the B3/S23
//! rule, and hands each frame to a configurable output sink.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{EngineError, GenerationEngine, Grid};
pub use simulation::{RunReport, SimulationRun};

use anyhow::Result;
use simulation::{FrameFileSink, FrameSink};

/// Run a full simulation from settings, writing frames to the configured
/// output directory
pub fn run_simulation(settings: Settings) -> Result<RunReport> {
    let mut sink = FrameFileSink::new(
        settings.output.output_directory.clone(),
        settings.output.format,
        settings.animation.interval_ms,
    );
    run_simulation_with_sink(settings, &mut sink)
}

/// Run a full simulation from settings into a caller-supplied sink
pub fn run_simulation_with_sink(
    settings: Settings,
    sink: &mut dyn FrameSink,
) -> Result<RunReport> {
    let mut run = SimulationRun::new(settings)?;
    run.run(sink)
}
