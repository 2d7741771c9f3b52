//! Simulation run driver

use super::FrameSink;
use crate::config::Settings;
use crate::game_of_life::{io, EngineError, GenerationEngine};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::time::{Duration, Instant};

/// Wires settings, initial state, the engine, and a frame sink together
///
/// The initial grid comes from a pattern file when one is configured,
/// otherwise from uniform random seeding. Either way it must match the
/// declared grid dimensions before the engine accepts it.
pub struct SimulationRun {
    settings: Settings,
    engine: GenerationEngine,
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Frames handed to the sink, including the generation-0 frame
    pub frames_emitted: usize,
    pub final_generation: u64,
    pub final_living: usize,
    pub elapsed: Duration,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run complete:")?;
        writeln!(f, "  Frames emitted: {}", self.frames_emitted)?;
        writeln!(f, "  Final generation: {}", self.final_generation)?;
        writeln!(f, "  Living cells: {}", self.final_living)?;
        write!(f, "  Elapsed: {:.3}s", self.elapsed.as_secs_f64())
    }
}

impl SimulationRun {
    /// Resolve the initial grid and build a validated engine
    pub fn new(settings: Settings) -> Result<Self> {
        let grid = match settings.input.initial_state_file {
            Some(ref path) => io::load_grid_from_file(path)
                .context("Failed to load initial state file")?,
            None => {
                let mut rng = match settings.input.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                io::random_grid(settings.grid.height, settings.grid.width, &mut rng)
            }
        };

        // A malformed grid must never reach the transition logic
        if grid.height != settings.grid.height || grid.width != settings.grid.width {
            return Err(EngineError::InvalidConfiguration {
                reason: format!(
                    "initial state is {}x{}, configured grid is {}x{}",
                    grid.height, grid.width, settings.grid.height, settings.grid.width
                ),
            }
            .into());
        }

        let engine = GenerationEngine::from_grid(grid);

        Ok(Self { settings, engine })
    }

    /// The engine's current generation counter
    pub fn generation(&self) -> u64 {
        self.engine.generation()
    }

    /// Drive the configured number of frames into the sink
    ///
    /// The initial state goes out as generation 0, followed by one frame
    /// per `advance()`. The frame count bounds total work; the engine itself
    /// has no terminal state.
    pub fn run(&mut self, sink: &mut dyn FrameSink) -> Result<RunReport> {
        let start_time = Instant::now();

        sink.consume(0, self.engine.grid())
            .context("Frame sink rejected initial state")?;

        for _ in 0..self.settings.animation.frames {
            self.engine.advance();
            let generation = self.engine.generation();
            sink.consume(generation, self.engine.grid())
                .with_context(|| format!("Frame sink failed at generation {}", generation))?;
        }

        sink.finish().context("Frame sink failed to finish")?;

        Ok(RunReport {
            frames_emitted: self.settings.animation.frames + 1,
            final_generation: self.engine.generation(),
            final_living: self.engine.grid().living_count(),
            elapsed: start_time.elapsed(),
        })
    }
}
