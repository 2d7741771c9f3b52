//! Per-generation frame consumers

use crate::config::OutputFormat;
use crate::game_of_life::{io, Grid};
use crate::utils::GridFormatter;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Consumes one grid per generation as the simulation advances
///
/// The engine is agnostic to where frames go; a sink owns all output state
/// and is invoked explicitly once per generation. `finish` is called after
/// the last frame so accumulating sinks can flush.
pub trait FrameSink {
    fn consume(&mut self, generation: u64, grid: &Grid) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes frames to a directory, one text file per frame or a single
/// JSON document accumulated across the run
pub struct FrameFileSink {
    output_dir: PathBuf,
    format: OutputFormat,
    interval_ms: u64,
    frames: Vec<FrameRecord>,
    written: usize,
}

/// One exported frame in the JSON document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRecord {
    pub generation: u64,
    pub rows: Vec<String>,
}

/// The JSON document written by `FrameFileSink` in JSON mode
///
/// Records everything an external animation encoder needs: dimensions,
/// the configured frame interval, and the frames in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDocument {
    pub width: usize,
    pub height: usize,
    pub interval_ms: u64,
    pub frames: Vec<FrameRecord>,
}

impl FrameFileSink {
    pub fn new(output_dir: PathBuf, format: OutputFormat, interval_ms: u64) -> Self {
        Self {
            output_dir,
            format,
            interval_ms,
            frames: Vec::new(),
            written: 0,
        }
    }

    /// Number of frames handed to this sink so far
    pub fn frames_written(&self) -> usize {
        self.written
    }

    fn frame_rows(grid: &Grid) -> Vec<String> {
        io::grid_to_string(grid)
            .lines()
            .map(|line| line.to_string())
            .collect()
    }
}

impl FrameSink for FrameFileSink {
    fn consume(&mut self, generation: u64, grid: &Grid) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let filename = format!("frame_{:04}.txt", generation);
                let filepath = self.output_dir.join(filename);
                io::save_grid_to_file(grid, &filepath)
                    .with_context(|| format!("Failed to write frame {}", generation))?;
            }
            OutputFormat::Json => {
                self.frames.push(FrameRecord {
                    generation,
                    rows: Self::frame_rows(grid),
                });
            }
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.format != OutputFormat::Json {
            return Ok(());
        }
        if self.frames.is_empty() {
            anyhow::bail!("No frames were produced");
        }

        let first = &self.frames[0];
        let document = AnimationDocument {
            width: first.rows.first().map(|r| r.len()).unwrap_or(0),
            height: first.rows.len(),
            interval_ms: self.interval_ms,
            frames: std::mem::take(&mut self.frames),
        };

        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create directory: {}", self.output_dir.display())
        })?;

        let path = self.output_dir.join("frames.json");
        let content = serde_json::to_string_pretty(&document)
            .context("Failed to serialize animation document")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }
}

/// Accumulates frames in memory, mainly for tests and previews
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub frames: Vec<(u64, Grid)>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for CollectingSink {
    fn consume(&mut self, generation: u64, grid: &Grid) -> Result<()> {
        self.frames.push((generation, grid.clone()));
        Ok(())
    }
}

/// Prints each generation to the console
pub struct ConsoleSink;

impl FrameSink for ConsoleSink {
    fn consume(&mut self, generation: u64, grid: &Grid) -> Result<()> {
        println!("Generation {} (living: {}):", generation, grid.living_count());
        print!("{}", GridFormatter::format_grid_compact(grid));
        println!();
        Ok(())
    }
}
