//! Simulation run orchestration and frame output

pub mod run;
pub mod sink;

pub use run::{RunReport, SimulationRun};
pub use sink::{AnimationDocument, CollectingSink, ConsoleSink, FrameFileSink, FrameSink};
