//! Configuration management for the Game of Life simulator

pub mod settings;

pub use settings::{
    AnimationConfig, CliOverrides, GridConfig, InputConfig, OutputConfig, OutputFormat, Settings,
};
