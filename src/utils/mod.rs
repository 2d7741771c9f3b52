//! Shared display utilities

pub mod display;

pub use display::GridFormatter;
