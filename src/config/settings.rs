//! Configuration settings for the Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub animation: AnimationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub height: usize,
    pub width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Number of generations to advance past the initial state
    pub frames: usize,
    /// Frame interval in milliseconds, recorded in exported output for
    /// whatever encoder consumes the frames
    pub interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Initial state file; when absent the grid is seeded randomly
    pub initial_state_file: Option<PathBuf>,
    /// RNG seed for random seeding, for reproducible runs
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                height: 50,
                width: 50,
            },
            animation: AnimationConfig {
                frames: 30,
                interval_ms: 300,
            },
            input: InputConfig {
                initial_state_file: None,
                seed: None,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                output_directory: PathBuf::from("output/frames"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.height == 0 || self.grid.width == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.height,
                self.grid.width
            );
        }

        if self.animation.frames == 0 {
            anyhow::bail!("Number of frames must be positive");
        }

        if let Some(ref path) = self.input.initial_state_file {
            if !path.exists() {
                anyhow::bail!("Initial state file does not exist: {}", path.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(frames) = cli_overrides.frames {
            self.animation.frames = frames;
        }
        if let Some(ref input_file) = cli_overrides.input_file {
            self.input.initial_state_file = Some(input_file.clone());
        }
        if let Some(seed) = cli_overrides.seed {
            self.input.seed = Some(seed);
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub height: Option<usize>,
    pub width: Option<usize>,
    pub frames: Option<usize>,
    pub input_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.grid.height, 50);
        assert_eq!(settings.grid.width, 50);
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let mut settings = Settings::default();
        settings.grid.height = 12;
        settings.animation.frames = 5;
        settings.input.seed = Some(99);
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.grid.height, 12);
        assert_eq!(loaded.animation.frames, 5);
        assert_eq!(loaded.input.seed, Some(99));
    }

    #[test]
    fn test_validation_rejects_zero_dimensions() {
        let mut settings = Settings::default();
        settings.grid.width = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.animation.frames = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_missing_input_file() {
        let mut settings = Settings::default();
        settings.input.initial_state_file = Some(PathBuf::from("does/not/exist.txt"));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            height: Some(8),
            width: Some(9),
            frames: Some(3),
            input_file: None,
            seed: Some(1),
            output_dir: Some(PathBuf::from("elsewhere")),
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.grid.height, 8);
        assert_eq!(settings.grid.width, 9);
        assert_eq!(settings.animation.frames, 3);
        assert_eq!(settings.input.seed, Some(1));
        assert_eq!(settings.output.output_directory, PathBuf::from("elsewhere"));
    }
}
