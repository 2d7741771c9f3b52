//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, Settings},
    game_of_life::{create_example_patterns, load_grid_from_file, GenerationEngine},
    simulation::{ConsoleSink, FrameSink},
    utils::GridFormatter,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and export its frames
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Initial state file (overrides config; omit for random seeding)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Number of generations to simulate (overrides config)
        #[arg(short, long)]
        frames: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// RNG seed for random grids (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Evolve a pattern file in the console without writing output
    Preview {
        /// Pattern file to load
        #[arg(short, long)]
        input: PathBuf,

        /// Number of generations to show
        #[arg(short, long, default_value_t = 4)]
        generations: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            input,
            frames,
            height,
            width,
            seed,
            output,
            verbose,
        } => run_command(config, input, frames, height, width, seed, output, verbose),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Preview { input, generations } => preview_command(input, generations),
    }
}

fn run_command(
    config_path: PathBuf,
    input_file: Option<PathBuf>,
    frames: Option<usize>,
    height: Option<usize>,
    width: Option<usize>,
    seed: Option<u64>,
    output_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "Config file {} not found, using defaults",
            config_path.display()
        );
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        height,
        width,
        frames,
        input_file,
        seed,
        output_dir,
    };
    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!("  Grid: {}x{}", settings.grid.height, settings.grid.width);
        println!("  Frames: {}", settings.animation.frames);
        println!("  Interval: {}ms", settings.animation.interval_ms);
        match settings.input.initial_state_file {
            Some(ref path) => println!("  Input: {}", path.display()),
            None => println!("  Input: random (seed {:?})", settings.input.seed),
        }
        println!("  Output dir: {}", settings.output.output_directory.display());
        println!();
    }

    // Validate settings
    settings
        .validate()
        .context("Configuration validation failed")?;

    let output_directory = settings.output.output_directory.clone();
    println!(
        "Simulating {} generations on a {}x{} grid...",
        settings.animation.frames, settings.grid.height, settings.grid.width
    );

    let report = game_of_life_sim::run_simulation(settings).context("Simulation failed")?;

    println!("{}", report);
    println!("Frames saved to {}", output_directory.display());

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("Setting up project structure...");

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("input/patterns");
    let output_dir = directory.join("output/frames");

    for dir in [&config_dir, &patterns_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Create example patterns
    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    // A small pattern-driven configuration variant
    let mut blinker_config = Settings::default();
    blinker_config.grid.height = 3;
    blinker_config.grid.width = 3;
    blinker_config.animation.frames = 10;
    blinker_config.input.initial_state_file = Some(PathBuf::from("input/patterns/blinker.txt"));
    blinker_config.to_file(&config_dir.join("blinker.yaml"))?;
    println!("Created: {}", config_dir.join("blinker.yaml").display());

    println!("\nSetup complete!");
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your patterns to {}", patterns_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

fn preview_command(input: PathBuf, generations: usize) -> Result<()> {
    let grid = load_grid_from_file(&input)
        .with_context(|| format!("Failed to load pattern from {}", input.display()))?;

    println!("{}", GridFormatter::format_grid_stats(&grid));
    println!();

    let mut engine = GenerationEngine::from_grid(grid);
    let mut sink = ConsoleSink;
    sink.consume(0, engine.grid())?;

    for _ in 0..generations {
        engine.advance();
        sink.consume(engine.generation(), engine.grid())?;
    }

    sink.finish()?;
    Ok(())
}
