//! Command-line interface.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use robo_diagnostic::emitter::ColorMode;

/// RoboScript toolchain: validate, simulate and compile program trees.
#[derive(Debug, Parser)]
#[command(name = "roboc", version, about)]
pub struct Cli {
    /// When to color diagnostics.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate program trees and report every problem.
    Check {
        /// JSON program trees.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Validate, then simulate a program tree.
    Run {
        /// JSON program tree.
        file: PathBuf,
        /// Write the resulting scene as JSON instead of printing a summary.
        #[arg(long, value_name = "OUT")]
        scene: Option<PathBuf>,
        /// Iterations allowed per loop.
        #[arg(long, value_name = "N")]
        max_iterations: Option<u64>,
        /// Wall-clock seconds allowed for the run.
        #[arg(long, value_name = "S", value_parser = parse_seconds)]
        max_seconds: Option<Duration>,
    },
    /// Validate, then emit an Arduino sketch.
    Build {
        /// JSON program tree.
        file: PathBuf,
        /// Output path; the sketch goes to stdout if omitted.
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

fn parse_seconds(text: &str) -> Result<Duration, String> {
    let seconds: f64 = text
        .parse()
        .map_err(|_| format!("`{text}` is not a number of seconds"))?;
    if seconds <= 0.0 {
        return Err("the run time limit must be positive".to_string());
    }
    Duration::try_from_secs_f64(seconds).map_err(|e| e.to_string())
}
