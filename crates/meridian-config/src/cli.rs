//! Command-line argument parsing for Meridian.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Meridian command-line arguments.
///
/// CLI values override settings loaded from `meridian.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "meridian", about = "Geodesic globe generator")]
pub struct CliArgs {
    /// Globe subdivisions (0-5).
    #[arg(long)]
    pub subdivisions: Option<u32>,

    /// Normal smoothing factor (0.0-1.0).
    #[arg(long)]
    pub smoothing: Option<f32>,

    /// Use transition textures between terrains.
    #[arg(long)]
    pub transitions: Option<bool>,

    /// Demo world seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(subdivisions) = args.subdivisions {
            self.globe.subdivisions = subdivisions;
        }
        if let Some(smoothing) = args.smoothing {
            self.globe.smoothing = smoothing;
        }
        if let Some(transitions) = args.transitions {
            self.globe.transitions = transitions;
        }
        if let Some(seed) = args.seed {
            self.globe.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
