//! Command-line arguments for the map generator.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, LandShape};

/// Cartograph command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "cartograph", about = "Polygon map biome generator")]
pub struct CliArgs {
    /// Grid width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Seed spacing in pixels.
    #[arg(long)]
    pub spacing: Option<u32>,

    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Land placement strategy.
    #[arg(long, value_enum)]
    pub land: Option<LandShape>,

    /// Moisture kept per hop away from a lake.
    #[arg(long)]
    pub decay: Option<f64>,

    /// Sampled moisture above which inland cells become lakes.
    #[arg(long)]
    pub lake_cutoff: Option<f64>,

    /// Also diffuse moisture from the ocean.
    #[arg(long)]
    pub saturate_oceans: Option<bool>,

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
        if let Some(w) = args.width {
            self.world.width = w;
        }
        if let Some(h) = args.height {
            self.world.height = h;
        }
        if let Some(spacing) = args.spacing {
            self.world.cell_spacing = spacing;
        }
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(shape) = args.land {
            self.land.shape = shape;
        }
        if let Some(decay) = args.decay {
            self.biome.moisture_decay = decay;
        }
        if let Some(cutoff) = args.lake_cutoff {
            self.biome.lake_moisture_cutoff = cutoff;
        }
        if let Some(saturate) = args.saturate_oceans {
            self.biome.saturate_oceans = saturate;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
