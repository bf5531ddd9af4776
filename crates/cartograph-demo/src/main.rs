//! Demo binary that synthesizes a raster world and classifies its biomes.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p cartograph-demo -- --land noise --seed 42`.

mod world;

use cartograph_biome::{
    BiomePipeline, ElevationLand, GridFrame, LandPredicate, NoiseLand, NoiseLandParams,
    RadialLand, WhittakerDiagram, place_land,
};
use cartograph_config::{CliArgs, Config, LandConfig, LandShape, WorldConfig};
use clap::Parser;
use tracing::info;

use crate::world::WorldParams;

/// Land predicate selected by the config.
fn land_strategy(land: &LandConfig, world: &WorldConfig) -> Box<dyn LandPredicate> {
    let frame = GridFrame::new(world.width, world.height);
    match land.shape {
        LandShape::Radial => Box::new(RadialLand::from_seed(frame, world.seed)),
        LandShape::Noise => Box::new(NoiseLand::new(
            frame,
            NoiseLandParams {
                seed: world.seed as u32,
                octaves: land.noise_octaves,
                base_frequency: land.noise_frequency,
                threshold: land.noise_threshold,
                falloff: land.noise_falloff,
                ..Default::default()
            },
        )),
        LandShape::Elevation => Box::new(ElevationLand {
            sea_level: land.sea_level,
        }),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .or_else(Config::default_dir)
        .ok_or("failed to resolve a config directory; pass --config")?;

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config.debug.log_dir_in(&config_dir);
    cartograph_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let pipeline_config = config.biome.pipeline_config()?;
    let classifier = WhittakerDiagram::with_bands(config.biome.elevation_bands()?);

    info!(
        "World: {}x{} | spacing: {} | seed: {} | land: {:?}",
        config.world.width,
        config.world.height,
        config.world.cell_spacing,
        config.world.seed,
        config.land.shape
    );

    let world::RasterWorld { mut graph, grid } = world::generate(&WorldParams {
        width: config.world.width,
        height: config.world.height,
        spacing: config.world.cell_spacing,
        seed: config.world.seed,
    })?;

    let predicate = land_strategy(&config.land, &config.world);
    let land = place_land(&mut graph, predicate.as_ref());
    info!("Placed {land} land cells out of {}", graph.len());

    let pipeline = BiomePipeline::with_classifier(pipeline_config, classifier);
    let report = pipeline.run(&mut graph, &grid)?;
    info!(
        "Oceans: {} | lakes: {} ({} from moisture) | beaches: {}",
        report.ocean, report.lake, report.secondary_lakes, report.beach
    );

    for (category, count) in graph.census() {
        info!("{:>26}: {count}", category.name());
    }

    Ok(())
}
