//! Generator settings, persisted as `config.ron` in the config directory.
//!
//! Every section is `#[serde(default)]`, so a partial file fills the gaps
//! from [`Config::default`] and unknown keys are ignored.

use std::path::{Path, PathBuf};

use cartograph_biome::{ElevationBands, PipelineConfig};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// World dimensions and seed.
    pub world: WorldConfig,
    /// Land placement strategy.
    pub land: LandConfig,
    /// Biome classification tuning.
    pub biome: BiomeConfig,
    /// Logging settings.
    pub debug: DebugConfig,
}

/// Sampling grid size and seed layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Grid width in pixels.
    pub width: u32,
    /// Grid height in pixels.
    pub height: u32,
    /// Distance between neighbouring seeds on the jittered lattice, in pixels.
    pub cell_spacing: u32,
    /// World seed; every random choice derives from it.
    pub seed: u64,
}

/// Which land predicate decides the coastline.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum LandShape {
    /// Lobed island around the grid centre.
    #[default]
    Radial,
    /// Perlin noise against a radial falloff.
    Noise,
    /// Elevation above sea level.
    Elevation,
}

/// Land placement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LandConfig {
    /// Strategy used by the land pass.
    pub shape: LandShape,
    /// Sea level for [`LandShape::Elevation`], in normalized elevation.
    pub sea_level: f64,
    /// Base noise level a centre cell must exceed for [`LandShape::Noise`].
    pub noise_threshold: f64,
    /// Threshold added per squared unit of distance from the centre.
    pub noise_falloff: f64,
    /// Octaves of Perlin noise.
    pub noise_octaves: u32,
    /// First-octave frequency in normalized grid units.
    pub noise_frequency: f64,
}

/// Biome classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BiomeConfig {
    /// Moisture kept per hop away from a lake, in `(0, 1)`.
    pub moisture_decay: f64,
    /// Sampled moisture above which inland cells become lakes, in `[0, 1]`.
    pub lake_moisture_cutoff: f64,
    /// Also diffuse moisture from the ocean.
    pub saturate_oceans: bool,
    /// Elevation where hills begin.
    pub hill_elevation: f64,
    /// Elevation where mountains begin.
    pub mountain_elevation: f64,
    /// Elevation where peaks begin.
    pub peak_elevation: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// `EnvFilter` directives, e.g. `"info"` or `"warn,cartograph_biome=debug"`.
    pub log_level: String,
    /// Directory for JSON logs in debug builds. `None` means `logs/` under
    /// the config directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            cell_spacing: 8,
            seed: 0,
        }
    }
}

impl Default for LandConfig {
    fn default() -> Self {
        Self {
            shape: LandShape::Radial,
            sea_level: 0.35,
            noise_threshold: 0.3,
            noise_falloff: 0.3,
            noise_octaves: 4,
            noise_frequency: 2.0,
        }
    }
}

impl Default for BiomeConfig {
    fn default() -> Self {
        let bands = ElevationBands::default();
        Self {
            moisture_decay: PipelineConfig::DEFAULT_MOISTURE_DECAY,
            lake_moisture_cutoff: PipelineConfig::DEFAULT_LAKE_MOISTURE_CUTOFF,
            saturate_oceans: false,
            hill_elevation: bands.hill,
            mountain_elevation: bands.mountain,
            peak_elevation: bands.peak,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl BiomeConfig {
    /// Validated pipeline settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBiome`] if the decay or cutoff is out of
    /// range or the elevation bands are not increasing.
    pub fn pipeline_config(&self) -> Result<PipelineConfig, ConfigError> {
        self.elevation_bands()?;
        PipelineConfig::new(self.moisture_decay, self.lake_moisture_cutoff)
            .map(|config| config.with_ocean_saturation(self.saturate_oceans))
            .map_err(ConfigError::InvalidBiome)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBiome`] unless `hill < mountain < peak`.
    pub fn elevation_bands(&self) -> Result<ElevationBands, ConfigError> {
        ElevationBands::new(
            self.hill_elevation,
            self.mountain_elevation,
            self.peak_elevation,
        )
        .map_err(ConfigError::InvalidBiome)
    }
}

impl DebugConfig {
    /// Where debug builds write the JSON log.
    pub fn log_dir_in(&self, config_dir: &Path) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| config_dir.join("logs"))
    }
}

impl Config {
    /// Platform config directory for Cartograph, if one can be resolved.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cartograph"))
    }

    /// Reads `config.ron` from `config_dir`, writing the defaults there first
    /// if the file does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Using config {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Wrote default config to {}", config_path.display());
            Ok(config)
        }
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                path: config_path.to_path_buf(),
                source,
            })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }

    /// Writes `config.ron` into `config_dir`, creating the directory if needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let write_error = |source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        };
        std::fs::create_dir_all(config_dir).map_err(write_error)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(write_error)
    }

    /// Re-reads the file; returns `Some(new_config)` only if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;
        if &new_config != self {
            log::info!("Config changed on disk");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartograph_biome::BiomeError;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(2))
                .unwrap();
        assert!(ron_str.contains("width: 256"));
        assert!(ron_str.contains("shape: Radial"));
        assert!(ron_str.contains("moisture_decay: 0.9"));
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(world: (width: 64))").unwrap();
        assert_eq!(config.world.width, 64);
        assert_eq!(config.world.height, 256);
        assert_eq!(config.biome, BiomeConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_land_shape_variant_parses() {
        let config: Config = ron::from_str("(land: (shape: Noise, noise_octaves: 6))").unwrap();
        assert_eq!(config.land.shape, LandShape::Noise);
        assert_eq!(config.land.noise_octaves, 6);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.world.seed = 1234;
        config.land.shape = LandShape::Elevation;
        config.biome.moisture_decay = 0.75;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.biome.lake_moisture_cutoff = 0.5;
        modified.save(dir.path()).unwrap();

        let reloaded = config.reload(dir.path()).unwrap();
        assert_eq!(reloaded.map(|c| c.biome.lake_moisture_cutoff), Some(0.5));
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_default_biome_config_is_valid() {
        let pipeline = BiomeConfig::default().pipeline_config().unwrap();
        assert_eq!(pipeline.moisture_decay(), 0.9);
        assert!(!pipeline.saturate_oceans());
    }

    #[test]
    fn test_out_of_range_decay_rejected() {
        let biome = BiomeConfig {
            moisture_decay: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            biome.pipeline_config(),
            Err(ConfigError::InvalidBiome(_))
        ));
    }

    #[test]
    fn test_elevation_bands_follow_config() {
        let biome = BiomeConfig {
            peak_elevation: 0.8,
            ..Default::default()
        };
        let bands = biome.elevation_bands().unwrap();
        assert_eq!(bands.peak, 0.8);
        assert_eq!(bands.hill, 0.4);
    }

    #[test]
    fn test_unordered_bands_rejected() {
        let biome = BiomeConfig {
            hill_elevation: 0.8,
            mountain_elevation: 0.6,
            ..Default::default()
        };
        assert!(matches!(
            biome.elevation_bands(),
            Err(ConfigError::InvalidBiome(BiomeError::InvalidElevationBands { .. }))
        ));
        assert!(matches!(
            biome.pipeline_config(),
            Err(ConfigError::InvalidBiome(_))
        ));
    }

    #[test]
    fn test_log_dir_defaults_under_config_dir() {
        let dir = Path::new("/tmp/cartograph");
        assert_eq!(
            DebugConfig::default().log_dir_in(dir),
            dir.join("logs")
        );
        let custom = DebugConfig {
            log_dir: Some(PathBuf::from("/var/log/cartograph")),
            ..Default::default()
        };
        assert_eq!(custom.log_dir_in(dir), PathBuf::from("/var/log/cartograph"));
    }
}
