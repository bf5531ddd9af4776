//! Whittaker diagram: maps (elevation, moisture) pairs to terminal biomes.

use super::TerminalBiome;
use crate::error::BiomeError;

/// Pure mapping from a land cell's elevation and moisture to its terminal biome.
///
/// Implementations must be total and deterministic.
pub trait BiomeClassifier {
    fn classify(&self, elevation: f64, moisture: f64) -> TerminalBiome;
}

impl<F> BiomeClassifier for F
where
    F: Fn(f64, f64) -> TerminalBiome,
{
    fn classify(&self, elevation: f64, moisture: f64) -> TerminalBiome {
        self(elevation, moisture)
    }
}

/// A rectangular region in elevation–moisture space mapped to a biome.
#[derive(Clone, Debug, PartialEq)]
pub struct WhittakerRegion {
    /// Minimum elevation (exclusive).
    pub elevation_min: f64,
    /// Maximum elevation (inclusive).
    pub elevation_max: f64,
    /// Minimum moisture (exclusive).
    pub moisture_min: f64,
    /// Maximum moisture (inclusive).
    pub moisture_max: f64,
    /// Biome assigned to points within this region.
    pub biome: TerminalBiome,
}

impl WhittakerRegion {
    fn contains(&self, elevation: f64, moisture: f64) -> bool {
        elevation > self.elevation_min
            && elevation <= self.elevation_max
            && moisture > self.moisture_min
            && moisture <= self.moisture_max
    }
}

/// Ordered lookup table; the first region containing the point wins.
#[derive(Clone, Debug, PartialEq)]
pub struct WhittakerDiagram {
    /// Ordered list of regions; first match wins.
    pub regions: Vec<WhittakerRegion>,
    /// Fallback biome if no region matches.
    pub fallback: TerminalBiome,
}

/// Elevation bands separating lowlands, hills, mountains and peaks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationBands {
    pub hill: f64,
    pub mountain: f64,
    pub peak: f64,
}

impl Default for ElevationBands {
    fn default() -> Self {
        Self {
            hill: 0.4,
            mountain: 0.7,
            peak: 0.9,
        }
    }
}

impl ElevationBands {
    /// # Errors
    ///
    /// Returns [`BiomeError::InvalidElevationBands`] unless
    /// `hill < mountain < peak`; NaN never passes.
    pub fn new(hill: f64, mountain: f64, peak: f64) -> Result<Self, BiomeError> {
        if !(hill < mountain && mountain < peak) {
            return Err(BiomeError::InvalidElevationBands {
                hill,
                mountain,
                peak,
            });
        }
        Ok(Self {
            hill,
            mountain,
            peak,
        })
    }
}

impl WhittakerDiagram {
    /// Builds the classic polygon-map table over the given elevation bands.
    ///
    /// Values at or below 0 fall into the lowest band; values above 1 into
    /// the highest, so every finite input resolves to a region.
    pub fn with_bands(bands: ElevationBands) -> Self {
        use TerminalBiome::*;

        // (elevation_min, elevation_max, moisture_min, moisture_max, biome)
        let table = [
            (bands.peak, f64::INFINITY, 0.5, f64::INFINITY, Snow),
            (bands.peak, f64::INFINITY, 0.33, 0.5, Tundra),
            (bands.peak, f64::INFINITY, 0.16, 0.33, Bare),
            (bands.peak, f64::INFINITY, f64::NEG_INFINITY, 0.16, Scorched),
            (bands.mountain, bands.peak, 0.66, f64::INFINITY, Taiga),
            (bands.mountain, bands.peak, 0.33, 0.66, Shrubland),
            (bands.mountain, bands.peak, f64::NEG_INFINITY, 0.33, TemperateDesert),
            (bands.hill, bands.mountain, 0.83, f64::INFINITY, TemperateRainForest),
            (bands.hill, bands.mountain, 0.5, 0.83, TemperateDeciduousForest),
            (bands.hill, bands.mountain, 0.16, 0.5, Grassland),
            (bands.hill, bands.mountain, f64::NEG_INFINITY, 0.16, TemperateDesert),
            (f64::NEG_INFINITY, bands.hill, 0.66, f64::INFINITY, TropicalRainForest),
            (f64::NEG_INFINITY, bands.hill, 0.33, 0.66, TropicalSeasonalForest),
            (f64::NEG_INFINITY, bands.hill, 0.16, 0.33, Grassland),
        ];

        let regions = table
            .into_iter()
            .map(
                |(elevation_min, elevation_max, moisture_min, moisture_max, biome)| {
                    WhittakerRegion {
                        elevation_min,
                        elevation_max,
                        moisture_min,
                        moisture_max,
                        biome,
                    }
                },
            )
            .collect();

        Self {
            regions,
            fallback: SubtropicalDesert,
        }
    }

    /// Looks up the biome for a given elevation and moisture.
    pub fn lookup(&self, elevation: f64, moisture: f64) -> TerminalBiome {
        for region in &self.regions {
            if region.contains(elevation, moisture) {
                return region.biome;
            }
        }
        self.fallback
    }
}

impl Default for WhittakerDiagram {
    fn default() -> Self {
        Self::with_bands(ElevationBands::default())
    }
}

impl BiomeClassifier for WhittakerDiagram {
    fn classify(&self, elevation: f64, moisture: f64) -> TerminalBiome {
        self.lookup(elevation, moisture)
    }
}
