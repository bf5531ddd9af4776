//! Cell categories: the water/land split plus the terminal land biomes.

/// Final land biome assigned from elevation and moisture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TerminalBiome {
    Snow,
    Tundra,
    Bare,
    Scorched,
    Taiga,
    Shrubland,
    TemperateDesert,
    TemperateRainForest,
    TemperateDeciduousForest,
    Grassland,
    TropicalRainForest,
    TropicalSeasonalForest,
    SubtropicalDesert,
}

impl TerminalBiome {
    /// Every terminal biome, in declaration order.
    pub const ALL: [TerminalBiome; 13] = [
        Self::Snow,
        Self::Tundra,
        Self::Bare,
        Self::Scorched,
        Self::Taiga,
        Self::Shrubland,
        Self::TemperateDesert,
        Self::TemperateRainForest,
        Self::TemperateDeciduousForest,
        Self::Grassland,
        Self::TropicalRainForest,
        Self::TropicalSeasonalForest,
        Self::SubtropicalDesert,
    ];

    /// Snake-case name, stable across releases.
    pub fn name(self) -> &'static str {
        match self {
            Self::Snow => "snow",
            Self::Tundra => "tundra",
            Self::Bare => "bare",
            Self::Scorched => "scorched",
            Self::Taiga => "taiga",
            Self::Shrubland => "shrubland",
            Self::TemperateDesert => "temperate_desert",
            Self::TemperateRainForest => "temperate_rain_forest",
            Self::TemperateDeciduousForest => "temperate_deciduous_forest",
            Self::Grassland => "grassland",
            Self::TropicalRainForest => "tropical_rain_forest",
            Self::TropicalSeasonalForest => "tropical_seasonal_forest",
            Self::SubtropicalDesert => "subtropical_desert",
        }
    }
}

/// The single category every cell holds at any point in the pipeline.
///
/// `Land` is the unresolved land state between land placement and terminal
/// biome assignment; `Terrain` is its resolved form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Land awaiting a terminal biome.
    Land,
    /// Water connected to the world boundary.
    #[default]
    Ocean,
    /// Enclosed water, including lakes formed from moisture pockets.
    Lake,
    /// Land with its final biome.
    Terrain(TerminalBiome),
}

impl Category {
    /// `true` for `Ocean` and `Lake`.
    pub fn is_water(self) -> bool {
        matches!(self, Self::Ocean | Self::Lake)
    }

    /// `true` for `Land` and any `Terrain` biome.
    pub fn is_land(self) -> bool {
        !self.is_water()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Land => "land",
            Self::Ocean => "ocean",
            Self::Lake => "lake",
            Self::Terrain(biome) => biome.name(),
        }
    }
}
