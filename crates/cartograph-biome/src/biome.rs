//! Biome vocabulary and terminal biome lookup.
//!
//! Cells move through `Land`/`Ocean`/`Lake` during classification and land
//! cells finally resolve to a [`TerminalBiome`] through a [`BiomeClassifier`],
//! by default a Whittaker-style elevation/moisture diagram.

mod category;
mod diagram;

pub use category::{Category, TerminalBiome};
pub use diagram::{BiomeClassifier, ElevationBands, WhittakerDiagram, WhittakerRegion};
