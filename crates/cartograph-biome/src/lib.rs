//! Biome classification over an irregular cell graph: ocean/lake separation,
//! beach detection, moisture redistribution, and terminal biome assignment.

mod error;
mod graph;
mod grid;

pub mod biome;
pub mod land;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod fixtures;

pub use biome::{
    BiomeClassifier, Category, ElevationBands, TerminalBiome, WhittakerDiagram, WhittakerRegion,
};
pub use error::BiomeError;
pub use graph::{CellGraph, CellGraphBuilder, CellView, Edge, Seed, VertexId};
pub use grid::SamplingGrid;
pub use land::{
    ElevationLand, GridFrame, LandPredicate, NoiseLand, NoiseLandParams, RadialLand,
    RadialParams, place_land,
};
pub use pipeline::{BiomePipeline, ClassificationReport, PipelineConfig};
