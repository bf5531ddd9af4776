//! Five-pass biome classification over a land-placed cell graph.
//!
//! Passes run strictly in order, each to completion:
//!
//! 1. [`separate_oceans`]: all water becomes lake, then corner-reachable water becomes ocean.
//! 2. [`detect_beaches`]: land bordering any water is flagged as beach.
//! 3. [`sample_moisture`]: land reads the moisture field; wet inland cells become lakes.
//! 4. [`diffuse_moisture`]: lakes saturate and moisture decays outward over land.
//! 5. [`assign_terminal_biomes`]: remaining land resolves to a [`TerminalBiome`].
//!
//! Beaches are computed before step 3, so lakes formed there never create new beaches.
//!
//! [`TerminalBiome`]: crate::biome::TerminalBiome

mod beach;
mod config;
mod moisture;
mod ocean;
mod terminal;

pub use beach::detect_beaches;
pub use config::PipelineConfig;
pub use moisture::{diffuse_moisture, sample_moisture};
pub use ocean::separate_oceans;
pub use terminal::assign_terminal_biomes;

use tracing::{info, info_span};

use crate::biome::{BiomeClassifier, Category, WhittakerDiagram};
use crate::error::BiomeError;
use crate::graph::CellGraph;
use crate::grid::SamplingGrid;

/// Cell counts after a pipeline run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassificationReport {
    pub ocean: usize,
    /// All lakes, including those formed from moisture.
    pub lake: usize,
    /// Lakes formed from moisture pockets.
    pub secondary_lakes: usize,
    pub beach: usize,
    /// Land cells given a terminal biome.
    pub terrain: usize,
    /// Improving moisture updates during diffusion.
    pub relaxations: usize,
}

/// Runs the classification passes with a fixed configuration and classifier.
pub struct BiomePipeline<C = WhittakerDiagram> {
    config: PipelineConfig,
    classifier: C,
}

impl BiomePipeline {
    /// Pipeline using the default Whittaker diagram.
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_classifier(config, WhittakerDiagram::default())
    }
}

impl<C: BiomeClassifier> BiomePipeline<C> {
    pub fn with_classifier(config: PipelineConfig, classifier: C) -> Self {
        Self { config, classifier }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Classifies every cell of `graph`.
    ///
    /// Starts from the land placement recorded on the graph, discarding the
    /// results of any earlier run, so repeated calls yield the same result.
    ///
    /// # Errors
    ///
    /// Fails on any grid/graph inconsistency; see [`BiomeError`]. The graph is
    /// left partially classified and should be discarded or re-run.
    pub fn run(
        &self,
        graph: &mut CellGraph,
        grid: &SamplingGrid,
    ) -> Result<ClassificationReport, BiomeError> {
        let span = info_span!("classify_biomes", cells = graph.len(), edges = graph.edge_count());
        let _guard = span.enter();

        graph.reset_classification();

        let ocean = separate_oceans(graph, grid)?;
        let beach = detect_beaches(graph, grid)?;
        let secondary_lakes = sample_moisture(graph, grid, &self.config)?;
        let relaxations = diffuse_moisture(graph, &self.config);
        let terrain = assign_terminal_biomes(graph, &self.classifier);

        let lake = graph
            .vertices()
            .filter(|&v| graph.category(v) == Category::Lake)
            .count();

        let report = ClassificationReport {
            ocean,
            lake,
            secondary_lakes,
            beach,
            terrain,
            relaxations,
        };
        info!(
            ocean,
            lake, secondary_lakes, beach, terrain, relaxations, "biome classification complete"
        );
        Ok(report)
    }
}
