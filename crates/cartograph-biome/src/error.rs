//! Error types for graph construction, grid validation, and pipeline configuration.

use crate::graph::{Seed, VertexId};

/// Errors surfaced by the biome classification core.
///
/// None of these are recoverable mid-pipeline: a failing invocation leaves the
/// graph in whatever state the aborted pass reached, and the caller is expected
/// to discard or rebuild it.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BiomeError {
    /// A grid position is owned by a seed that has no vertex in the cell graph.
    #[error("no vertex for seed ({}, {})", .0.x, .0.y)]
    VertexNotFound(Seed),

    /// The moisture decay factor must lie strictly between 0 and 1.
    #[error("moisture decay factor {0} is outside (0, 1)")]
    InvalidDecayFactor(f64),

    /// The lake moisture cutoff must lie in `[0, 1]`.
    #[error("lake moisture cutoff {0} is outside [0, 1]")]
    InvalidLakeCutoff(f64),

    /// Elevation bands must satisfy `hill < mountain < peak`.
    #[error("elevation bands hill {hill}, mountain {mountain}, peak {peak} are not increasing")]
    InvalidElevationBands { hill: f64, mountain: f64, peak: f64 },

    /// A sampling grid was constructed with zero width or height.
    #[error("sampling grid has no cells")]
    EmptyGrid,

    /// A per-position array does not match the grid's `width * height`.
    #[error("{field} has {actual} entries, expected {expected}")]
    GridShapeMismatch {
        /// Which array was mis-sized.
        field: &'static str,
        /// `width * height`.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// A moisture sample lies outside `[0, 1]` (or is NaN).
    #[error("moisture sample {value} at ({x}, {y}) is outside [0, 1]")]
    MoistureOutOfRange {
        /// Grid column.
        x: u32,
        /// Grid row.
        y: u32,
        /// Offending sample.
        value: f64,
    },

    /// A seed's grid coordinates fall outside the sampling grid.
    #[error("seed ({}, {}) lies outside the {width}x{height} sampling grid", .seed.x, .seed.y)]
    SeedOutOfBounds {
        /// The seed that was looked up.
        seed: Seed,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },

    /// Two cells were registered for the same seed.
    #[error("seed ({}, {}) is already registered", .0.x, .0.y)]
    DuplicateSeed(Seed),

    /// An edge was requested from a vertex to itself.
    #[error("vertex {0:?} cannot border itself")]
    SelfLoop(VertexId),

    /// An edge references a vertex id the builder never issued.
    #[error("unknown vertex {0:?}")]
    UnknownVertex(VertexId),
}
