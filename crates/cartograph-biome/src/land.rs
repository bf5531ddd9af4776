//! Land placement: pluggable land/water predicates and the pass that applies them.

mod perlin;
mod radial;

pub use perlin::{NoiseLand, NoiseLandParams};
pub use radial::{RadialLand, RadialParams};

use tracing::debug;

use crate::biome::Category;
use crate::graph::{CellGraph, CellView, Seed};

/// Decides whether a cell is land.
///
/// Must be pure and deterministic: later passes read land-ness back from the
/// stored category rather than re-querying the predicate.
pub trait LandPredicate {
    fn is_land(&self, cell: &CellView) -> bool;
}

impl<F> LandPredicate for F
where
    F: Fn(&CellView) -> bool,
{
    fn is_land(&self, cell: &CellView) -> bool {
        self(cell)
    }
}

/// Land wherever the precomputed elevation rises above sea level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationLand {
    pub sea_level: f64,
}

impl LandPredicate for ElevationLand {
    fn is_land(&self, cell: &CellView) -> bool {
        cell.elevation > self.sea_level
    }
}

/// Maps seed grid coordinates into `[-1, 1]` on both axes, centre at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridFrame {
    pub width: u32,
    pub height: u32,
}

impl GridFrame {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel-centre normalization, so a 1-wide grid maps to 0.
    pub fn normalize(&self, seed: Seed) -> (f64, f64) {
        let nx = (seed.x as f64 + 0.5) / self.width.max(1) as f64 * 2.0 - 1.0;
        let ny = (seed.y as f64 + 0.5) / self.height.max(1) as f64 * 2.0 - 1.0;
        (nx, ny)
    }
}

/// Marks every cell the predicate accepts as land.
///
/// The land flag is fixed for every later pass. Calling this again starts
/// the world over: the new predicate fully replaces the old land mask, so
/// cells it rejects revert to water, and any classification on the graph
/// is stale until the pipeline runs again. Returns the number of land cells.
pub fn place_land<P>(graph: &mut CellGraph, predicate: &P) -> usize
where
    P: LandPredicate + ?Sized,
{
    let mut land_count = 0;
    for v in graph.vertices() {
        let land = predicate.is_land(&graph.cell(v));
        graph.set_land(v, land);
        if land {
            graph.set_category(v, Category::Land);
            land_count += 1;
        } else if graph.category(v).is_land() {
            graph.set_category(v, Category::default());
        }
    }
    debug!(land = land_count, total = graph.len(), "placed land");
    land_count
}
