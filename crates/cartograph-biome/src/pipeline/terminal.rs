//! Terminal biome assignment for unresolved land.

use tracing::debug;

use crate::biome::{BiomeClassifier, Category};
use crate::graph::CellGraph;

/// Replaces every `Land` category with the classifier's biome for the cell's
/// elevation and moisture. Water and beach flags are left as they are.
/// Returns the number of cells resolved.
pub fn assign_terminal_biomes<C>(graph: &mut CellGraph, classifier: &C) -> usize
where
    C: BiomeClassifier + ?Sized,
{
    let mut resolved = 0;
    for v in graph.vertices() {
        if graph.category(v) != Category::Land {
            continue;
        }
        let biome = classifier.classify(graph.elevation(v), graph.moisture(v));
        graph.set_category(v, Category::Terrain(biome));
        resolved += 1;
    }
    debug!(resolved, "assigned terminal biomes");
    resolved
}
