//! Ocean/lake separation: flood fill from the grid corners through water.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::biome::Category;
use crate::error::BiomeError;
use crate::graph::{CellGraph, VertexId};
use crate::grid::SamplingGrid;

/// Resolves the four grid corners to distinct water vertices.
///
/// Corners owned by land cells are dropped with a warning; the flood fills
/// then start from the remaining corners only.
pub(crate) fn corner_frontier(
    graph: &CellGraph,
    grid: &SamplingGrid,
) -> Result<Vec<VertexId>, BiomeError> {
    let mut frontier = Vec::with_capacity(4);
    for seed in grid.corners() {
        let v = graph.vertex_for(seed)?;
        if frontier.contains(&v) {
            continue;
        }
        if graph.category(v).is_land() {
            warn!(x = seed.x, y = seed.y, "grid corner is land, skipping as ocean seed");
            continue;
        }
        frontier.push(v);
    }
    Ok(frontier)
}

/// Marks all water as lake, then converts water reachable from a grid corner
/// to ocean. Land cells are untouched. Returns the number of ocean cells.
///
/// # Errors
///
/// Returns [`BiomeError::VertexNotFound`] if a corner's owner has no vertex.
pub fn separate_oceans(graph: &mut CellGraph, grid: &SamplingGrid) -> Result<usize, BiomeError> {
    let frontier = corner_frontier(graph, grid)?;

    for v in graph.vertices() {
        if !graph.category(v).is_land() {
            graph.set_category(v, Category::Lake);
        }
    }

    let mut ocean = 0;
    let mut queue = VecDeque::with_capacity(graph.len());
    for v in frontier {
        graph.set_category(v, Category::Ocean);
        ocean += 1;
        queue.push_back(v);
    }

    let mut neighbors = Vec::new();
    while let Some(current) = queue.pop_front() {
        neighbors.clear();
        neighbors.extend(graph.neighbors(current));
        for &next in &neighbors {
            if graph.category(next) != Category::Lake {
                continue;
            }
            graph.set_category(next, Category::Ocean);
            ocean += 1;
            queue.push_back(next);
        }
    }

    graph.reset_visited();
    debug!(ocean, "separated oceans from lakes");
    Ok(ocean)
}
