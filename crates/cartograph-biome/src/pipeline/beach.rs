//! Beach detection: breadth-first sweep over water, flagging the first ring of land.

use std::collections::VecDeque;

use tracing::debug;

use super::ocean::corner_frontier;
use crate::error::BiomeError;
use crate::graph::{CellGraph, VertexId};
use crate::grid::SamplingGrid;

/// Drains `queue`, expanding through water and flagging land neighbours as
/// beach without expanding through them. Returns the number of new beaches.
fn sweep(graph: &mut CellGraph, queue: &mut VecDeque<VertexId>) -> usize {
    let mut beaches = 0;
    let mut neighbors = Vec::new();
    while let Some(current) = queue.pop_front() {
        neighbors.clear();
        neighbors.extend(graph.neighbors(current));
        for &next in &neighbors {
            if !graph.visit(next) {
                continue;
            }
            if graph.category(next).is_land() {
                graph.set_beach(next, true);
                beaches += 1;
            } else {
                queue.push_back(next);
            }
        }
    }
    beaches
}

/// Flags every land cell bordering ocean or lake as beach.
///
/// The sweep starts from the grid corners; water bodies it cannot reach
/// (lakes walled in by land) are swept afterwards from their first unvisited
/// cell, sharing the same visited state. Every vertex is visited at most once.
/// Visited flags are cleared on return. Returns the number of beach cells.
///
/// # Errors
///
/// Returns [`BiomeError::VertexNotFound`] if a corner's owner has no vertex.
pub fn detect_beaches(graph: &mut CellGraph, grid: &SamplingGrid) -> Result<usize, BiomeError> {
    let mut queue = VecDeque::with_capacity(graph.len());
    for v in corner_frontier(graph, grid)? {
        graph.visit(v);
        queue.push_back(v);
    }
    let mut beaches = sweep(graph, &mut queue);
    let from_corners = beaches;

    for v in graph.vertices() {
        if graph.category(v).is_water() && graph.visit(v) {
            queue.push_back(v);
            beaches += sweep(graph, &mut queue);
        }
    }

    graph.reset_visited();
    debug!(
        beaches,
        enclosed = beaches - from_corners,
        "detected beaches"
    );
    Ok(beaches)
}
