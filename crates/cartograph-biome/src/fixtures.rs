//! Small hand-built worlds shared by unit tests.

use crate::graph::{CellGraph, CellGraphBuilder, CellView, Seed, VertexId};
use crate::grid::SamplingGrid;
use crate::land::place_land;

/// `n` cells in a row, seeds `(i, 0)`, elevation `i / n`.
pub fn chain(n: u32) -> CellGraph {
    let mut builder = CellGraphBuilder::new();
    let ids: Vec<_> = (0..n)
        .map(|i| builder.add_cell(Seed::new(i, 0), i as f64 / n as f64).unwrap())
        .collect();
    for pair in ids.windows(2) {
        builder.add_edge(pair[0], pair[1]).unwrap();
    }
    builder.build()
}

/// One cell per character, 4-neighbour adjacency, land already placed.
///
/// `.` is water, `#` is dry land (moisture 0), `w` is wet land (moisture 0.9).
/// Every cell has elevation 0.5.
pub fn world(rows: &[&str]) -> (CellGraph, SamplingGrid) {
    let height = rows.len() as u32;
    let width = rows[0].len() as u32;

    let mut builder = CellGraphBuilder::new();
    let mut owners = Vec::new();
    let mut moisture = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len() as u32, width, "ragged fixture row {y}");
        for (x, ch) in row.chars().enumerate() {
            let seed = Seed::new(x as u32, y as u32);
            builder.add_cell(seed, 0.5).unwrap();
            owners.push(seed);
            moisture.push(if ch == 'w' { 0.9 } else { 0.0 });
        }
    }
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                builder
                    .add_edge_between(Seed::new(x, y), Seed::new(x + 1, y))
                    .unwrap();
            }
            if y + 1 < height {
                builder
                    .add_edge_between(Seed::new(x, y), Seed::new(x, y + 1))
                    .unwrap();
            }
        }
    }

    let mut graph = builder.build();
    let grid = SamplingGrid::new(width, height, owners, moisture).unwrap();
    let land = |cell: &CellView| {
        rows[cell.seed.y as usize].as_bytes()[cell.seed.x as usize] != b'.'
    };
    place_land(&mut graph, &land);
    (graph, grid)
}

/// Vertex owning the cell at `(x, y)` of a [`world`] fixture.
pub fn at(graph: &CellGraph, x: u32, y: u32) -> VertexId {
    graph.vertex_for(Seed::new(x, y)).unwrap()
}
