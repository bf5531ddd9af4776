//! Moisture sampling, secondary lake formation, and decay-weighted diffusion.

use std::collections::VecDeque;

use tracing::debug;

use super::PipelineConfig;
use crate::biome::Category;
use crate::error::BiomeError;
use crate::graph::CellGraph;
use crate::grid::SamplingGrid;

/// Stores each land cell's moisture sample and turns wet non-beach land into lake.
///
/// A cell becomes a lake when its sample is strictly above the configured
/// lake moisture cutoff. Returns the number of lakes formed.
///
/// # Errors
///
/// Returns [`BiomeError::SeedOutOfBounds`] if a land seed lies off the grid.
pub fn sample_moisture(
    graph: &mut CellGraph,
    grid: &SamplingGrid,
    config: &PipelineConfig,
) -> Result<usize, BiomeError> {
    let lake_cutoff = config.lake_moisture_cutoff();
    let mut formed = 0;
    for v in graph.vertices() {
        if graph.category(v) != Category::Land {
            continue;
        }
        let moisture = grid.moisture_at(graph.seed(v))?;
        graph.set_moisture(v, moisture);
        if !graph.is_beach(v) && moisture > lake_cutoff {
            graph.set_category(v, Category::Lake);
            formed += 1;
        }
    }
    debug!(formed, lake_cutoff, "sampled moisture");
    Ok(formed)
}

/// Saturates every lake (and every ocean, if the config enables ocean
/// saturation) to moisture 1 and relaxes moisture outward into `Land` cells,
/// multiplying by the configured decay per hop.
///
/// A cell is re-queued each time it strictly improves, so the queue may hold
/// duplicates; decay is below 1, so each improvement is bounded and the loop
/// terminates. Existing moisture higher than the diffused value is kept, and
/// such a cell does not relay moisture further.
/// Returns the number of improving updates; a converged graph yields 0.
pub fn diffuse_moisture(graph: &mut CellGraph, config: &PipelineConfig) -> usize {
    let decay = config.moisture_decay();
    let saturate_oceans = config.saturate_oceans();

    let mut frontier: VecDeque<_> = graph
        .vertices()
        .filter(|&v| match graph.category(v) {
            Category::Lake => true,
            Category::Ocean => saturate_oceans,
            _ => false,
        })
        .collect();
    for &v in &frontier {
        graph.set_moisture(v, 1.0);
    }
    let sources = frontier.len();

    let mut updates = 0;
    let mut neighbors = Vec::new();
    while let Some(current) = frontier.pop_front() {
        let candidate = graph.moisture(current) * decay;
        neighbors.clear();
        neighbors.extend(graph.neighbors(current));
        for &next in &neighbors {
            if graph.category(next) != Category::Land || candidate <= graph.moisture(next) {
                continue;
            }
            graph.set_moisture(next, candidate);
            frontier.push_back(next);
            updates += 1;
        }
    }

    graph.reset_visited();
    debug!(sources, updates, decay, "diffused moisture");
    updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{at, chain, world};
    use crate::graph::{CellView, VertexId};
    use crate::land::place_land;
    use crate::pipeline::{detect_beaches, separate_oceans};

    const EPSILON: f64 = 1e-12;

    fn tuning(decay: f64, cutoff: f64) -> PipelineConfig {
        PipelineConfig::new(decay, cutoff).unwrap()
    }

    #[test]
    fn test_chain_halves_per_hop() {
        let mut graph = chain(4);
        place_land(&mut graph, &|cell: &CellView| cell.seed.x > 0);
        graph.set_category(VertexId(0), Category::Lake);

        diffuse_moisture(&mut graph, &tuning(0.5, 0.95));

        let expected = [1.0, 0.5, 0.25, 0.125];
        for (i, want) in expected.iter().enumerate() {
            let got = graph.moisture(VertexId(i as u32));
            assert!((got - want).abs() < EPSILON, "cell {i}: {got} != {want}");
        }
    }

    #[test]
    fn test_nearest_lake_wins() {
        // lake - land - land - land - lake
        let mut graph = chain(5);
        place_land(&mut graph, &|cell: &CellView| {
            (1..4).contains(&cell.seed.x)
        });
        graph.set_category(VertexId(0), Category::Lake);
        graph.set_category(VertexId(4), Category::Lake);

        let updates = diffuse_moisture(&mut graph, &tuning(0.5, 0.95));

        assert!((graph.moisture(VertexId(1)) - 0.5).abs() < EPSILON);
        assert!((graph.moisture(VertexId(2)) - 0.25).abs() < EPSILON);
        assert!((graph.moisture(VertexId(3)) - 0.5).abs() < EPSILON);
        assert!(updates >= 3);
    }

    #[test]
    fn test_wetter_sample_is_kept() {
        let mut graph = chain(3);
        place_land(&mut graph, &|cell: &CellView| cell.seed.x > 0);
        graph.set_category(VertexId(0), Category::Lake);
        graph.set_moisture(VertexId(2), 0.8);

        diffuse_moisture(&mut graph, &tuning(0.5, 0.95));

        assert!((graph.moisture(VertexId(1)) - 0.5).abs() < EPSILON);
        assert!((graph.moisture(VertexId(2)) - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_ocean_is_not_a_source_by_default() {
        let (mut graph, grid) = world(&["...", ".#.", "..."]);
        separate_oceans(&mut graph, &grid).unwrap();
        detect_beaches(&mut graph, &grid).unwrap();
        sample_moisture(&mut graph, &grid, &tuning(0.9, 0.95)).unwrap();

        let updates = diffuse_moisture(&mut graph, &tuning(0.6, 0.95));

        assert_eq!(updates, 0);
        assert_eq!(graph.assigned_moisture(at(&graph, 1, 1)), Some(0.0));
    }

    #[test]
    fn test_ocean_saturation_reaches_island() {
        let (mut graph, grid) = world(&["...", ".#.", "..."]);
        separate_oceans(&mut graph, &grid).unwrap();
        detect_beaches(&mut graph, &grid).unwrap();
        sample_moisture(&mut graph, &grid, &tuning(0.9, 0.95)).unwrap();

        diffuse_moisture(&mut graph, &tuning(0.6, 0.95).with_ocean_saturation(true));

        let centre = at(&graph, 1, 1);
        assert!(graph.is_beach(centre));
        assert!((graph.moisture(centre) - 0.6).abs() < EPSILON);
        assert!((graph.moisture(at(&graph, 0, 0)) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_wet_inland_cell_becomes_lake() {
        let (mut graph, grid) = world(&[".....", ".###.", ".#w#.", ".###.", "....."]);
        separate_oceans(&mut graph, &grid).unwrap();
        detect_beaches(&mut graph, &grid).unwrap();

        let formed = sample_moisture(&mut graph, &grid, &tuning(0.9, 0.8)).unwrap();
        assert_eq!(formed, 1);
        let centre = at(&graph, 2, 2);
        assert_eq!(graph.category(centre), Category::Lake);
        assert!(!graph.is_beach(centre));

        diffuse_moisture(&mut graph, &tuning(0.5, 0.95));
        assert!((graph.moisture(centre) - 1.0).abs() < EPSILON);
        assert!((graph.moisture(at(&graph, 2, 1)) - 0.5).abs() < EPSILON);
        assert!((graph.moisture(at(&graph, 1, 1)) - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_wet_beach_stays_land() {
        let (mut graph, grid) = world(&["...", ".w.", "..."]);
        separate_oceans(&mut graph, &grid).unwrap();
        detect_beaches(&mut graph, &grid).unwrap();

        let formed = sample_moisture(&mut graph, &grid, &tuning(0.9, 0.8)).unwrap();

        assert_eq!(formed, 0);
        let centre = at(&graph, 1, 1);
        assert_eq!(graph.category(centre), Category::Land);
        assert!((graph.moisture(centre) - 0.9).abs() < EPSILON);
    }

    #[test]
    fn test_sample_at_cutoff_is_not_lake() {
        let (mut graph, grid) = world(&[".....", ".###.", ".#w#.", ".###.", "....."]);
        separate_oceans(&mut graph, &grid).unwrap();
        detect_beaches(&mut graph, &grid).unwrap();
        assert_eq!(sample_moisture(&mut graph, &grid, &tuning(0.9, 0.9)).unwrap(), 0);
    }

    #[test]
    fn test_unreached_land_keeps_sample() {
        let (mut graph, grid) = world(&["....", ".##.", "...."]);
        separate_oceans(&mut graph, &grid).unwrap();
        detect_beaches(&mut graph, &grid).unwrap();
        sample_moisture(&mut graph, &grid, &tuning(0.9, 0.95)).unwrap();
        diffuse_moisture(&mut graph, &tuning(0.9, 0.95));
        for v in graph.vertices() {
            if graph.category(v) == Category::Land {
                assert_eq!(graph.assigned_moisture(v), Some(0.0));
            }
        }
    }

    #[test]
    fn test_unimproved_cell_does_not_relay() {
        // lake - wet land - dry land: the wet cell beats 0.5 and is never queued.
        let mut graph = chain(3);
        place_land(&mut graph, &|cell: &CellView| cell.seed.x > 0);
        graph.set_category(VertexId(0), Category::Lake);
        graph.set_moisture(VertexId(1), 0.9);
        graph.set_moisture(VertexId(2), 0.1);

        let updates = diffuse_moisture(&mut graph, &tuning(0.5, 0.95));

        assert_eq!(updates, 0);
        assert!((graph.moisture(VertexId(1)) - 0.9).abs() < EPSILON);
        assert!((graph.moisture(VertexId(2)) - 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_converged_graph_has_no_updates() {
        let (mut graph, grid) = world(&[".......", ".#####.", ".##w##.", ".#####.", "......."]);
        let config = tuning(0.7, 0.8);
        separate_oceans(&mut graph, &grid).unwrap();
        detect_beaches(&mut graph, &grid).unwrap();
        sample_moisture(&mut graph, &grid, &config).unwrap();

        assert!(diffuse_moisture(&mut graph, &config) > 0);
        assert_eq!(diffuse_moisture(&mut graph, &config), 0);
    }

    #[test]
    fn test_diffused_moisture_stays_in_unit_range() {
        let mut graph = chain(6);
        place_land(&mut graph, &|cell: &CellView| cell.seed.x > 0);
        graph.set_category(VertexId(0), Category::Lake);

        // The passes only accept validated tuning.
        assert!(PipelineConfig::new(1.5, 0.5).is_err());
        assert!(PipelineConfig::new(0.5, -3.0).is_err());
        assert!(PipelineConfig::new(0.5, f64::NAN).is_err());

        diffuse_moisture(&mut graph, &tuning(0.99, 0.5));
        for v in graph.vertices() {
            assert!((0.0..=1.0).contains(&graph.moisture(v)), "{v:?} out of range");
        }
    }
}
