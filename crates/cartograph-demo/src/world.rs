//! Raster world synthesis: a jittered seed lattice, nearest-seed pixel
//! ownership, and simplex-noise elevation and moisture fields.

use cartograph_biome::{BiomeError, CellGraph, CellGraphBuilder, GridFrame, SamplingGrid, Seed};
use noise::{NoiseFn, Simplex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Lattice blocks searched around a pixel's own block for its nearest seed.
/// A jittered seed can sit up to one block diagonal away, so two rings are exact.
const OWNER_SEARCH_RADIUS: i64 = 2;

/// Salt separating the moisture noise from the elevation noise.
const MOISTURE_SALT: u32 = 0x9e37_79b9;

#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("cell spacing must be at least 1 pixel")]
    ZeroSpacing,

    #[error(transparent)]
    Biome(#[from] BiomeError),
}

/// Size and seeding of a synthesized world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldParams {
    pub width: u32,
    pub height: u32,
    pub spacing: u32,
    pub seed: u64,
}

/// A cell graph together with the grid it was rasterized from.
pub struct RasterWorld {
    pub graph: CellGraph,
    pub grid: SamplingGrid,
}

/// One seed per `spacing x spacing` lattice block, row-major by block.
struct SeedLattice {
    cols: u32,
    rows: u32,
    spacing: u32,
    seeds: Vec<Seed>,
}

impl SeedLattice {
    fn jittered(params: &WorldParams) -> Self {
        let spacing = params.spacing;
        let cols = params.width.div_ceil(spacing);
        let rows = params.height.div_ceil(spacing);
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);

        let mut seeds = Vec::with_capacity((cols * rows) as usize);
        for by in 0..rows {
            for bx in 0..cols {
                let (x0, y0) = (bx * spacing, by * spacing);
                // Edge blocks are clipped to the grid.
                let block_w = spacing.min(params.width - x0);
                let block_h = spacing.min(params.height - y0);
                seeds.push(Seed::new(
                    x0 + rng.random_range(0..block_w),
                    y0 + rng.random_range(0..block_h),
                ));
            }
        }

        Self {
            cols,
            rows,
            spacing,
            seeds,
        }
    }

    /// Seed nearest to pixel `(x, y)`; ties go to the first block in row-major order.
    fn nearest(&self, x: u32, y: u32) -> Seed {
        let bx = (x / self.spacing) as i64;
        let by = (y / self.spacing) as i64;
        let mut best = self.seeds[(by as u32 * self.cols + bx as u32) as usize];
        let mut best_dist = squared_distance(best, x, y);

        for ny in (by - OWNER_SEARCH_RADIUS).max(0)..=(by + OWNER_SEARCH_RADIUS) {
            if ny >= self.rows as i64 {
                break;
            }
            for nx in (bx - OWNER_SEARCH_RADIUS).max(0)..=(bx + OWNER_SEARCH_RADIUS) {
                if nx >= self.cols as i64 {
                    break;
                }
                let candidate = self.seeds[(ny as u32 * self.cols + nx as u32) as usize];
                let dist = squared_distance(candidate, x, y);
                if dist < best_dist {
                    best = candidate;
                    best_dist = dist;
                }
            }
        }
        best
    }
}

fn squared_distance(seed: Seed, x: u32, y: u32) -> u64 {
    let dx = seed.x.abs_diff(x) as u64;
    let dy = seed.y.abs_diff(y) as u64;
    dx * dx + dy * dy
}

/// Two-octave simplex sample remapped to `[0, 1]`.
fn sample_unit(noise: &Simplex, x: f64, y: f64) -> f64 {
    let n = noise.get([x * 1.5, y * 1.5]) + 0.5 * noise.get([x * 3.0, y * 3.0]);
    ((n / 1.5 + 1.0) * 0.5).clamp(0.0, 1.0)
}

/// Builds the graph and grid for `params`.
///
/// Elevation falls to zero towards the grid corners so elevation-based land
/// placement produces an island.
///
/// # Errors
///
/// Returns [`WorldError::ZeroSpacing`] for a zero spacing, and propagates
/// [`BiomeError`] from grid validation (e.g. an empty grid).
pub fn generate(params: &WorldParams) -> Result<RasterWorld, WorldError> {
    if params.spacing == 0 {
        return Err(WorldError::ZeroSpacing);
    }
    if params.width == 0 || params.height == 0 {
        return Err(BiomeError::EmptyGrid.into());
    }

    let lattice = SeedLattice::jittered(params);
    let frame = GridFrame::new(params.width, params.height);
    let elevation_noise = Simplex::new(params.seed as u32);
    let moisture_noise = Simplex::new(params.seed as u32 ^ MOISTURE_SALT);

    let mut builder = CellGraphBuilder::new();
    for &seed in &lattice.seeds {
        let (nx, ny) = frame.normalize(seed);
        let shape = (1.0 - 0.5 * (nx * nx + ny * ny)).max(0.0);
        let elevation = sample_unit(&elevation_noise, nx, ny) * shape;
        builder.add_cell(seed, elevation)?;
    }

    let pixel_count = params.width as usize * params.height as usize;
    let mut owners = Vec::with_capacity(pixel_count);
    let mut moisture = Vec::with_capacity(pixel_count);
    for y in 0..params.height {
        for x in 0..params.width {
            owners.push(lattice.nearest(x, y));
            let (nx, ny) = frame.normalize(Seed::new(x, y));
            moisture.push(sample_unit(&moisture_noise, nx, ny));
        }
    }

    // Cells are adjacent where their regions touch horizontally or vertically.
    let width = params.width as usize;
    for y in 0..params.height as usize {
        for x in 0..width {
            let owner = owners[y * width + x];
            if x + 1 < width && owners[y * width + x + 1] != owner {
                builder.add_edge_between(owner, owners[y * width + x + 1])?;
            }
            if y + 1 < params.height as usize && owners[(y + 1) * width + x] != owner {
                builder.add_edge_between(owner, owners[(y + 1) * width + x])?;
            }
        }
    }

    let graph = builder.build();
    let grid = SamplingGrid::new(params.width, params.height, owners, moisture)?;
    debug!(
        cells = graph.len(),
        edges = graph.edge_count(),
        width = params.width,
        height = params.height,
        "synthesized raster world"
    );
    Ok(RasterWorld { graph, grid })
}
