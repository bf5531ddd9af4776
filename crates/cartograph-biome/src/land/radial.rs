//! Radial island shape: overlapping sine ripples around the grid centre.

use std::f64::consts::{PI, TAU};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{GridFrame, LandPredicate};
use crate::graph::CellView;

/// Gap between the inner island and the outer ring, as a multiple of the inner radius.
const ISLAND_FACTOR: f64 = 1.07;

/// Shape parameters for [`RadialLand`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialParams {
    /// Number of lobes around the coastline, in `1..=5`.
    pub bumps: u32,
    /// Phase of the lobe pattern, radians.
    pub start_angle: f64,
    /// Direction of the bay cut into the island, radians in `[-PI, PI)`.
    pub dip_angle: f64,
    /// Angular half-width of the bay, radians.
    pub dip_width: f64,
}

impl RadialParams {
    /// Draws a shape deterministically from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self {
            bumps: rng.random_range(1..6),
            start_angle: rng.random_range(0.0..TAU),
            dip_angle: rng.random_range(-PI..PI),
            dip_width: rng.random_range(0.2..0.7),
        }
    }
}

/// Island made of an inner lobed disc plus an outer lobed ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialLand {
    frame: GridFrame,
    params: RadialParams,
}

impl RadialLand {
    pub fn new(frame: GridFrame, params: RadialParams) -> Self {
        Self { frame, params }
    }

    pub fn from_seed(frame: GridFrame, seed: u64) -> Self {
        Self::new(frame, RadialParams::from_seed(seed))
    }

    pub fn params(&self) -> &RadialParams {
        &self.params
    }

    fn in_dip(&self, angle: f64) -> bool {
        let delta = angle - self.params.dip_angle;
        [delta, delta + TAU, delta - TAU]
            .iter()
            .any(|d| d.abs() < self.params.dip_width)
    }
}

impl LandPredicate for RadialLand {
    fn is_land(&self, cell: &CellView) -> bool {
        let (x, y) = self.frame.normalize(cell.seed);
        let angle = y.atan2(x);
        // Blend of Chebyshev and Euclidean distance squares off the coastline slightly.
        let length = 0.5 * (x.abs().max(y.abs()) + x.hypot(y));

        let bumps = self.params.bumps as f64;
        let phase = self.params.start_angle + bumps * angle;
        let (mut r1, mut r2) = (
            0.5 + 0.40 * (phase + ((bumps + 3.0) * angle).cos()).sin(),
            0.7 - 0.20 * (phase - ((bumps + 2.0) * angle).sin()).sin(),
        );
        if self.in_dip(angle) {
            r1 = 0.2;
            r2 = 0.2;
        }

        length < r1 || (length > r1 * ISLAND_FACTOR && length < r2)
    }
}
