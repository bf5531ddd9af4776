//! Perlin-threshold island: fBm noise compared against a radial falloff.

use noise::{NoiseFn, Perlin};

use super::{GridFrame, LandPredicate};
use crate::graph::CellView;

/// Tuning for [`NoiseLand`].
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseLandParams {
    /// Noise seed.
    pub seed: u32,
    /// Number of octaves composited.
    pub octaves: u32,
    /// Frequency of the first octave, in normalized grid units.
    pub base_frequency: f64,
    /// Amplitude multiplier between octaves.
    pub persistence: f64,
    /// Noise level (in `[0, 1]`) a cell at the centre must exceed.
    pub threshold: f64,
    /// Extra threshold added per unit of squared distance from the centre.
    pub falloff: f64,
}

impl Default for NoiseLandParams {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 4,
            base_frequency: 2.0,
            persistence: 0.5,
            threshold: 0.3,
            falloff: 0.3,
        }
    }
}

/// Land where normalized fBm Perlin noise beats `threshold + falloff * r^2`.
pub struct NoiseLand {
    noise: Perlin,
    frame: GridFrame,
    params: NoiseLandParams,
}

impl NoiseLand {
    pub fn new(frame: GridFrame, params: NoiseLandParams) -> Self {
        Self {
            noise: Perlin::new(params.seed),
            frame,
            params,
        }
    }

    /// Noise level at normalized coordinates, remapped to `[0, 1]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut norm = 0.0;
        let mut frequency = self.params.base_frequency;
        let mut amplitude = 1.0;

        for _ in 0..self.params.octaves {
            total += self.noise.get([x * frequency, y * frequency]) * amplitude;
            norm += amplitude;
            frequency *= 2.0;
            amplitude *= self.params.persistence;
        }

        if norm == 0.0 {
            return 0.5;
        }
        ((total / norm + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    pub fn params(&self) -> &NoiseLandParams {
        &self.params
    }
}

impl LandPredicate for NoiseLand {
    fn is_land(&self, cell: &CellView) -> bool {
        let (x, y) = self.frame.normalize(cell.seed);
        let r2 = x * x + y * y;
        self.sample(x, y) > self.params.threshold + self.params.falloff * r2
    }
}
