//! Discrete sampling grid: per-pixel owning seed and moisture samples.
//!
//! The grid and the cell graph share no coordinates beyond the owner lookup;
//! a pixel's owner is resolved to a vertex through [`CellGraph::vertex_for`].
//!
//! [`CellGraph::vertex_for`]: crate::graph::CellGraph::vertex_for

use crate::error::BiomeError;
use crate::graph::Seed;

/// Row-major `width x height` raster of owning seeds and moisture samples.
#[derive(Clone, Debug)]
pub struct SamplingGrid {
    width: u32,
    height: u32,
    owners: Vec<Seed>,
    moisture: Vec<f64>,
}

impl SamplingGrid {
    /// Validates and wraps the two rasters.
    ///
    /// # Errors
    ///
    /// - [`BiomeError::EmptyGrid`] if either dimension is zero.
    /// - [`BiomeError::GridShapeMismatch`] if a raster is not `width * height` long.
    /// - [`BiomeError::MoistureOutOfRange`] for samples outside `[0, 1]` or NaN.
    pub fn new(
        width: u32,
        height: u32,
        owners: Vec<Seed>,
        moisture: Vec<f64>,
    ) -> Result<Self, BiomeError> {
        if width == 0 || height == 0 {
            return Err(BiomeError::EmptyGrid);
        }
        let expected = width as usize * height as usize;
        if owners.len() != expected {
            return Err(BiomeError::GridShapeMismatch {
                field: "owners",
                expected,
                actual: owners.len(),
            });
        }
        if moisture.len() != expected {
            return Err(BiomeError::GridShapeMismatch {
                field: "moisture",
                expected,
                actual: moisture.len(),
            });
        }
        if let Some(i) = moisture.iter().position(|m| !(0.0..=1.0).contains(m)) {
            return Err(BiomeError::MoistureOutOfRange {
                x: (i % width as usize) as u32,
                y: (i / width as usize) as u32,
                value: moisture[i],
            });
        }

        Ok(Self {
            width,
            height,
            owners,
            moisture,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    /// Seed owning the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn owner(&self, x: u32, y: u32) -> Seed {
        self.owners[self.index(x, y)]
    }

    /// Moisture sample at `(x, y)`, in `[0, 1]`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn moisture(&self, x: u32, y: u32) -> f64 {
        self.moisture[self.index(x, y)]
    }

    /// Moisture sample at a seed's own coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::SeedOutOfBounds`] if the seed lies off-grid.
    pub fn moisture_at(&self, seed: Seed) -> Result<f64, BiomeError> {
        if seed.x >= self.width || seed.y >= self.height {
            return Err(BiomeError::SeedOutOfBounds {
                seed,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.moisture(seed.x, seed.y))
    }

    /// Owners of the four corner pixels: top-left, top-right, bottom-right,
    /// bottom-left. Small grids repeat owners.
    pub fn corners(&self) -> [Seed; 4] {
        let (x1, y1) = (self.width - 1, self.height - 1);
        [
            self.owner(0, 0),
            self.owner(x1, 0),
            self.owner(x1, y1),
            self.owner(0, y1),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_owners(width: u32, height: u32) -> Vec<Seed> {
        (0..height)
            .flat_map(|y| (0..width).map(move |x| Seed::new(x, y)))
            .collect()
    }

    #[test]
    fn test_empty_grid_rejected() {
        let result = SamplingGrid::new(0, 3, Vec::new(), Vec::new());
        assert_eq!(result.unwrap_err(), BiomeError::EmptyGrid);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let result = SamplingGrid::new(2, 2, identity_owners(2, 2), vec![0.0; 3]);
        assert_eq!(
            result.unwrap_err(),
            BiomeError::GridShapeMismatch {
                field: "moisture",
                expected: 4,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_moisture_out_of_range_rejected() {
        let mut moisture = vec![0.5; 6];
        moisture[4] = 1.5;
        let result = SamplingGrid::new(3, 2, identity_owners(3, 2), moisture);
        assert_eq!(
            result.unwrap_err(),
            BiomeError::MoistureOutOfRange {
                x: 1,
                y: 1,
                value: 1.5
            }
        );
    }

    #[test]
    fn test_nan_moisture_rejected() {
        let mut moisture = vec![0.5; 4];
        moisture[0] = f64::NAN;
        let result = SamplingGrid::new(2, 2, identity_owners(2, 2), moisture);
        assert!(matches!(
            result,
            Err(BiomeError::MoistureOutOfRange { x: 0, y: 0, .. })
        ));
    }

    #[test]
    fn test_row_major_lookup() {
        let moisture: Vec<f64> = (0..6).map(|i| i as f64 / 10.0).collect();
        let grid = SamplingGrid::new(3, 2, identity_owners(3, 2), moisture).unwrap();
        assert_eq!(grid.owner(2, 1), Seed::new(2, 1));
        assert!((grid.moisture(2, 1) - 0.5).abs() < 1e-12);
        assert!((grid.moisture_at(Seed::new(1, 0)).unwrap() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_moisture_at_off_grid() {
        let grid = SamplingGrid::new(2, 2, identity_owners(2, 2), vec![0.0; 4]).unwrap();
        assert_eq!(
            grid.moisture_at(Seed::new(2, 0)),
            Err(BiomeError::SeedOutOfBounds {
                seed: Seed::new(2, 0),
                width: 2,
                height: 2,
            })
        );
    }

    #[test]
    fn test_corners_order() {
        let grid = SamplingGrid::new(4, 3, identity_owners(4, 3), vec![0.0; 12]).unwrap();
        assert_eq!(
            grid.corners(),
            [
                Seed::new(0, 0),
                Seed::new(3, 0),
                Seed::new(3, 2),
                Seed::new(0, 2),
            ]
        );
    }

    #[test]
    fn test_single_pixel_corners_repeat() {
        let grid = SamplingGrid::new(1, 1, vec![Seed::new(0, 0)], vec![0.2]).unwrap();
        assert!(grid.corners().iter().all(|&s| s == Seed::new(0, 0)));
    }
}
