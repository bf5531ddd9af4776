//! Validated pipeline tuning.

use crate::error::BiomeError;

/// Moisture decay and lake cutoff, checked once at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipelineConfig {
    moisture_decay: f64,
    lake_moisture_cutoff: f64,
    saturate_oceans: bool,
}

impl PipelineConfig {
    pub const DEFAULT_MOISTURE_DECAY: f64 = 0.9;
    pub const DEFAULT_LAKE_MOISTURE_CUTOFF: f64 = 0.95;

    /// # Errors
    ///
    /// - [`BiomeError::InvalidDecayFactor`] unless `0 < moisture_decay < 1`.
    /// - [`BiomeError::InvalidLakeCutoff`] unless `0 <= lake_moisture_cutoff <= 1`.
    ///
    /// NaN fails both checks. Values are never clamped.
    pub fn new(moisture_decay: f64, lake_moisture_cutoff: f64) -> Result<Self, BiomeError> {
        if !(moisture_decay > 0.0 && moisture_decay < 1.0) {
            return Err(BiomeError::InvalidDecayFactor(moisture_decay));
        }
        if !(0.0..=1.0).contains(&lake_moisture_cutoff) {
            return Err(BiomeError::InvalidLakeCutoff(lake_moisture_cutoff));
        }
        Ok(Self {
            moisture_decay,
            lake_moisture_cutoff,
            saturate_oceans: false,
        })
    }

    /// Also seed moisture diffusion from ocean cells, not only lakes.
    pub fn with_ocean_saturation(mut self, saturate_oceans: bool) -> Self {
        self.saturate_oceans = saturate_oceans;
        self
    }

    /// Multiplicative attenuation per graph hop.
    pub fn moisture_decay(&self) -> f64 {
        self.moisture_decay
    }

    /// Sampled moisture above which a non-beach land cell becomes a lake.
    pub fn lake_moisture_cutoff(&self) -> f64 {
        self.lake_moisture_cutoff
    }

    pub fn saturate_oceans(&self) -> bool {
        self.saturate_oceans
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            moisture_decay: Self::DEFAULT_MOISTURE_DECAY,
            lake_moisture_cutoff: Self::DEFAULT_LAKE_MOISTURE_CUTOFF,
            saturate_oceans: false,
        }
    }
}
