//! Bounds for gain values
//!
//! This module provides the bounds types constraining tuned controller gains.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::genome::gains::NUM_GAINS;

/// Inclusive bounds for a single gain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub lower: f64,
    /// Upper bound (inclusive)
    pub upper: f64,
}

impl Bounds {
    /// Create new bounds, rejecting an inverted interval
    pub fn new(lower: f64, upper: f64) -> Result<Self, ConfigError> {
        if lower > upper {
            return Err(ConfigError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Get the range (upper - lower)
    pub fn range(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Clamp a value to be within bounds
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    /// Draw a uniform random value within bounds
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.lower..=self.upper)
    }
}

/// Per-gene bounds for one gain vector, in parameter order `k_p, t_i, t_d`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GainBounds {
    bounds: [Bounds; NUM_GAINS],
}

impl GainBounds {
    /// Create bounds from one interval per tuned parameter
    pub fn new(k_p: Bounds, t_i: Bounds, t_d: Bounds) -> Self {
        Self {
            bounds: [k_p, t_i, t_d],
        }
    }

    /// Create uniform bounds for all three gains
    pub fn uniform(bound: Bounds) -> Self {
        Self {
            bounds: [bound; NUM_GAINS],
        }
    }

    /// Get bounds for a gene index
    pub fn get(&self, index: usize) -> &Bounds {
        &self.bounds[index]
    }

    /// Iterate over the per-gene bounds in parameter order
    pub fn iter(&self) -> impl Iterator<Item = &Bounds> {
        self.bounds.iter()
    }

    /// Clamp each gene of a gain array into its bounds
    pub fn clamp_genes(&self, genes: &mut [f64; NUM_GAINS]) {
        for (gene, bound) in genes.iter_mut().zip(self.bounds.iter()) {
            *gene = bound.clamp(*gene);
        }
    }

    /// Check that every gene lies within its bounds
    pub fn contains_genes(&self, genes: &[f64; NUM_GAINS]) -> bool {
        genes
            .iter()
            .zip(self.bounds.iter())
            .all(|(g, b)| b.contains(*g))
    }
}
