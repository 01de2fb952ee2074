//! Gain vector genome
//!
//! The chromosome tuned by the optimizer: a fixed-length vector of the three
//! controller gains in time-constant parameterization, `(k_p, t_i, t_d)`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::bounds::GainBounds;

/// Number of tuned gains per vector
pub const NUM_GAINS: usize = 3;

/// Fixed-length gain vector `(k_p, t_i, t_d)`
///
/// The length is fixed by the type, so crossover and mutation can never
/// change a chromosome's dimension. Copies are cheap (`Copy`), which keeps
/// survivor carry-over and offspring construction free of aliasing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GainVector {
    genes: [f64; NUM_GAINS],
}

impl GainVector {
    /// Create a gain vector from explicit gains
    pub fn new(k_p: f64, t_i: f64, t_d: f64) -> Self {
        Self {
            genes: [k_p, t_i, t_d],
        }
    }

    /// Create a zero-filled gain vector
    pub fn zeros() -> Self {
        Self {
            genes: [0.0; NUM_GAINS],
        }
    }

    /// Generate a random gain vector, each gene uniform within its bounds
    pub fn generate<R: Rng>(rng: &mut R, bounds: &GainBounds) -> Self {
        let mut genes = [0.0; NUM_GAINS];
        for (gene, bound) in genes.iter_mut().zip(bounds.iter()) {
            *gene = bound.sample(rng);
        }
        Self { genes }
    }

    /// Proportional gain
    pub fn k_p(&self) -> f64 {
        self.genes[0]
    }

    /// Integral time constant
    pub fn t_i(&self) -> f64 {
        self.genes[1]
    }

    /// Derivative time constant
    pub fn t_d(&self) -> f64 {
        self.genes[2]
    }

    /// Get the genes as a slice
    pub fn genes(&self) -> &[f64; NUM_GAINS] {
        &self.genes
    }

    /// Get the genes as a mutable slice
    pub fn genes_mut(&mut self) -> &mut [f64; NUM_GAINS] {
        &mut self.genes
    }

    /// Clamp every gene back into its bounds
    pub fn apply_bounds(&mut self, bounds: &GainBounds) {
        bounds.clamp_genes(&mut self.genes);
    }

    /// Euclidean distance to another gain vector
    pub fn distance(&self, other: &Self) -> f64 {
        self.genes
            .iter()
            .zip(other.genes.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl From<[f64; NUM_GAINS]> for GainVector {
    fn from(genes: [f64; NUM_GAINS]) -> Self {
        Self { genes }
    }
}

impl From<GainVector> for [f64; NUM_GAINS] {
    fn from(genome: GainVector) -> Self {
        genome.genes
    }
}

impl std::ops::Index<usize> for GainVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.genes[index]
    }
}

impl std::ops::IndexMut<usize> for GainVector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.genes[index]
    }
}

impl std::fmt::Display for GainVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<{}, {}, {}>",
            self.genes[0], self.genes[1], self.genes[2]
        )
    }
}
