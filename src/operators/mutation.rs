//! Mutation operators
//!
//! This module provides mutation operators for gain vectors. Every operator
//! carries the gain bounds it was constructed with, so mutated genomes never
//! leave the search space.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::genome::bounds::GainBounds;
use crate::genome::gains::GainVector;
use crate::operators::traits::MutationOperator;

/// Uniform reset mutation
///
/// Each gene is independently re-randomized within its bounds with the
/// configured per-gene probability.
#[derive(Clone, Debug)]
pub struct UniformMutation {
    bounds: GainBounds,
    mutation_probability: f64,
}

impl UniformMutation {
    /// Create a new uniform mutation over the given bounds
    pub fn new(bounds: GainBounds, mutation_probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&mutation_probability),
            "Probability must be in [0, 1]"
        );
        Self {
            bounds,
            mutation_probability,
        }
    }
}

impl MutationOperator for UniformMutation {
    fn mutate<R: Rng>(&self, genome: &mut GainVector, rng: &mut R) {
        for (i, gene) in genome.genes_mut().iter_mut().enumerate() {
            if rng.gen::<f64>() < self.mutation_probability {
                *gene = self.bounds.get(i).sample(rng);
            }
        }
    }

    fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }
}

/// Gaussian mutation
///
/// Adds zero-mean Gaussian noise to each selected gene and clamps the result
/// back into bounds.
#[derive(Clone, Debug)]
pub struct GaussianMutation {
    bounds: GainBounds,
    /// Standard deviation of the noise
    pub sigma: f64,
    mutation_probability: f64,
}

impl GaussianMutation {
    /// Create a new Gaussian mutation over the given bounds
    pub fn new(bounds: GainBounds, sigma: f64, mutation_probability: f64) -> Self {
        assert!(sigma >= 0.0, "Sigma must be non-negative");
        assert!(
            (0.0..=1.0).contains(&mutation_probability),
            "Probability must be in [0, 1]"
        );
        Self {
            bounds,
            sigma,
            mutation_probability,
        }
    }
}

impl MutationOperator for GaussianMutation {
    fn mutate<R: Rng>(&self, genome: &mut GainVector, rng: &mut R) {
        // sigma >= 0 is checked at construction, so this cannot fail
        let normal = match Normal::new(0.0, self.sigma) {
            Ok(normal) => normal,
            Err(_) => return,
        };

        for (i, gene) in genome.genes_mut().iter_mut().enumerate() {
            if rng.gen::<f64>() < self.mutation_probability {
                *gene = self.bounds.get(i).clamp(*gene + normal.sample(rng));
            }
        }
    }

    fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }
}

/// Creep mutation
///
/// Nudges each selected gene by a small uniform step in `[0, step]` and
/// clamps the result back into bounds.
#[derive(Clone, Debug)]
pub struct CreepMutation {
    bounds: GainBounds,
    /// Maximum magnitude of one perturbation
    pub step: f64,
    mutation_probability: f64,
}

impl CreepMutation {
    /// Default creep step size
    pub const DEFAULT_STEP: f64 = 0.01;

    /// Create a new creep mutation over the given bounds
    pub fn new(bounds: GainBounds, step: f64, mutation_probability: f64) -> Self {
        assert!(step > 0.0, "Step must be positive");
        assert!(
            (0.0..=1.0).contains(&mutation_probability),
            "Probability must be in [0, 1]"
        );
        Self {
            bounds,
            step,
            mutation_probability,
        }
    }
}

impl MutationOperator for CreepMutation {
    fn mutate<R: Rng>(&self, genome: &mut GainVector, rng: &mut R) {
        for (i, gene) in genome.genes_mut().iter_mut().enumerate() {
            if rng.gen::<f64>() < self.mutation_probability {
                let delta = rng.gen_range(0.0..=self.step);
                *gene = self.bounds.get(i).clamp(*gene + delta);
            }
        }
    }

    fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }
}
