//! Crossover operators
//!
//! This module provides crossover operators for gain vectors.

use rand::Rng;

use crate::genome::gains::GainVector;
use crate::operators::traits::CrossoverOperator;

/// Whole arithmetic crossover
///
/// Blends every gene of both parents with a fixed mixing ratio:
///
/// ```text
/// child1[j] = alpha * parent1[j] + (1 - alpha) * parent2[j]
/// child2[j] = (1 - alpha) * parent1[j] + alpha * parent2[j]
/// ```
///
/// With the default `alpha = 0.5` both children are the parents' midpoint.
/// Children always lie on the segment between their parents, so bounded
/// parents produce bounded children.
#[derive(Clone, Debug)]
pub struct WholeArithmeticCrossover {
    /// Mixing ratio in [0, 1]
    pub alpha: f64,
}

impl WholeArithmeticCrossover {
    /// Default mixing ratio
    pub const DEFAULT_ALPHA: f64 = 0.5;

    /// Create a crossover with the given mixing ratio
    pub fn new(alpha: f64) -> Self {
        assert!((0.0..=1.0).contains(&alpha), "Alpha must be in [0, 1]");
        Self { alpha }
    }
}

impl Default for WholeArithmeticCrossover {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ALPHA)
    }
}

impl CrossoverOperator for WholeArithmeticCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &GainVector,
        parent2: &GainVector,
        _rng: &mut R,
    ) -> (GainVector, GainVector) {
        let mut child1 = *parent1;
        let mut child2 = *parent2;

        for ((c1, c2), (p1, p2)) in child1
            .genes_mut()
            .iter_mut()
            .zip(child2.genes_mut().iter_mut())
            .zip(parent1.genes().iter().zip(parent2.genes().iter()))
        {
            *c1 = self.alpha * p1 + (1.0 - self.alpha) * p2;
            *c2 = (1.0 - self.alpha) * p1 + self.alpha * p2;
        }

        (child1, child2)
    }
}

/// Uniform crossover
///
/// Each gene of the first child is drawn from either parent with equal
/// probability; the second child takes the gene the first one did not.
#[derive(Clone, Debug, Default)]
pub struct UniformCrossover;

impl UniformCrossover {
    /// Create a new uniform crossover
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverOperator for UniformCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &GainVector,
        parent2: &GainVector,
        rng: &mut R,
    ) -> (GainVector, GainVector) {
        let mut child1 = *parent1;
        let mut child2 = *parent2;

        for ((c1, c2), (p1, p2)) in child1
            .genes_mut()
            .iter_mut()
            .zip(child2.genes_mut().iter_mut())
            .zip(parent1.genes().iter().zip(parent2.genes().iter()))
        {
            if rng.gen::<bool>() {
                *c1 = *p2;
                *c2 = *p1;
            }
        }

        (child1, child2)
    }
}
