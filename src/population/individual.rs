//! Individual wrapper type
//!
//! This module provides the Individual type that wraps a gain vector with its
//! cost. Lower cost is better.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::genome::gains::GainVector;

/// An individual in the population
///
/// Wraps a gain vector with its computed cost and birth metadata.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Individual {
    /// The gain vector of this individual
    pub genome: GainVector,
    /// The cost (None if not yet evaluated); lower is better
    pub fitness: Option<f64>,
    /// Generation when this individual was created
    pub birth_generation: usize,
}

impl Individual {
    /// Create a new individual with an unevaluated genome
    pub fn new(genome: GainVector) -> Self {
        Self {
            genome,
            fitness: None,
            birth_generation: 0,
        }
    }

    /// Create a new individual with a known cost
    pub fn with_fitness(genome: GainVector, fitness: f64) -> Self {
        Self {
            genome,
            fitness: Some(fitness),
            birth_generation: 0,
        }
    }

    /// Create a new individual with a birth generation
    pub fn with_generation(genome: GainVector, generation: usize) -> Self {
        Self {
            genome,
            fitness: None,
            birth_generation: generation,
        }
    }

    /// Check if this individual has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Set the cost
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Check if this individual is better (lower cost) than another
    ///
    /// An evaluated individual always beats an unevaluated one.
    pub fn is_better_than(&self, other: &Self) -> bool {
        match (self.fitness, other.fitness) {
            (Some(f1), Some(f2)) => f1 < f2,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => false,
        }
    }

    /// Age of this individual (generations since birth)
    pub fn age(&self, current_generation: usize) -> usize {
        current_generation.saturating_sub(self.birth_generation)
    }
}

impl PartialEq for Individual {
    fn eq(&self, other: &Self) -> bool {
        self.genome == other.genome && self.fitness == other.fitness
    }
}

/// Orders by cost ascending; unevaluated individuals sort after evaluated
/// ones.
impl PartialOrd for Individual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.fitness, other.fitness) {
            (Some(f1), Some(f2)) => f1.partial_cmp(&f2),
            (Some(_), None) => Some(Ordering::Less),
            (None, Some(_)) => Some(Ordering::Greater),
            (None, None) => Some(Ordering::Equal),
        }
    }
}
