//! Operator traits
//!
//! This module defines the core operator traits for the genetic search.
//! Fitness values are costs: lower is better everywhere an operator sees one.

use rand::Rng;

use crate::genome::gains::GainVector;

/// Selection operator trait
///
/// Selects individuals from an evaluated population for reproduction.
pub trait SelectionOperator: Send + Sync {
    /// Select a single individual from the population
    ///
    /// Returns the index of the selected individual. The pool is a slice of
    /// `(genome, cost)` pairs.
    fn select<R: Rng>(&self, population: &[(GainVector, f64)], rng: &mut R) -> usize;

    /// Select multiple individuals from the population
    fn select_many<R: Rng>(
        &self,
        population: &[(GainVector, f64)],
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        (0..count).map(|_| self.select(population, rng)).collect()
    }
}

/// Crossover operator trait
///
/// Combines genetic material from two parents to create two offspring.
pub trait CrossoverOperator: Send + Sync {
    /// Apply crossover to two parents and produce two offspring
    fn crossover<R: Rng>(
        &self,
        parent1: &GainVector,
        parent2: &GainVector,
        rng: &mut R,
    ) -> (GainVector, GainVector);
}

/// Mutation operator trait
///
/// Applies random changes to a genome in place, respecting the gain bounds
/// the operator was constructed with.
pub trait MutationOperator: Send + Sync {
    /// Apply mutation to a genome in place
    fn mutate<R: Rng>(&self, genome: &mut GainVector, rng: &mut R);

    /// Get the mutation probability per gene
    fn mutation_probability(&self) -> f64 {
        1.0
    }
}
