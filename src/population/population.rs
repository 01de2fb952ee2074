//! Population type
//!
//! This module provides the Population container type. All ordering follows
//! the cost convention: lower fitness is better, so "best" means minimum.

use rand::Rng;

use crate::fitness::traits::Fitness;
use crate::genome::bounds::GainBounds;
use crate::genome::gains::GainVector;
use crate::population::individual::Individual;

/// A population of individuals
#[derive(Clone, Debug, Default)]
pub struct Population {
    individuals: Vec<Individual>,
    generation: usize,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
            generation: 0,
        }
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Create a random population, each genome uniform within bounds
    pub fn random<R: Rng>(size: usize, bounds: &GainBounds, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::new(GainVector::generate(rng, bounds)))
            .collect();
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Increment the generation counter
    pub fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Get the underlying slice of individuals
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Take the individuals out of this population
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    /// Get the best (lowest-cost) evaluated individual
    pub fn best(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .min_by(|a, b| {
                let fa = a.fitness.unwrap_or(f64::INFINITY);
                let fb = b.fitness.unwrap_or(f64::INFINITY);
                fa.partial_cmp(&fb).unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Get the worst (highest-cost) evaluated individual
    pub fn worst(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .max_by(|a, b| {
                let fa = a.fitness.unwrap_or(f64::NEG_INFINITY);
                let fb = b.fitness.unwrap_or(f64::NEG_INFINITY);
                fa.partial_cmp(&fb).unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Sort the population by cost ascending (best first)
    ///
    /// Unevaluated individuals sort to the end.
    pub fn sort_by_fitness(&mut self) {
        self.individuals.sort_by(|a, b| {
            let fa = a.fitness.unwrap_or(f64::INFINITY);
            let fb = b.fitness.unwrap_or(f64::INFINITY);
            fa.partial_cmp(&fb).unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Truncate the population to the given size, keeping the best
    pub fn truncate_to_best(&mut self, size: usize) {
        self.sort_by_fitness();
        self.individuals.truncate(size);
    }

    /// Check if all individuals have been evaluated
    pub fn all_evaluated(&self) -> bool {
        self.individuals.iter().all(|i| i.is_evaluated())
    }

    /// Get evaluated genome-cost pairs for selection
    pub fn as_fitness_pairs(&self) -> Vec<(GainVector, f64)> {
        self.individuals
            .iter()
            .filter_map(|i| i.fitness.map(|f| (i.genome, f)))
            .collect()
    }

    /// Evaluate all unevaluated individuals and return the evaluation count
    pub fn evaluate<F: Fitness>(&mut self, fitness: &mut F) -> usize {
        let mut evaluations = 0;
        for individual in &mut self.individuals {
            if !individual.is_evaluated() {
                individual.set_fitness(fitness.evaluate(&individual.genome));
                evaluations += 1;
            }
        }
        evaluations
    }

    /// Compute mean cost over the evaluated individuals
    pub fn mean_fitness(&self) -> Option<f64> {
        let evaluated: Vec<f64> = self.individuals.iter().filter_map(|i| i.fitness).collect();
        if evaluated.is_empty() {
            None
        } else {
            Some(evaluated.iter().sum::<f64>() / evaluated.len() as f64)
        }
    }

    /// Compute the sample standard deviation of cost
    pub fn fitness_std(&self) -> Option<f64> {
        let mean = self.mean_fitness()?;
        let evaluated: Vec<f64> = self.individuals.iter().filter_map(|i| i.fitness).collect();
        if evaluated.len() < 2 {
            return None;
        }
        let variance = evaluated.iter().map(|f| (f - mean).powi(2)).sum::<f64>()
            / (evaluated.len() - 1) as f64;
        Some(variance.sqrt())
    }

    /// Compute population diversity (average pairwise genome distance)
    pub fn diversity(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }

        let mut total_distance = 0.0;
        let mut count = 0;
        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                total_distance += self.individuals[i]
                    .genome
                    .distance(&self.individuals[j].genome);
                count += 1;
            }
        }
        total_distance / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::bounds::Bounds;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tuning_bounds() -> GainBounds {
        GainBounds::new(
            Bounds::new(2.0, 18.0).unwrap(),
            Bounds::new(1.05, 9.42).unwrap(),
            Bounds::new(0.26, 2.37).unwrap(),
        )
    }

    fn evaluated_population(costs: &[f64]) -> Population {
        Population::from_individuals(
            costs
                .iter()
                .map(|&c| Individual::with_fitness(GainVector::new(c, 1.0, 1.0), c))
                .collect(),
        )
    }

    #[test]
    fn test_random_population_within_bounds() {
        let mut rng = StdRng::seed_from_u64(79);
        let bounds = tuning_bounds();
        let population = Population::random(50, &bounds, &mut rng);

        assert_eq!(population.len(), 50);
        assert!(!population.all_evaluated());
        for individual in population.iter() {
            assert!(bounds.contains_genes(individual.genome.genes()));
        }
    }

    #[test]
    fn test_best_is_minimum_cost() {
        let population = evaluated_population(&[7.0, 2.0, 9.0, 4.0]);
        assert_eq!(population.best().unwrap().fitness, Some(2.0));
        assert_eq!(population.worst().unwrap().fitness, Some(9.0));
    }

    #[test]
    fn test_sort_by_fitness_ascending() {
        let mut population = evaluated_population(&[7.0, 2.0, 9.0, 4.0]);
        population.sort_by_fitness();
        let costs: Vec<f64> = population.iter().filter_map(|i| i.fitness).collect();
        assert_eq!(costs, vec![2.0, 4.0, 7.0, 9.0]);
    }

    #[test]
    fn test_unevaluated_sort_last() {
        let mut population = evaluated_population(&[7.0, 2.0]);
        population.push(Individual::new(GainVector::zeros()));
        population.sort_by_fitness();
        assert!(population.individuals().last().unwrap().fitness.is_none());
    }

    #[test]
    fn test_truncate_to_best() {
        let mut population = evaluated_population(&[7.0, 2.0, 9.0, 4.0]);
        population.truncate_to_best(2);
        assert_eq!(population.len(), 2);
        let costs: Vec<f64> = population.iter().filter_map(|i| i.fitness).collect();
        assert_eq!(costs, vec![2.0, 4.0]);
    }

    #[test]
    fn test_evaluate_skips_already_evaluated() {
        let mut population = evaluated_population(&[7.0]);
        population.push(Individual::new(GainVector::new(1.0, 1.0, 1.0)));

        let mut fitness = |genome: &GainVector| genome.k_p() * 10.0;
        let evaluations = population.evaluate(&mut fitness);

        assert_eq!(evaluations, 1);
        assert_eq!(population.get(0).unwrap().fitness, Some(7.0));
        assert_eq!(population.get(1).unwrap().fitness, Some(10.0));
    }

    #[test]
    fn test_mean_and_std() {
        let population = evaluated_population(&[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(population.mean_fitness(), Some(5.0));
        let std = population.fitness_std().unwrap();
        assert!((std - (20.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_population_statistics() {
        let population = Population::new();
        assert!(population.best().is_none());
        assert!(population.mean_fitness().is_none());
        assert_eq!(population.diversity(), 0.0);
    }
}
