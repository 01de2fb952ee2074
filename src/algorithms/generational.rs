//! Generational genetic algorithm
//!
//! This module implements the generational tuning loop: a sorted elite of
//! survivors is carried over unchanged, the rest of the next generation is
//! bred by selection, crossover, and mutation, and every new individual is
//! scored by the fitness function. Costs are minimized.

use std::fmt;
use std::time::Instant;

use log::{debug, info};
use rand::Rng;

use crate::diagnostics::{EvolutionStats, GenerationStats, TuningResult};
use crate::error::{ConfigError, EvoResult, EvolutionError};
use crate::fitness::traits::Fitness;
use crate::genome::bounds::GainBounds;
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::individual::Individual;
use crate::population::population::Population;
use crate::termination::{EvolutionState, MaxGenerations, TerminationCriterion};

/// Configuration for the generational GA
#[derive(Clone, Debug)]
pub struct GenerationalGaConfig {
    /// Population size
    pub population_size: usize,
    /// Probability that a selected parent pair is crossed over
    pub crossover_probability: f64,
    /// Number of elite survivors carried into each new generation
    pub num_survivors: usize,
}

impl Default for GenerationalGaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            crossover_probability: 0.6,
            num_survivors: 2,
        }
    }
}

impl GenerationalGaConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::InvalidPopulationSize(
                "population size must be at least 1".to_string(),
            ));
        }
        if self.population_size <= self.num_survivors {
            return Err(ConfigError::InvalidPopulationSize(format!(
                "population size {} must exceed the survivor count {}",
                self.population_size, self.num_survivors
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(ConfigError::InvalidProbability {
                name: "crossover_probability",
                value: self.crossover_probability,
            });
        }
        Ok(())
    }
}

/// Builder for [`GenerationalGa`]
pub struct GenerationalGaBuilder<S, C, M, Fit, Term> {
    config: GenerationalGaConfig,
    bounds: Option<GainBounds>,
    selection: Option<S>,
    crossover: Option<C>,
    mutation: Option<M>,
    fitness: Option<Fit>,
    termination: Option<Term>,
    requested_generations: Option<usize>,
}

impl GenerationalGaBuilder<(), (), (), (), ()> {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: GenerationalGaConfig::default(),
            bounds: None,
            selection: None,
            crossover: None,
            mutation: None,
            fitness: None,
            termination: None,
            requested_generations: None,
        }
    }
}

impl Default for GenerationalGaBuilder<(), (), (), (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C, M, Fit, Term> GenerationalGaBuilder<S, C, M, Fit, Term> {
    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the crossover probability
    pub fn crossover_probability(mut self, probability: f64) -> Self {
        self.config.crossover_probability = probability;
        self
    }

    /// Set the number of elite survivors
    pub fn num_survivors(mut self, count: usize) -> Self {
        self.config.num_survivors = count;
        self
    }

    /// Set the search space bounds
    pub fn bounds(mut self, bounds: GainBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Set the selection operator
    pub fn selection<NewS>(self, selection: NewS) -> GenerationalGaBuilder<NewS, C, M, Fit, Term>
    where
        NewS: SelectionOperator,
    {
        GenerationalGaBuilder {
            config: self.config,
            bounds: self.bounds,
            selection: Some(selection),
            crossover: self.crossover,
            mutation: self.mutation,
            fitness: self.fitness,
            termination: self.termination,
            requested_generations: self.requested_generations,
        }
    }

    /// Set the crossover operator
    pub fn crossover<NewC>(self, crossover: NewC) -> GenerationalGaBuilder<S, NewC, M, Fit, Term>
    where
        NewC: CrossoverOperator,
    {
        GenerationalGaBuilder {
            config: self.config,
            bounds: self.bounds,
            selection: self.selection,
            crossover: Some(crossover),
            mutation: self.mutation,
            fitness: self.fitness,
            termination: self.termination,
            requested_generations: self.requested_generations,
        }
    }

    /// Set the mutation operator
    pub fn mutation<NewM>(self, mutation: NewM) -> GenerationalGaBuilder<S, C, NewM, Fit, Term>
    where
        NewM: MutationOperator,
    {
        GenerationalGaBuilder {
            config: self.config,
            bounds: self.bounds,
            selection: self.selection,
            crossover: self.crossover,
            mutation: Some(mutation),
            fitness: self.fitness,
            termination: self.termination,
            requested_generations: self.requested_generations,
        }
    }

    /// Set the fitness function
    pub fn fitness<NewFit>(self, fitness: NewFit) -> GenerationalGaBuilder<S, C, M, NewFit, Term>
    where
        NewFit: Fitness,
    {
        GenerationalGaBuilder {
            config: self.config,
            bounds: self.bounds,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            fitness: Some(fitness),
            termination: self.termination,
            requested_generations: self.requested_generations,
        }
    }

    /// Set the termination criterion
    pub fn termination<NewTerm>(
        self,
        termination: NewTerm,
    ) -> GenerationalGaBuilder<S, C, M, Fit, NewTerm>
    where
        NewTerm: TerminationCriterion,
    {
        GenerationalGaBuilder {
            config: self.config,
            bounds: self.bounds,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            fitness: self.fitness,
            termination: Some(termination),
            requested_generations: self.requested_generations,
        }
    }

    /// Set max generations (convenience method)
    pub fn max_generations(
        self,
        max: usize,
    ) -> GenerationalGaBuilder<S, C, M, Fit, MaxGenerations> {
        GenerationalGaBuilder {
            config: self.config,
            bounds: self.bounds,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            fitness: self.fitness,
            termination: Some(MaxGenerations::new(max)),
            requested_generations: Some(max),
        }
    }
}

impl<S, C, M, Fit, Term> GenerationalGaBuilder<S, C, M, Fit, Term>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
    Fit: Fitness,
    Term: TerminationCriterion,
{
    /// Build the configured GA, rejecting invalid configuration
    pub fn build(self) -> Result<GenerationalGa<S, C, M, Fit, Term>, ConfigError> {
        self.config.validate()?;

        if self.requested_generations == Some(0) {
            return Err(ConfigError::ZeroGenerations);
        }

        let bounds = self.bounds.ok_or(ConfigError::Missing("bounds"))?;
        let selection = self
            .selection
            .ok_or(ConfigError::Missing("selection operator"))?;
        let crossover = self
            .crossover
            .ok_or(ConfigError::Missing("crossover operator"))?;
        let mutation = self
            .mutation
            .ok_or(ConfigError::Missing("mutation operator"))?;
        let fitness = self.fitness.ok_or(ConfigError::Missing("fitness function"))?;
        let termination = self
            .termination
            .ok_or(ConfigError::Missing("termination criterion"))?;

        Ok(GenerationalGa {
            config: self.config,
            bounds,
            selection,
            crossover,
            mutation,
            fitness,
            termination,
        })
    }
}

/// Generational genetic algorithm with elitism
///
/// Each generation carries the `num_survivors` lowest-cost individuals over
/// unchanged, then fills the remainder with offspring of selected parent
/// pairs. Offspring are crossed over with the configured probability and
/// always pass through mutation.
pub struct GenerationalGa<S, C, M, Fit, Term> {
    config: GenerationalGaConfig,
    bounds: GainBounds,
    selection: S,
    crossover: C,
    mutation: M,
    fitness: Fit,
    termination: Term,
}

impl<S, C, M, Fit, Term> fmt::Debug for GenerationalGa<S, C, M, Fit, Term> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationalGa")
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl GenerationalGa<(), (), (), (), ()> {
    /// Create a builder
    pub fn builder() -> GenerationalGaBuilder<(), (), (), (), ()> {
        GenerationalGaBuilder::new()
    }
}

impl<S, C, M, Fit, Term> GenerationalGa<S, C, M, Fit, Term>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
    Fit: Fitness,
    Term: TerminationCriterion,
{
    /// The active configuration
    pub fn config(&self) -> &GenerationalGaConfig {
        &self.config
    }

    /// Run the tuning loop to termination
    ///
    /// Takes `&mut self` because the fitness evaluator reuses its internal
    /// simulator across evaluations. All randomness flows through `rng`, so a
    /// seeded generator makes the whole run reproducible.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> EvoResult<TuningResult> {
        let start_time = Instant::now();

        let mut population =
            Population::random(self.config.population_size, &self.bounds, rng);
        let mut evaluations = population.evaluate(&mut self.fitness);

        let mut stats = EvolutionStats::new();
        let mut fitness_history: Vec<f64> = Vec::new();

        let best = population.best().ok_or(EvolutionError::EmptyPopulation)?;
        let mut best_genome = best.genome;
        let mut best_fitness = best.fitness.unwrap_or(f64::INFINITY);

        let gen_stats = GenerationStats::from_population(&population, 0, evaluations);
        fitness_history.push(gen_stats.best_fitness);
        stats.record(gen_stats);

        loop {
            let state = EvolutionState {
                generation: population.generation(),
                evaluations,
                best_fitness,
                population: &population,
                fitness_history: &fitness_history,
            };
            if self.termination.should_terminate(&state) {
                stats.set_termination_reason(self.termination.reason());
                break;
            }

            let next_generation = population.generation() + 1;
            let mut new_population = Population::with_capacity(self.config.population_size);

            // Elite survivors keep their genomes and their cached costs.
            let mut sorted = population.clone();
            sorted.sort_by_fitness();
            for survivor in sorted.iter().take(self.config.num_survivors) {
                new_population.push(*survivor);
            }

            let selection_pool = population.as_fitness_pairs();

            while new_population.len() < self.config.population_size {
                let parent1_idx = self.selection.select(&selection_pool, rng);
                let parent2_idx = self.selection.select(&selection_pool, rng);
                let parent1 = selection_pool[parent1_idx].0;
                let parent2 = selection_pool[parent2_idx].0;

                let (mut child1, mut child2) =
                    if rng.gen::<f64>() < self.config.crossover_probability {
                        self.crossover.crossover(&parent1, &parent2, rng)
                    } else {
                        (parent1, parent2)
                    };

                self.mutation.mutate(&mut child1, rng);
                self.mutation.mutate(&mut child2, rng);

                new_population.push(Individual::with_generation(child1, next_generation));
                if new_population.len() < self.config.population_size {
                    new_population.push(Individual::with_generation(child2, next_generation));
                }
            }

            evaluations += new_population.evaluate(&mut self.fitness);
            new_population.set_generation(next_generation);
            population = new_population;

            if let Some(best) = population.best() {
                if best.fitness.unwrap_or(f64::INFINITY) < best_fitness {
                    best_genome = best.genome;
                    best_fitness = best.fitness.unwrap_or(f64::INFINITY);
                }
            }

            let gen_stats = GenerationStats::from_population(
                &population,
                population.generation(),
                evaluations,
            );
            debug!(
                "generation {}: best={:.6} mean={:.6} std={:.6}",
                gen_stats.generation,
                gen_stats.best_fitness,
                gen_stats.mean_fitness,
                gen_stats.fitness_std
            );
            fitness_history.push(gen_stats.best_fitness);
            stats.record(gen_stats);
        }

        stats.set_runtime(start_time.elapsed());
        info!(
            "tuning finished after {} generations, {} evaluations, best cost {:.6} at {}",
            population.generation(),
            evaluations,
            best_fitness,
            best_genome
        );

        Ok(
            TuningResult::new(best_genome, best_fitness, population.generation(), evaluations)
                .with_stats(stats),
        )
    }
}
