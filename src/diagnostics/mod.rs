//! Diagnostics and statistics
//!
//! This module provides statistics collection for tuning runs. All fitness
//! figures are costs, so best means minimum.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::genome::gains::GainVector;
use crate::population::population::Population;

/// Statistics for a single generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Total fitness evaluations so far
    pub evaluations: usize,
    /// Best (lowest) cost in this generation
    pub best_fitness: f64,
    /// Worst (highest) cost in this generation
    pub worst_fitness: f64,
    /// Mean cost
    pub mean_fitness: f64,
    /// Cost standard deviation
    pub fitness_std: f64,
    /// Population diversity
    pub diversity: f64,
}

impl GenerationStats {
    /// Compute statistics from a population
    pub fn from_population(population: &Population, generation: usize, evaluations: usize) -> Self {
        let fitnesses: Vec<f64> = population.iter().filter_map(|i| i.fitness).collect();

        if fitnesses.is_empty() {
            return Self {
                generation,
                evaluations,
                best_fitness: f64::INFINITY,
                worst_fitness: f64::NEG_INFINITY,
                mean_fitness: 0.0,
                fitness_std: 0.0,
                diversity: 0.0,
            };
        }

        let best = fitnesses.iter().cloned().fold(f64::INFINITY, f64::min);
        let worst = fitnesses.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean = fitnesses.iter().sum::<f64>() / fitnesses.len() as f64;

        let std = if fitnesses.len() > 1 {
            let variance = fitnesses.iter().map(|f| (f - mean).powi(2)).sum::<f64>()
                / (fitnesses.len() - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };

        Self {
            generation,
            evaluations,
            best_fitness: best,
            worst_fitness: worst,
            mean_fitness: mean,
            fitness_std: std,
            diversity: population.diversity(),
        }
    }
}

/// Statistics collector for an entire tuning run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
    /// Reason for termination
    pub termination_reason: Option<String>,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Get the lowest cost across all generations
    pub fn best_fitness(&self) -> Option<f64> {
        self.generations
            .iter()
            .map(|g| g.best_fitness)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Get the final generation's best cost
    pub fn final_best_fitness(&self) -> Option<f64> {
        self.generations.last().map(|g| g.best_fitness)
    }

    /// Get the history of best costs
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// Get the history of mean costs
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_fitness).collect()
    }

    /// Set the termination reason
    pub fn set_termination_reason(&mut self, reason: &str) {
        self.termination_reason = Some(reason.to_string());
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }
}

/// Result of a tuning run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TuningResult {
    /// The best gain vector found
    pub best_genome: GainVector,
    /// Its cost
    pub best_fitness: f64,
    /// Number of generations completed
    pub generations: usize,
    /// Total fitness evaluations
    pub evaluations: usize,
    /// Statistics for the run
    pub stats: EvolutionStats,
}

impl TuningResult {
    /// Create a new tuning result
    pub fn new(
        best_genome: GainVector,
        best_fitness: f64,
        generations: usize,
        evaluations: usize,
    ) -> Self {
        Self {
            best_genome,
            best_fitness,
            generations,
            evaluations,
            stats: EvolutionStats::new(),
        }
    }

    /// Add statistics to the result
    pub fn with_stats(mut self, stats: EvolutionStats) -> Self {
        self.stats = stats;
        self
    }
}

pub mod prelude {
    pub use super::{EvolutionStats, GenerationStats, TuningResult};
}
