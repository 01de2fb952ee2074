//! Error types for pid-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for invalid configuration, rejected at construction time
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Gene bounds with a lower bound above the upper bound
    #[error("Invalid bounds: lower ({lower}) must be <= upper ({upper})")]
    InvalidBounds { lower: f64, upper: f64 },

    /// Population size of zero, or too small to carry the survivors
    #[error("Invalid population size: {0}")]
    InvalidPopulationSize(String),

    /// Zero generations
    #[error("Number of generations must be at least 1")]
    ZeroGenerations,

    /// A probability outside [0, 1]
    #[error("Probability {name} must be in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// A missing builder field
    #[error("Missing configuration: {0}")]
    Missing(&'static str),
}

/// Top-level error type for tuning runs
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

/// Result type alias for tuning runs
pub type EvoResult<T> = Result<T, EvolutionError>;
