//! Fitness evaluation trait
//!
//! Fitness is a cost in this crate: lower values are better, and the
//! optimizer minimizes. Evaluators take `&mut self` so they can reuse
//! internal simulation state across calls instead of reallocating.

use crate::genome::gains::GainVector;

/// Scores a candidate gain vector; lower is better
pub trait Fitness {
    /// Evaluate one genome and return its cost
    fn evaluate(&mut self, genome: &GainVector) -> f64;
}

impl<F> Fitness for F
where
    F: FnMut(&GainVector) -> f64,
{
    fn evaluate(&mut self, genome: &GainVector) -> f64 {
        self(genome)
    }
}
