//! Step-response cost function
//!
//! Scores a gain vector by loading it into a shared closed-loop simulator,
//! running one step response from rest, and combining the response metrics
//! into a single cost. Candidates whose response never rises, settles, or
//! reaches the setpoint get a large fixed penalty instead.

use serde::{Deserialize, Serialize};

use crate::control::closed_loop::ClosedLoop;
use crate::control::stage::Stage;
use crate::fitness::traits::Fitness;
use crate::genome::gains::GainVector;

/// Cost assigned when any transient metric is unset
pub const PENALTY_FITNESS: f64 = 1000.0;

/// Weights for combining the four response metrics into one cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessWeights {
    /// Weight of the integral of squared error
    pub ise: f64,
    /// Weight of the rise time
    pub rise_time: f64,
    /// Weight of the settling time
    pub settling_time: f64,
    /// Weight of the maximum overshoot
    pub max_overshoot: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            ise: 0.25,
            rise_time: 0.25,
            settling_time: 0.25,
            max_overshoot: 0.25,
        }
    }
}

/// Fitness evaluator backed by one reusable closed-loop simulator
///
/// The simulator is reset to rest before every evaluation, so successive
/// calls are independent and the evaluator never allocates a new loop.
#[derive(Debug, Clone)]
pub struct StepResponseFitness<P: Stage> {
    simulator: ClosedLoop<P>,
    weights: FitnessWeights,
}

impl<P: Stage> StepResponseFitness<P> {
    /// Create an evaluator over the given loop with equal weights
    pub fn new(simulator: ClosedLoop<P>) -> Self {
        Self {
            simulator,
            weights: FitnessWeights::default(),
        }
    }

    /// Override the metric weights
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// The configured weights
    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    /// The underlying simulator
    pub fn simulator(&self) -> &ClosedLoop<P> {
        &self.simulator
    }
}

impl<P: Stage> Fitness for StepResponseFitness<P> {
    fn evaluate(&mut self, genome: &GainVector) -> f64 {
        self.simulator.reset();
        self.simulator.apply_gain_vector(genome);
        let response = self.simulator.step_response();

        match (
            response.rise_time(),
            response.settling_time(),
            response.max_overshoot(),
        ) {
            (Some(rise), Some(settling), Some(overshoot)) => {
                self.weights.ise * response.integral_squared_error()
                    + self.weights.rise_time * rise
                    + self.weights.settling_time * settling
                    + self.weights.max_overshoot * overshoot
            }
            _ => PENALTY_FITNESS,
        }
    }
}
