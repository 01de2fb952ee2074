//! First-order plant models
//!
//! Two discretizations of a first-order linear system, both driven at the
//! shared sample period. The lag form has unit DC gain; the leaky integrator
//! is the epsilon-parameterized form with DC gain `1/epsilon`.

use serde::{Deserialize, Serialize};

use crate::control::stage::Stage;
use crate::control::SAMPLE_TIME_SECS;

/// First-order lag `H(s) = 1 / (alpha*s + 1)`, forward-Euler discretized:
/// `y[n+1] = y[n] + (T/alpha) * (x[n] - y[n])`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirstOrderLag {
    alpha: f64,
    output: f64,
}

impl FirstOrderLag {
    /// Default time constant
    pub const DEFAULT_ALPHA: f64 = 1.0;

    /// Create a lag with the given time constant
    pub fn new(alpha: f64) -> Self {
        Self { alpha, output: 0.0 }
    }

    /// Current held output
    pub fn output(&self) -> f64 {
        self.output
    }
}

impl Default for FirstOrderLag {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ALPHA)
    }
}

impl Stage for FirstOrderLag {
    fn transform(&mut self, input: f64) -> f64 {
        self.output += (SAMPLE_TIME_SECS / self.alpha) * (input - self.output);
        self.output
    }

    fn reset(&mut self) {
        self.output = 0.0;
    }
}

/// Leaky integrator `dy/dt = x - epsilon*y`, backward-Euler discretized:
/// `y[n+1] = (T*x[n] + y[n]) / (1 + epsilon*T)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeakyIntegrator {
    epsilon: f64,
    output: f64,
}

impl LeakyIntegrator {
    /// Default leak rate
    pub const DEFAULT_EPSILON: f64 = 0.02;

    /// Create a leaky integrator with the given leak rate
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            output: 0.0,
        }
    }

    /// Current held output
    pub fn output(&self) -> f64 {
        self.output
    }
}

impl Default for LeakyIntegrator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EPSILON)
    }
}

impl Stage for LeakyIntegrator {
    fn transform(&mut self, input: f64) -> f64 {
        self.output = (SAMPLE_TIME_SECS * input + self.output)
            / (1.0 + self.epsilon * SAMPLE_TIME_SECS);
        self.output
    }

    fn reset(&mut self) {
        self.output = 0.0;
    }
}
