//! Discrete PID controller
//!
//! A fixed-period PID controller with trapezoidal integration, dynamic
//! integrator clamping (anti-windup), and a first-order filter on the
//! derivative term.

use serde::{Deserialize, Serialize};

use crate::control::stage::Stage;
use crate::control::SAMPLE_TIME_SECS;
use crate::genome::gains::GainVector;

/// PID gains in direct (gain-space) form, plus the derivative filter constant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidGains {
    /// Proportional gain
    pub k_p: f64,
    /// Integral gain
    pub k_i: f64,
    /// Derivative gain
    pub k_d: f64,
    /// Derivative low-pass filter time constant; 0 disables filtering
    pub tau: f64,
}

impl PidGains {
    /// Create gains directly in gain space
    pub fn new(k_p: f64, k_i: f64, k_d: f64, tau: f64) -> Self {
        Self { k_p, k_i, k_d, tau }
    }

    /// Create gains from the time-constant parameterization the optimizer
    /// tunes in: `k_i = k_p / t_i`, `k_d = k_p * t_d`
    pub fn from_time_constants(k_p: f64, t_i: f64, t_d: f64, tau: f64) -> Self {
        Self {
            k_p,
            k_i: k_p / t_i,
            k_d: k_p * t_d,
            tau,
        }
    }
}

impl Default for PidGains {
    fn default() -> Self {
        Self {
            k_p: 2.0,
            k_i: 1.05,
            k_d: 0.26,
            tau: 0.0,
        }
    }
}

/// Discrete PID controller with anti-windup and filtered derivative
///
/// `transform` is called once per sample period with the latest measurement
/// and returns the clamped control output. All runtime state (integrator,
/// filtered differentiator, previous error and measurement) persists across
/// calls until [`Stage::reset`].
#[derive(Debug, Clone)]
pub struct PidController {
    gains: PidGains,
    setpoint: f64,
    integrator: f64,
    differentiator: f64,
    prev_error: f64,
    prev_measurement: f64,
}

impl PidController {
    /// Lower saturation limit of the control output
    pub const OUTPUT_MIN: f64 = -10.0;
    /// Upper saturation limit of the control output
    pub const OUTPUT_MAX: f64 = 10.0;
    /// Setpoint of a unit step reference
    pub const UNIT_STEP_SETPOINT: f64 = 1.0;

    /// Create a controller with the given gains tracking a unit step
    pub fn new(gains: PidGains) -> Self {
        Self::with_setpoint(gains, Self::UNIT_STEP_SETPOINT)
    }

    /// Create a controller with an explicit setpoint
    pub fn with_setpoint(gains: PidGains, setpoint: f64) -> Self {
        Self {
            gains,
            setpoint,
            integrator: 0.0,
            differentiator: 0.0,
            prev_error: 0.0,
            prev_measurement: 0.0,
        }
    }

    /// The configured gains
    pub fn gains(&self) -> &PidGains {
        &self.gains
    }

    /// Replace the gains, leaving runtime state untouched
    pub fn set_gains(&mut self, gains: PidGains) {
        self.gains = gains;
    }

    /// Load a tuned gain vector, keeping the current filter constant
    pub fn apply_gain_vector(&mut self, genome: &GainVector) {
        self.gains = PidGains::from_time_constants(
            genome.k_p(),
            genome.t_i(),
            genome.t_d(),
            self.gains.tau,
        );
    }

    /// The reference the controller tracks
    pub fn setpoint(&self) -> f64 {
        self.setpoint
    }
}

impl Stage for PidController {
    fn transform(&mut self, measurement: f64) -> f64 {
        let t = SAMPLE_TIME_SECS;
        let error = self.setpoint - measurement;

        let proportional = self.gains.k_p * error;

        // Trapezoidal integration, then dynamic clamping so that the P+I sum
        // cannot leave the output range (anti-windup).
        self.integrator += 0.5 * self.gains.k_i * t * (error + self.prev_error);

        let integrator_min = if Self::OUTPUT_MIN < proportional {
            Self::OUTPUT_MIN - proportional
        } else {
            0.0
        };
        let integrator_max = if Self::OUTPUT_MAX > proportional {
            Self::OUTPUT_MAX - proportional
        } else {
            0.0
        };
        self.integrator = self.integrator.clamp(integrator_min, integrator_max);

        // First-order filtered backward difference on the measurement;
        // tau = 0 reduces this to the unfiltered derivative.
        self.differentiator = -(2.0 * self.gains.k_d * (measurement - self.prev_measurement)
            + (2.0 * self.gains.tau - t) * self.differentiator)
            / (2.0 * self.gains.tau + t);

        let output = (proportional + self.integrator + self.differentiator)
            .clamp(Self::OUTPUT_MIN, Self::OUTPUT_MAX);

        self.prev_error = error;
        self.prev_measurement = measurement;

        output
    }

    fn reset(&mut self) {
        self.integrator = 0.0;
        self.differentiator = 0.0;
        self.prev_error = 0.0;
        self.prev_measurement = 0.0;
    }
}
