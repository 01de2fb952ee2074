//! Closed-loop step-response simulator
//!
//! Couples a [`PidController`] to a plant in unity negative feedback and runs
//! the loop at the fixed sample period, recording the plant output into a
//! [`Response`]. The loop is fully deterministic and can be reset and reused
//! across evaluations without reallocating.

use crate::control::pid::PidController;
use crate::control::response::Response;
use crate::control::stage::Stage;
use crate::control::SAMPLE_TIME_SECS;
use crate::genome::gains::GainVector;

/// A unity-feedback loop of one controller and one plant
#[derive(Debug, Clone)]
pub struct ClosedLoop<P: Stage> {
    controller: PidController,
    plant: P,
    horizon_secs: f64,
}

impl<P: Stage> ClosedLoop<P> {
    /// Default simulation horizon in seconds
    pub const DEFAULT_HORIZON_SECS: f64 = 15.0;

    /// Create a loop with the default horizon
    pub fn new(controller: PidController, plant: P) -> Self {
        Self {
            controller,
            plant,
            horizon_secs: Self::DEFAULT_HORIZON_SECS,
        }
    }

    /// Override the simulation horizon
    pub fn with_horizon(mut self, horizon_secs: f64) -> Self {
        self.horizon_secs = horizon_secs;
        self
    }

    /// The controller inside the loop
    pub fn controller(&self) -> &PidController {
        &self.controller
    }

    /// Mutable access to the controller, for retuning between runs
    pub fn controller_mut(&mut self) -> &mut PidController {
        &mut self.controller
    }

    /// The configured horizon in seconds
    pub fn horizon_secs(&self) -> f64 {
        self.horizon_secs
    }

    /// Load a tuned gain vector into the controller
    pub fn apply_gain_vector(&mut self, genome: &GainVector) {
        self.controller.apply_gain_vector(genome);
    }

    /// Zero all runtime state in both the controller and the plant
    pub fn reset(&mut self) {
        self.controller.reset();
        self.plant.reset();
    }

    /// Simulate one full step response from rest
    ///
    /// Runs `round(horizon / T)` samples. At each step the controller sees the
    /// plant output from the previous step (zero initially), its control
    /// signal drives the plant, and the new plant output is recorded against
    /// the time of that sample.
    pub fn step_response(&mut self) -> Response {
        let steps = (self.horizon_secs / SAMPLE_TIME_SECS).round() as usize;
        let mut response = Response::new(self.controller.setpoint());

        let mut measurement = 0.0;
        for step in 0..steps {
            let control = self.controller.transform(measurement);
            measurement = self.plant.transform(control);
            response.record(step as f64 * SAMPLE_TIME_SECS, measurement);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::pid::PidGains;
    use crate::control::plant::{FirstOrderLag, LeakyIntegrator};

    fn reference_loop() -> ClosedLoop<LeakyIntegrator> {
        let gains = PidGains::from_time_constants(2.0, 1.05, 0.26, 0.02);
        ClosedLoop::new(PidController::new(gains), LeakyIntegrator::default())
    }

    #[test]
    fn test_sample_count_matches_horizon() {
        let mut sim = reference_loop().with_horizon(5.0);
        let response = sim.step_response();
        assert_eq!(response.samples().len(), 500);
    }

    #[test]
    fn test_step_response_is_deterministic() {
        let mut a = reference_loop();
        let mut b = reference_loop();
        let ra = a.step_response();
        let rb = b.step_response();
        assert_eq!(ra.samples(), rb.samples());
    }

    #[test]
    fn test_reset_reproduces_fresh_run() {
        let mut sim = reference_loop();
        let first = sim.step_response();
        sim.reset();
        let second = sim.step_response();
        assert_eq!(first.samples(), second.samples());
        assert_eq!(first.integral_squared_error(), second.integral_squared_error());
    }

    #[test]
    fn test_reference_tuning_tracks_unit_step() {
        let mut sim = reference_loop().with_horizon(100.0);
        let response = sim.step_response();

        assert!(response.rise_time().is_some());
        assert!(response.settling_time().is_some());

        // Final 10% of the run stays within 1% of the setpoint.
        let samples = response.samples();
        let tail = &samples[samples.len() * 9 / 10..];
        for sample in tail {
            assert!(
                (sample.value - 1.0).abs() < 0.01,
                "tail sample at t={} is {}",
                sample.time,
                sample.value
            );
        }
    }

    #[test]
    fn test_lag_plant_loop_converges() {
        let gains = PidGains::from_time_constants(2.0, 1.05, 0.26, 0.02);
        let mut sim =
            ClosedLoop::new(PidController::new(gains), FirstOrderLag::default()).with_horizon(30.0);
        let response = sim.step_response();
        let last = response.samples().last().unwrap();
        assert!((last.value - 1.0).abs() < 0.02);
    }

    #[test]
    fn test_retuning_changes_trajectory() {
        let mut sim = reference_loop();
        let before = sim.step_response();
        sim.reset();
        sim.apply_gain_vector(&GainVector::new(8.0, 4.0, 1.0));
        let after = sim.step_response();
        assert_ne!(before.samples(), after.samples());
    }
}
