//! Stage abstraction
//!
//! A stage is one block of a discrete-time loop: it maps an input sample to an
//! output sample once per sample period, holding whatever state it needs in
//! between.

/// One discrete-time block of a control loop
pub trait Stage {
    /// Advance the stage by one sample period and return its output
    fn transform(&mut self, input: f64) -> f64;

    /// Zero all runtime state, preserving configuration
    fn reset(&mut self);
}
