//! Discrete-time control components
//!
//! This module provides the PID controller, first-order plant models, and the
//! closed-loop step-response simulator that scores candidate tunings.

pub mod closed_loop;
pub mod pid;
pub mod plant;
pub mod response;
pub mod stage;

/// Fixed sample period shared by every discrete stage, in seconds
pub const SAMPLE_TIME_SECS: f64 = 0.01;

pub mod prelude {
    pub use super::closed_loop::*;
    pub use super::pid::*;
    pub use super::plant::*;
    pub use super::response::*;
    pub use super::stage::*;
    pub use super::SAMPLE_TIME_SECS;
}
