//! Fitness evaluation
//!
//! The [`Fitness`] trait scores gain vectors as costs (lower is better);
//! [`StepResponseFitness`] is the standard implementation, driving a
//! closed-loop step-response simulation per candidate.
//!
//! [`Fitness`]: traits::Fitness
//! [`StepResponseFitness`]: step_response::StepResponseFitness

pub mod step_response;
pub mod traits;

pub mod prelude {
    pub use super::step_response::*;
    pub use super::traits::*;
}
