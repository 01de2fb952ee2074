//! # pid-evo
//!
//! Genetic-algorithm tuning of discrete PID controllers.
//!
//! This library closes the loop between a discrete-time PID controller and a
//! first-order plant, scores the simulated step response on its transient
//! metrics, and evolves the controller's `(k_p, t_i, t_d)` gains with a
//! generational genetic algorithm.
//!
//! ## Core Concepts
//!
//! - **Deterministic simulation**: the closed loop runs at a fixed sample
//!   period with no hidden state, so a gain vector always scores the same
//! - **Fitness as response quality**: integral squared error, rise time,
//!   settling time, and max overshoot combine into one minimized scalar
//! - **Pluggable operators**: selection, crossover, and mutation are traits,
//!   with fitness-proportionate defaults matching the classic tuning recipe
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pid_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let bounds = GainBounds::new(
//!     Bounds::new(2.0, 18.0)?,
//!     Bounds::new(1.05, 9.42)?,
//!     Bounds::new(0.26, 2.37)?,
//! );
//!
//! let gains = PidGains::from_time_constants(2.0, 1.05, 0.26, 0.02);
//! let simulator = ClosedLoop::new(PidController::new(gains), LeakyIntegrator::default());
//!
//! let result = GenerationalGa::builder()
//!     .population_size(50)
//!     .max_generations(150)
//!     .bounds(bounds)
//!     .selection(RouletteSelection::new())
//!     .crossover(WholeArithmeticCrossover::default())
//!     .mutation(UniformMutation::new(bounds, 0.25))
//!     .fitness(StepResponseFitness::new(simulator))
//!     .build()?
//!     .run(&mut rng)?;
//!
//! println!("best gains: {}", result.best_genome);
//! ```

pub mod algorithms;
pub mod control;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;
pub mod termination;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::control::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::termination::prelude::*;
}
