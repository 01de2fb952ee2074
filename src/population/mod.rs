//! Population management
//!
//! Individuals and the population container the optimizer evolves.

pub mod individual;
pub mod population;

pub mod prelude {
    pub use super::individual::*;
    pub use super::population::*;
}
