//! Genetic operators
//!
//! Selection, crossover, and mutation over gain vectors. All operators are
//! deterministic functions of the random generator they are handed, so a
//! seeded run reproduces bit for bit.

pub mod crossover;
pub mod mutation;
pub mod selection;
pub mod traits;

pub mod prelude {
    pub use super::crossover::*;
    pub use super::mutation::*;
    pub use super::selection::*;
    pub use super::traits::*;
}
