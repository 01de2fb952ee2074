//! Tuning algorithms
//!
//! The generational GA that drives the controller tuning.

pub mod generational;

pub mod prelude {
    pub use super::generational::*;
}
