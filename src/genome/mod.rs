//! Genome types
//!
//! This module provides the tuned gain vector and its per-gene bounds.

pub mod bounds;
pub mod gains;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::gains::*;
}
