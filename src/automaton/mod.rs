//! Core automaton logic.
//!
//! This module contains grid geometry, the Life rule and generation stepping.
//! The kernel in `state` and the FFI layer in `ffi/` call these functions.

pub mod grid;
pub mod rule;
pub mod stepping;

pub use grid::{count_neighbors, CellIndex, Dimensions};
pub use rule::{next_state, ALIVE, DEAD};
pub use stepping::{step_generation, step_generation_parallel};
