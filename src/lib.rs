//! Life Kernel - Conway's Game of Life over host-owned memory
//!
//! The kernel reads the current generation from the first half of a flat
//! byte buffer and writes the next generation into the second half. Hosts
//! use it directly from Rust through [`Kernel`] or load it as a shared
//! library through the C ABI in [`ffi`].

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod host;
pub mod state;

pub use automaton::{CellIndex, Dimensions};
pub use config::KernelConfig;
pub use error::{KernelError, Result};
pub use host::{FrameLimiter, HostMemory, Simulation};
pub use state::Kernel;
