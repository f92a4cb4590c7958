//! Host-side helpers around the kernel.
//!
//! A host owns the shared memory, seeds the first generation, calls
//! `step()` on a timer and promotes the next generation back into the
//! current one between calls. [`Simulation`] wires those pieces together for
//! Rust hosts; foreign hosts follow the same sequence through `ffi/`.

pub mod memory;
pub mod pacing;

pub use memory::{pages_for, HostMemory, DEFAULT_DENSITY, PAGE_SIZE};
pub use pacing::{FrameLimiter, DEFAULT_FPS};

use crate::config::KernelConfig;
use crate::error::Result;
use crate::state::Kernel;

/// A kernel bound to its shared memory and a frame limiter.
pub struct Simulation {
    kernel: Kernel,
    memory: HostMemory,
    limiter: FrameLimiter,
}

impl Simulation {
    pub fn new(width: i32, height: i32, config: KernelConfig) -> Result<Self> {
        let memory = HostMemory::new(width, height)?;
        let mut kernel = Kernel::with_config(config)?;
        kernel.init(width, height)?;
        Ok(Simulation {
            kernel,
            memory,
            limiter: FrameLimiter::default(),
        })
    }

    pub fn with_limiter(mut self, limiter: FrameLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn memory(&self) -> &HostMemory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut HostMemory {
        &mut self.memory
    }

    pub fn limiter(&self) -> &FrameLimiter {
        &self.limiter
    }

    pub fn generation(&self) -> u64 {
        self.kernel.generation()
    }

    pub fn population(&self) -> Result<usize> {
        self.kernel.population(self.memory.as_slice())
    }

    /// Step once and promote the result to the current generation.
    pub fn tick(&mut self) -> Result<()> {
        self.kernel.step(self.memory.as_mut_slice())?;
        self.memory.promote();
        Ok(())
    }

    /// Run `generations` ticks back to back.
    pub fn advance(&mut self, generations: u64) -> Result<()> {
        for _ in 0..generations {
            self.tick()?;
        }
        Ok(())
    }

    /// Run `frames` ticks, pacing each one with the frame limiter.
    pub fn run(&mut self, frames: u64) -> Result<()> {
        for _ in 0..frames {
            self.tick()?;
            self.limiter.delay();
        }
        Ok(())
    }
}
