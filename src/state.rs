//! The kernel instance and its `Uninitialized`/`Ready` lifecycle.

use rayon::ThreadPool;
use tracing::{debug, trace, warn};

use crate::automaton::{step_generation, step_generation_parallel, Dimensions};
use crate::config::KernelConfig;
use crate::error::{KernelError, Result};

/// A Game of Life kernel operating on a host-owned buffer.
///
/// The kernel holds only dimensions and a generation counter. Cells live in
/// the buffer passed to [`Kernel::step`]: bytes `[0, size)` are read as the
/// current generation and `[size, 2 * size)` are overwritten with the next.
#[derive(Default)]
pub struct Kernel {
    dims: Option<Dimensions>,
    generation: u64,
    pool: Option<ThreadPool>,
}

impl Kernel {
    /// An uninitialized, single-threaded kernel.
    pub fn new() -> Self {
        Self::default()
    }

    /// An uninitialized kernel, with a dedicated step pool if `config` asks
    /// for more than one thread.
    pub fn with_config(config: KernelConfig) -> Result<Self> {
        let pool = if config.is_parallel() {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .thread_name(|i| format!("life-step-{}", i))
                .build()?;
            debug!(threads = config.threads, "built step thread pool");
            Some(pool)
        } else {
            None
        };

        Ok(Kernel {
            dims: None,
            generation: 0,
            pool,
        })
    }

    /// Record the grid dimensions. Must succeed exactly once before any step.
    ///
    /// A failed call leaves the kernel uninitialized so it can be retried.
    pub fn init(&mut self, width: i32, height: i32) -> Result<()> {
        if let Some(dims) = self.dims {
            warn!(width, height, "rejecting second init");
            return Err(KernelError::AlreadyInitialized {
                width: dims.width(),
                height: dims.height(),
            });
        }

        let dims = Dimensions::new(width, height).inspect_err(|_| {
            warn!(width, height, "rejecting invalid dimensions");
        })?;

        debug!(width, height, size = dims.size(), "kernel initialized");
        self.dims = Some(dims);
        self.generation = 0;
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.dims.is_some()
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dims
    }

    /// Successful steps since init.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation, reading the current half of `buffer` and
    /// overwriting the next half. Bytes past `2 * size` are untouched.
    ///
    /// On error the buffer is not modified.
    pub fn step(&mut self, buffer: &mut [u8]) -> Result<()> {
        let dims = self.dims.ok_or_else(|| {
            warn!("step called before init");
            KernelError::NotInitialized
        })?;

        let (current, next) = dims.split(buffer).inspect_err(|e| {
            warn!(error = %e, "rejecting step");
        })?;

        match &self.pool {
            Some(pool) => step_generation_parallel(pool, &dims, current, next),
            None => step_generation(&dims, current, next),
        }

        self.generation += 1;
        trace!(generation = self.generation, "stepped");
        Ok(())
    }

    /// Live cells in the current half of `buffer`.
    pub fn population(&self, buffer: &[u8]) -> Result<usize> {
        let dims = self.dims.ok_or(KernelError::NotInitialized)?;
        Ok(dims.current(buffer)?.iter().filter(|&&c| c != 0).count())
    }
}
