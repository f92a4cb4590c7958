//! Kernel configuration.

use tracing::warn;

/// Environment variable read by [`KernelConfig::from_env`].
pub const THREADS_ENV: &str = "LIFE_KERNEL_THREADS";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KernelConfig {
    /// Worker threads used inside a single step. `0` and `1` step on the
    /// calling thread.
    pub threads: usize,
}

impl KernelConfig {
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.threads > 1
    }

    pub fn from_env() -> Self {
        Self::from_value(std::env::var(THREADS_ENV).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        match raw.trim().parse::<usize>() {
            Ok(threads) => Self::default().with_threads(threads),
            Err(_) => {
                warn!(value = raw, "ignoring unparseable {}", THREADS_ENV);
                Self::default()
            }
        }
    }
}
