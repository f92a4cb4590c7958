//! Error type shared by the kernel, the host helpers and the C ABI.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KernelError>;

#[derive(Debug, Error)]
pub enum KernelError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("step called before a successful init")]
    NotInitialized,

    #[error("buffer holds {actual} bytes but the grid needs {required}")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("kernel already initialized as {width}x{height}")]
    AlreadyInitialized { width: usize, height: usize },

    #[error("seed density {0} is outside [0, 1]")]
    InvalidDensity(f64),

    #[error("failed to build step thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl KernelError {
    /// Status code reported across the C ABI. `0` is success and `1` is
    /// reserved for null handles.
    pub fn code(&self) -> i32 {
        match self {
            KernelError::InvalidDimensions { .. } => 2,
            KernelError::NotInitialized => 3,
            KernelError::BufferTooSmall { .. } => 4,
            KernelError::AlreadyInitialized { .. } => 5,
            KernelError::ThreadPool(_) => 6,
            KernelError::InvalidDensity(_) => 7,
        }
    }
}
