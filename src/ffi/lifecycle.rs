//! Kernel creation, destruction, and generation queries.

use tracing::warn;

use crate::config::KernelConfig;
use crate::state::Kernel;

/// Creates a new single-threaded kernel and returns an opaque pointer.
///
/// # Safety
/// The returned pointer must eventually be freed with `lk_destroy()`.
#[no_mangle]
pub extern "C" fn lk_create() -> *mut Kernel {
    Box::into_raw(Box::new(Kernel::new()))
}

/// Creates a kernel that spreads each step over `num_threads` workers.
///
/// # Returns
/// A pointer to the new Kernel, or null if the thread pool cannot be built.
#[no_mangle]
pub extern "C" fn lk_create_with_threads(num_threads: u8) -> *mut Kernel {
    let config = KernelConfig::default().with_threads(num_threads as usize);
    match Kernel::with_config(config) {
        Ok(kernel) => Box::into_raw(Box::new(kernel)),
        Err(e) => {
            warn!(error = %e, "lk_create_with_threads failed");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a kernel and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `lk_create*()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn lk_destroy(ptr: *mut Kernel) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the number of successful steps since init.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Kernel, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn lk_get_generation(ptr: *const Kernel) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}
