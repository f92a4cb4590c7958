//! Init and step over host-owned memory.

use crate::automaton::Dimensions;
use crate::error::KernelError;
use crate::state::Kernel;

/// Status returned for a successful call.
pub const LK_OK: i32 = 0;
/// Status returned when the kernel handle is null.
pub const LK_NULL: i32 = 1;

fn status(result: Result<(), KernelError>) -> i32 {
    match result {
        Ok(()) => LK_OK,
        Err(e) => e.code(),
    }
}

/// Records the grid dimensions. Must succeed once before `lk_step`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Kernel, or null
///
/// # Returns
/// 0 on success, 1 for a null pointer, 2 for non-positive dimensions,
/// 5 if the kernel was already initialized.
#[no_mangle]
pub unsafe extern "C" fn lk_init(ptr: *mut Kernel, width: i32, height: i32) -> i32 {
    if ptr.is_null() {
        return LK_NULL;
    }

    let kernel = &mut *ptr;
    status(kernel.init(width, height))
}

/// Advances one generation. Reads `buffer[0..size]` and writes
/// `buffer[size..2 * size]`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Kernel, or null
/// - `buffer` must point to `len` writable bytes, or be null
/// - no other code may read or write `buffer` during the call
///
/// # Returns
/// 0 on success, 1 for a null pointer, 3 before a successful `lk_init`,
/// 4 if `len` is shorter than `2 * width * height`.
#[no_mangle]
pub unsafe extern "C" fn lk_step(ptr: *mut Kernel, buffer: *mut u8, len: usize) -> i32 {
    if ptr.is_null() || buffer.is_null() {
        return LK_NULL;
    }

    let kernel = &mut *ptr;
    let buffer = std::slice::from_raw_parts_mut(buffer, len);
    status(kernel.step(buffer))
}

/// Bytes of shared memory a grid of this size needs (both generations).
///
/// # Returns
/// `2 * width * height`, or 0 for invalid dimensions.
#[no_mangle]
pub extern "C" fn lk_required_bytes(width: i32, height: i32) -> usize {
    Dimensions::new(width, height)
        .map(|dims| dims.required_len())
        .unwrap_or(0)
}
