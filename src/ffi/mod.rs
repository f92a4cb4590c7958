//! C FFI layer for foreign hosts.
//!
//! This module exports C ABI functions for hosts that load the kernel as a
//! shared library and drive it over their own linear memory.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `state` and `automaton`. These functions are thin
//! wrappers that handle null checks, pointer safety, and status codes.

pub mod kernel;
pub mod lifecycle;

pub use kernel::{lk_init, lk_required_bytes, lk_step, LK_NULL, LK_OK};
pub use lifecycle::{lk_create, lk_create_with_threads, lk_destroy, lk_get_generation};
