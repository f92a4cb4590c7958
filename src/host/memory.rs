//! Shared memory as a host would lay it out for the kernel.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::automaton::{Dimensions, ALIVE, DEAD};
use crate::error::{KernelError, Result};

/// Linear memory grows in 64 KiB pages.
pub const PAGE_SIZE: usize = 0x10000;

/// Fraction of cells seeded alive when the host has no preference.
pub const DEFAULT_DENSITY: f64 = 0.1;

/// Round `bytes` up to a whole number of pages.
pub fn pages_for(bytes: usize) -> usize {
    bytes.div_ceil(PAGE_SIZE)
}

/// A zeroed, page-rounded buffer holding the current and next generations.
pub struct HostMemory {
    dims: Dimensions,
    bytes: Vec<u8>,
}

impl HostMemory {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let dims = Dimensions::new(width, height)?;
        let pages = pages_for(dims.required_len()).max(1);
        Ok(HostMemory {
            dims,
            bytes: vec![DEAD; pages * PAGE_SIZE],
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn pages(&self) -> usize {
        self.bytes.len() / PAGE_SIZE
    }

    /// The whole region, padding included, as handed to the kernel.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn current(&self) -> &[u8] {
        &self.bytes[..self.dims.size()]
    }

    pub fn next(&self) -> &[u8] {
        &self.bytes[self.dims.size()..self.dims.required_len()]
    }

    /// Whether the cell is alive in the current generation.
    pub fn cell(&self, row: usize, column: usize) -> Option<bool> {
        self.dims
            .cell(row, column)
            .map(|cell| self.bytes[cell.offset()] != 0)
    }

    /// Set a cell in the current generation. Off-grid positions are ignored.
    pub fn set_cell(&mut self, row: usize, column: usize, alive: bool) {
        if let Some(cell) = self.dims.cell(row, column) {
            self.bytes[cell.offset()] = if alive { ALIVE } else { DEAD };
        }
    }

    /// Fill the current generation with live cells at probability `density`.
    /// The same seed always produces the same generation.
    pub fn seed(&mut self, density: f64, seed: u64) -> Result<()> {
        if !(0.0..=1.0).contains(&density) {
            return Err(KernelError::InvalidDensity(density));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let size = self.dims.size();
        for cell in &mut self.bytes[..size] {
            *cell = if rng.gen_bool(density) { ALIVE } else { DEAD };
        }
        Ok(())
    }

    /// Copy the next generation over the current one.
    pub fn promote(&mut self) {
        let size = self.dims.size();
        self.bytes.copy_within(size..2 * size, 0);
    }

    pub fn clear(&mut self) {
        self.bytes.fill(DEAD);
    }
}
