//! Grid dimensions, validated cell indices and toroidal neighbor lookup.
//!
//! A grid lives in a flat byte buffer holding two generations back-to-back:
//! bytes `[0, size)` are the current generation and `[size, 2 * size)` the
//! next one.

use crate::error::{KernelError, Result};

/// Fixed width and height of a grid. Both are always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width: usize,
    height: usize,
    size: usize,
}

/// A cell position already checked against its grid's dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellIndex {
    row: usize,
    column: usize,
    offset: usize,
}

impl CellIndex {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Linear offset within one generation.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Dimensions {
    /// Validate host-supplied dimensions.
    ///
    /// Rejects zero or negative sides, and grids whose double-buffered length
    /// would not fit in `usize`.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let invalid = || KernelError::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        };

        if width <= 0 || height <= 0 {
            return Err(invalid());
        }

        let (w, h) = (width as usize, height as usize);
        let size = w.checked_mul(h).ok_or_else(invalid)?;
        size.checked_mul(2).ok_or_else(invalid)?;

        Ok(Dimensions {
            width: w,
            height: h,
            size,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cells in one generation.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bytes needed to hold the current and next generations.
    pub fn required_len(&self) -> usize {
        self.size * 2
    }

    /// Bounds-checked cell index. `None` if the position lies off the grid.
    pub fn cell(&self, row: usize, column: usize) -> Option<CellIndex> {
        if row < self.height && column < self.width {
            Some(CellIndex {
                row,
                column,
                offset: row * self.width + column,
            })
        } else {
            None
        }
    }

    /// Map any row onto the torus: `-1` becomes `height - 1`, `height`
    /// becomes `0`.
    #[inline]
    pub fn wrap_row(&self, row: i64) -> usize {
        row.rem_euclid(self.height as i64) as usize
    }

    /// Map any column onto the torus.
    #[inline]
    pub fn wrap_column(&self, column: i64) -> usize {
        column.rem_euclid(self.width as i64) as usize
    }

    /// Wrapped cell index for an arbitrary signed position.
    pub fn wrapped(&self, row: i64, column: i64) -> CellIndex {
        let row = self.wrap_row(row);
        let column = self.wrap_column(column);
        CellIndex {
            row,
            column,
            offset: row * self.width + column,
        }
    }

    /// The eight neighbors of `cell`, row by row from the upper left.
    ///
    /// On grids narrower than three cells some neighbors coincide with each
    /// other or with `cell` itself.
    pub fn neighbors(&self, cell: CellIndex) -> [CellIndex; 8] {
        let r = cell.row as i64;
        let c = cell.column as i64;
        [
            self.wrapped(r - 1, c - 1),
            self.wrapped(r - 1, c),
            self.wrapped(r - 1, c + 1),
            self.wrapped(r, c - 1),
            self.wrapped(r, c + 1),
            self.wrapped(r + 1, c - 1),
            self.wrapped(r + 1, c),
            self.wrapped(r + 1, c + 1),
        ]
    }

    /// Split a host buffer into the current generation (read) and the next
    /// generation (write). Bytes past `2 * size` are left out of both halves.
    pub fn split<'a>(&self, buffer: &'a mut [u8]) -> Result<(&'a [u8], &'a mut [u8])> {
        let required = self.required_len();
        if buffer.len() < required {
            return Err(KernelError::BufferTooSmall {
                required,
                actual: buffer.len(),
            });
        }

        let (current, next) = buffer[..required].split_at_mut(self.size);
        Ok((&*current, next))
    }

    /// The current generation of a host buffer.
    pub fn current<'a>(&self, buffer: &'a [u8]) -> Result<&'a [u8]> {
        if buffer.len() < self.required_len() {
            return Err(KernelError::BufferTooSmall {
                required: self.required_len(),
                actual: buffer.len(),
            });
        }
        Ok(&buffer[..self.size])
    }
}

/// Count live neighbors of `cell` in one generation. Any non-zero byte is
/// alive.
pub fn count_neighbors(dims: &Dimensions, generation: &[u8], cell: CellIndex) -> u8 {
    dims.neighbors(cell)
        .iter()
        .filter(|n| generation[n.offset()] != 0)
        .count() as u8
}
