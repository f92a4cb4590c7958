//! Game of Life stepping over a double-buffered toroidal grid.
//!
//! All reads come from the current generation and all writes go to the next
//! generation, so rows can be computed in any order (or in parallel) with the
//! same result. Every byte of the next generation is written on every step.

use rayon::prelude::*;
use rayon::ThreadPool;

use super::grid::Dimensions;
use super::rule::next_state;

/// Compute one row of the next generation into `out`.
fn step_row(dims: &Dimensions, current: &[u8], row: usize, out: &mut [u8]) {
    let width = dims.width();
    let row_above = dims.wrap_row(row as i64 - 1);
    let row_below = dims.wrap_row(row as i64 + 1);

    let above = &current[row_above * width..][..width];
    let here = &current[row * width..][..width];
    let below = &current[row_below * width..][..width];

    for (column, cell) in out.iter_mut().enumerate() {
        let left = dims.wrap_column(column as i64 - 1);
        let right = dims.wrap_column(column as i64 + 1);

        let neighbors = [
            above[left],
            above[column],
            above[right],
            here[left],
            here[right],
            below[left],
            below[column],
            below[right],
        ]
        .iter()
        .filter(|&&c| c != 0)
        .count() as u8;

        *cell = next_state(here[column] != 0, neighbors);
    }
}

/// Advance one generation on the calling thread.
///
/// `current` and `next` must both hold exactly `dims.size()` cells.
pub fn step_generation(dims: &Dimensions, current: &[u8], next: &mut [u8]) {
    debug_assert_eq!(current.len(), dims.size());
    debug_assert_eq!(next.len(), dims.size());

    for (row, out) in next.chunks_mut(dims.width()).enumerate() {
        step_row(dims, current, row, out);
    }
}

/// Advance one generation with rows spread across `pool`. Blocks until every
/// row is written.
pub fn step_generation_parallel(
    pool: &ThreadPool,
    dims: &Dimensions,
    current: &[u8],
    next: &mut [u8],
) {
    debug_assert_eq!(current.len(), dims.size());
    debug_assert_eq!(next.len(), dims.size());

    pool.install(|| {
        next.par_chunks_mut(dims.width())
            .enumerate()
            .for_each(|(row, out)| step_row(dims, current, row, out));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::grid::count_neighbors;
    use crate::automaton::rule::ALIVE;

    fn grid(width: i32, height: i32, live: &[(usize, usize)]) -> (Dimensions, Vec<u8>) {
        let dims = Dimensions::new(width, height).unwrap();
        let mut cells = vec![0u8; dims.size()];
        for &(row, column) in live {
            cells[dims.cell(row, column).unwrap().offset()] = ALIVE;
        }
        (dims, cells)
    }

    fn advance(dims: &Dimensions, current: &[u8]) -> Vec<u8> {
        // Stale garbage in the next half must never leak into the result.
        let mut next = vec![0xAB; dims.size()];
        step_generation(dims, current, &mut next);
        next
    }

    fn live_cells(dims: &Dimensions, cells: &[u8]) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for row in 0..dims.height() {
            for column in 0..dims.width() {
                if cells[dims.cell(row, column).unwrap().offset()] != 0 {
                    out.push((row, column));
                }
            }
        }
        out
    }

    #[test]
    fn test_lone_cell_dies() {
        let (dims, current) = grid(5, 5, &[(2, 2)]);
        let next = advance(&dims, &current);
        assert!(next.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_block_is_still_life() {
        let (dims, current) = grid(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let next = advance(&dims, &current);
        assert_eq!(next, current);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = [(2, 1), (2, 2), (2, 3)];
        let vertical = [(1, 2), (2, 2), (3, 2)];
        let (dims, current) = grid(5, 5, &horizontal);

        let gen1 = advance(&dims, &current);
        assert_eq!(live_cells(&dims, &gen1), vertical.to_vec());

        let gen2 = advance(&dims, &gen1);
        assert_eq!(live_cells(&dims, &gen2), horizontal.to_vec());
    }

    #[test]
    fn test_birth_needs_exactly_three() {
        // Dead center cell at (2, 2) with 2, 3 and 4 live neighbors.
        let (dims, two) = grid(5, 5, &[(1, 1), (1, 3)]);
        let (_, three) = grid(5, 5, &[(1, 1), (1, 3), (3, 2)]);
        let (_, four) = grid(5, 5, &[(1, 1), (1, 3), (3, 1), (3, 3)]);
        let center = dims.cell(2, 2).unwrap();

        assert_eq!(count_neighbors(&dims, &three, center), 3);
        assert_eq!(advance(&dims, &two)[center.offset()], 0);
        assert_eq!(advance(&dims, &three)[center.offset()], 1);
        assert_eq!(advance(&dims, &four)[center.offset()], 0);
    }

    #[test]
    fn test_survival_needs_two_or_three() {
        let neighbors = [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)];
        for n in 0..=8 {
            let mut live = vec![(2, 2)];
            live.extend_from_slice(&neighbors[..n]);
            let (dims, current) = grid(7, 7, &live);
            let center = dims.cell(2, 2).unwrap();
            assert_eq!(count_neighbors(&dims, &current, center) as usize, n);

            let expected = if n == 2 || n == 3 { 1 } else { 0 };
            assert_eq!(advance(&dims, &current)[center.offset()], expected, "n = {}", n);
        }
    }

    #[test]
    fn test_corner_sees_wrapped_neighbors() {
        // On a 3x3 torus every other cell neighbors (0, 0).
        let (dims, current) = grid(3, 3, &[(2, 2), (2, 0), (0, 2)]);
        let next = advance(&dims, &current);
        assert_eq!(next[0], 1, "corner should be born from wrapped neighbors");
    }

    #[test]
    fn test_glider_crosses_edge() {
        let (dims, mut current) = grid(6, 6, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        let population = live_cells(&dims, &current).len();
        // A glider returns to its shape shifted one cell diagonally every 4
        // generations; 24 generations wrap it fully around a 6x6 torus.
        for _ in 0..24 {
            current = advance(&dims, &current);
            assert_eq!(live_cells(&dims, &current).len(), population);
        }
        let (_, start) = grid(6, 6, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(current, start);
    }

    #[test]
    fn test_degenerate_grids() {
        // 1x1: the cell is its own eight neighbors.
        let (dims, current) = grid(1, 1, &[(0, 0)]);
        assert_eq!(advance(&dims, &current), vec![0]);
        let (dims, current) = grid(1, 1, &[]);
        assert_eq!(advance(&dims, &current), vec![0]);

        // 1xN strip: every step writes canonical bytes.
        let (dims, current) = grid(1, 6, &[(1, 0), (2, 0), (3, 0)]);
        let next = advance(&dims, &current);
        assert!(next.iter().all(|&c| c <= 1));
    }

    #[test]
    fn test_arbitrary_bytes_are_alive() {
        let (dims, mut current) = grid(4, 4, &[]);
        for &(row, column) in &[(1, 1), (1, 2), (2, 1), (2, 2)] {
            current[dims.cell(row, column).unwrap().offset()] = 0x80;
        }
        let next = advance(&dims, &current);
        let (_, block) = grid(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(next, block);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dims = Dimensions::new(37, 23).unwrap();
        let mut lcg: u32 = 12345;
        let current: Vec<u8> = (0..dims.size())
            .map(|_| {
                lcg = lcg.wrapping_mul(1103515245).wrapping_add(12345);
                ((lcg >> 16) % 3 == 0) as u8
            })
            .collect();

        let sequential = advance(&dims, &current);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap();
        let mut parallel = vec![0xCD; dims.size()];
        step_generation_parallel(&pool, &dims, &current, &mut parallel);

        assert_eq!(sequential, parallel);
    }
}
