//! Conway's B3/S23 rule.

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// Next state of a cell given its current state and live neighbor count.
///
/// - Survival: a live cell with 2 or 3 live neighbors stays alive
/// - Birth: a dead cell with exactly 3 live neighbors becomes alive
/// - Every other cell is dead in the next generation
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> u8 {
    match (alive, neighbors) {
        (true, 2) | (true, 3) | (false, 3) => ALIVE,
        _ => DEAD,
    }
}
