//! Motion model: steering from key input, wander randomness, and the
//! bounded-move rule shared by every entity.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{MoveSet, Pos};
use crate::consts::GRID_SIZE;

/// Sum the unit deltas of every distinct move in the set.
///
/// Opposing moves cancel ({UP, DOWN} steers (0, 0)); orthogonal moves
/// compose into diagonals ({UP, RIGHT} steers (-1, 1)).
pub fn steer_delta(moves: MoveSet) -> (i32, i32) {
    moves.iter().fold((0, 0), |(row, col), mv| {
        let (dr, dc) = mv.delta();
        (row + dr, col + dc)
    })
}

/// Apply a delta under the bounded-move rule: if either coordinate of the
/// candidate leaves the grid, the whole move is rejected and the position
/// is returned unchanged. Never clamps a single axis.
pub fn step(pos: Pos, delta: (i32, i32)) -> Pos {
    let candidate = Pos::new(pos.row + delta.0, pos.col + delta.1);
    if candidate.in_bounds() { candidate } else { pos }
}

/// Source of per-tick wander deltas for the target and enemies.
///
/// Production uses a seeded [`Pcg32`]; tests substitute scripted
/// implementations to force or freeze entity motion.
pub trait WanderSource {
    /// Draw one (row, col) delta, each axis uniform over {-1, 0, 1}.
    fn wander_delta(&mut self) -> (i32, i32);
}

impl WanderSource for Pcg32 {
    fn wander_delta(&mut self) -> (i32, i32) {
        (self.random_range(-1..=1), self.random_range(-1..=1))
    }
}
