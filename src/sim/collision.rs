//! Collision checks: exact cell equality, no radius.

use super::state::{Mover, Pos};

/// True if the player shares a cell with any enemy.
pub fn enemy_hit(player: Pos, enemies: &[Mover]) -> bool {
    enemies.iter().any(|enemy| enemy.pos == player)
}

/// True if the player shares a cell with the target.
pub fn target_caught(player: Pos, target: &Mover) -> bool {
    target.pos == player
}
