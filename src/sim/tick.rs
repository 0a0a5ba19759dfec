//! One simulation tick
//!
//! Advances the game state deterministically for one decoded input frame.
//! Ordering within a tick is load-bearing: the player moves first, enemies
//! sweep second, the target moves last, and the two enemy-hit checks
//! bracket the enemy sweep so the LOST transition lands on the tick the
//! contact actually happens.

use super::collision::{enemy_hit, target_caught};
use super::motion::{WanderSource, steer_delta, step};
use super::state::{GamePhase, GameState, MoveSet};

/// Advance the state by one tick.
///
/// In a terminal phase this is a no-op; the caller still composes and
/// emits the banner frame so the peer is never starved of output.
pub fn tick<W: WanderSource>(state: &mut GameState, moves: MoveSet, wander: &mut W) {
    if state.phase != GamePhase::Running {
        return;
    }

    let mut lost = false;

    // Player steering. The hit check and the ink increment only apply when
    // the position actually changed: rejected and zero-delta moves leave
    // the field untouched.
    let next = step(state.player, steer_delta(moves));
    if next != state.player {
        state.player = next;
        if enemy_hit(state.player, &state.enemies) {
            lost = true;
        }
        let cell = &mut state.field[state.player];
        *cell = cell.wrapping_add(1);
    }

    // Enemy sweep: each records its pre-move position, then wanders. The
    // second hit check runs after the whole sweep so an enemy stepping
    // onto a stationary player still loses the game this tick.
    for enemy in &mut state.enemies {
        enemy.record_trail();
        enemy.pos = step(enemy.pos, wander.wander_delta());
    }
    if enemy_hit(state.player, &state.enemies) {
        lost = true;
    }

    state.target.record_trail();
    state.target.pos = step(state.target.pos, wander.wander_delta());
    let won = target_caught(state.player, &state.target);

    state.ticks += 1;

    // Lose wins ties: its checks run earlier in the tick.
    if lost {
        state.phase = GamePhase::Lost;
        log::info!("enemy contact at {:?}, tick {}", state.player, state.ticks);
    } else if won {
        state.phase = GamePhase::Won;
        log::info!("target caught at {:?}, tick {}", state.player, state.ticks);
    }
}
