//! Frame composition: layering the persistent ink field with the sprites
//! and trails, or substituting a banner frame once the session is over.
//!
//! Composition always works on a copy; the field itself is only ever
//! mutated by the tick function inking player cells.

use super::state::{GamePhase, GameState, Grid, Mover};
use crate::consts::*;

/// Build the frame to emit for the current phase.
pub fn compose(state: &GameState) -> Grid {
    match state.phase {
        GamePhase::Running => overlay(state),
        GamePhase::Lost => banner(&state.field, LOSE_BANNER),
        GamePhase::Won => banner(&state.field, WON_BANNER),
    }
}

/// Normal-state frame. Layer order, later writes winning: background on
/// zero cells, target, enemies, target trail, enemy trails. Enemies and
/// their trails paint in vector order, so overlapping trail cells resolve
/// to the last writer.
fn overlay(state: &GameState) -> Grid {
    let mut frame = state.field;
    for row in frame.0.iter_mut() {
        for cell in row.iter_mut() {
            if *cell == 0 {
                *cell = COLOR_BACKGROUND;
            }
        }
    }

    frame[state.target.pos] = COLOR_TARGET;
    for enemy in &state.enemies {
        frame[enemy.pos] = COLOR_ENEMY;
    }
    paint_trail(&mut frame, &state.target, &TARGET_TRAIL_COLORS);
    for enemy in &state.enemies {
        paint_trail(&mut frame, enemy, &ENEMY_TRAIL_COLORS);
    }
    frame
}

fn paint_trail(frame: &mut Grid, mover: &Mover, palette: &[u8; TRAIL_LENGTH]) {
    for (fade, pos) in mover.trail.iter().enumerate() {
        frame[*pos] = palette[fade];
    }
}

/// Terminal frame: the bare field with the banner bytes in row 0. No
/// background fill, no sprites.
fn banner(field: &Grid, text: &[u8]) -> Grid {
    let mut frame = *field;
    frame.0[0][..text.len()].copy_from_slice(text);
    frame
}
