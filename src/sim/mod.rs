//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per decoded input frame
//! - Seeded RNG only, threaded in by the caller
//! - Stable iteration order (enemies in vector order)
//! - No I/O or protocol dependencies

pub mod collision;
pub mod compose;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{enemy_hit, target_caught};
pub use compose::compose;
pub use motion::{WanderSource, steer_delta, step};
pub use state::{GamePhase, GameState, Grid, Move, MoveSet, Mover, Pos};
pub use tick::tick;
