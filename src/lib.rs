//! Gridchase - a chase/evade arcade game on a 64x64 grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, trails, frames)
//! - `protocol`: Length-framed key input decode, raw frame encode
//! - `runner`: The decode -> tick -> compose -> emit loop
//!
//! The process is a stdin/stdout coprocess: the host sends one framed key
//! batch per tick and renders the 4096-byte grid frame it gets back.

pub mod protocol;
pub mod runner;
pub mod sim;

pub use sim::{GamePhase, GameState, Grid, Move, MoveSet, Pos};

/// Game configuration constants
pub mod consts {
    /// Grid edge length; positions live in [0, GRID_SIZE)^2
    pub const GRID_SIZE: usize = 64;
    /// Bytes per emitted frame (row-major, one byte per cell)
    pub const FRAME_BYTES: usize = GRID_SIZE * GRID_SIZE;

    /// Number of wandering enemies
    pub const ENEMY_COUNT: usize = 32;
    /// Positions kept per entity trail, most recent first
    pub const TRAIL_LENGTH: usize = 4;

    /// Cell colors (256-color terminal palette indices)
    pub const COLOR_BACKGROUND: u8 = 234;
    pub const COLOR_TARGET: u8 = 118;
    pub const COLOR_ENEMY: u8 = 160;
    /// Trail fade palettes, indexed by trail position (0 = most recent)
    pub const TARGET_TRAIL_COLORS: [u8; TRAIL_LENGTH] = [119, 120, 121, 122];
    pub const ENEMY_TRAIL_COLORS: [u8; TRAIL_LENGTH] = [196, 167, 203, 174];

    /// Row-0 banner bytes for terminal frames
    pub const LOSE_BANNER: &[u8] = b"LOSE";
    pub const WON_BANNER: &[u8] = b"WON";
}
