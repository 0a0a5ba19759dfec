//! Game state and core simulation types

use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::consts::*;

/// A cell coordinate on the grid
///
/// `row` is the first index of the grid matrix, `col` the second. Both stay
/// in [0, GRID_SIZE) after any update; the bounded-move rule in
/// [`crate::sim::motion::step`] is the only way positions change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        let size = GRID_SIZE as i32;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }
}

/// A single directional key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Move {
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Map a wire key byte to a move; bytes outside 1..=4 have no mapping
    /// and are dropped by the caller.
    pub fn from_byte(byte: u8) -> Option<Move> {
        match byte {
            1 => Some(Move::Up),
            2 => Some(Move::Down),
            3 => Some(Move::Left),
            4 => Some(Move::Right),
            _ => None,
        }
    }

    /// Unit (row, col) delta for this move
    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

/// The set of distinct moves decoded from one input frame
///
/// Duplicate key bytes collapse on insert, so {UP, UP, RIGHT} steers the
/// same as {UP, RIGHT}.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveSet(u8);

impl MoveSet {
    pub const EMPTY: MoveSet = MoveSet(0);

    pub fn insert(&mut self, mv: Move) {
        self.0 |= 1 << mv as u8;
    }

    pub fn contains(self, mv: Move) -> bool {
        self.0 & (1 << mv as u8) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Move> {
        Move::ALL.into_iter().filter(move |mv| self.contains(*mv))
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut set = MoveSet::EMPTY;
        for mv in iter {
            set.insert(mv);
        }
        set
    }
}

/// A 64x64 byte matrix, used both for the persistent ink field and for
/// composed output frames. Row-major on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid(pub [[u8; GRID_SIZE]; GRID_SIZE]);

impl Grid {
    pub const fn zeroed() -> Self {
        Grid([[0; GRID_SIZE]; GRID_SIZE])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8; GRID_SIZE]> {
        self.0.iter()
    }
}

impl Index<Pos> for Grid {
    type Output = u8;

    fn index(&self, pos: Pos) -> &u8 {
        &self.0[pos.row as usize][pos.col as usize]
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut u8 {
        &mut self.0[pos.row as usize][pos.col as usize]
    }
}

/// A non-player moving entity: the target or one enemy
#[derive(Debug, Clone)]
pub struct Mover {
    pub pos: Pos,
    /// Previous positions, newest first, capped at TRAIL_LENGTH
    pub trail: Vec<Pos>,
}

impl Mover {
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Record the current position to the trail; call immediately before
    /// the entity moves, so the trail holds pre-move positions.
    pub fn record_trail(&mut self) {
        self.trail.insert(0, self.pos);
        self.trail.truncate(TRAIL_LENGTH);
    }
}

/// Current phase of the session
///
/// `Won` and `Lost` are terminal: the tick function never leaves them, so
/// the "both flags set" state is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player reached the target
    Won,
    /// Player shares a cell with an enemy
    Lost,
}

/// Complete game state, exclusively owned by the loop that ticks it
#[derive(Debug, Clone)]
pub struct GameState {
    /// Persistent ink field; only player occupancy mutates it, never reset
    pub field: Grid,
    pub player: Pos,
    pub target: Mover,
    pub enemies: Vec<Mover>,
    pub phase: GamePhase,
    /// Completed RUNNING ticks
    pub ticks: u64,
}

impl GameState {
    /// Create a fresh session: player at the origin, target and enemies at
    /// uniformly random cells. The starting cell is not inked.
    pub fn new(rng: &mut impl Rng) -> Self {
        let target = Mover::new(random_pos(rng));
        let enemies = (0..ENEMY_COUNT).map(|_| Mover::new(random_pos(rng))).collect();
        Self {
            field: Grid::zeroed(),
            player: Pos::new(0, 0),
            target,
            enemies,
            phase: GamePhase::Running,
            ticks: 0,
        }
    }
}

fn random_pos(rng: &mut impl Rng) -> Pos {
    let size = GRID_SIZE as i32;
    Pos::new(rng.random_range(0..size), rng.random_range(0..size))
}
