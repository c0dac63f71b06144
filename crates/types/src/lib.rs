//! Shared types module - data structures and constants used across the engine
//!
//! This module defines the fundamental vocabulary of the game. All types are
//! pure data with no behavior beyond trivial conversions, making them usable
//! in any context (core logic, a rendering shell, serialized snapshots).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (boards may be constructed with others):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Cell Encoding
//!
//! The grid stores one `u8` per cell:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | 0 | empty |
//! | 1-7 | locked block, palette color index |
//! | 8 | garbage line |
//!
//! Piece color is assigned at spawn independently of the piece kind, so a
//! locked cell records the color the piece spawned with, not its kind.
//!
//! # Progression
//!
//! - Level runs 1 through [`MAX_LEVEL`] and is recomputed from total lines as
//!   `min(MAX_LEVEL, lines / LINES_PER_LEVEL + 1)`; it never decreases.
//! - Gravity is expressed in frames between drops, [`DROP_INTERVAL_FRAMES`],
//!   indexed by `level - 1`. Levels outside the table fall through to
//!   [`FASTEST_DROP_FRAMES`]. The shell owns the conversion of frames to
//!   wall-clock time.

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: usize = 20;

/// Value of an empty grid cell
pub const EMPTY_CELL: Cell = 0;

/// Cell value used for garbage lines received from the opponent
pub const GARBAGE_CELL: Cell = 8;

/// Number of palette colors a spawned piece can take (indices 1..=7)
pub const PALETTE_COLORS: u8 = 7;

/// Maximum level (15)
pub const MAX_LEVEL: u32 = 15;

/// Lines cleared per level step (10)
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points for clearing N lines simultaneously, indexed by N (0-4)
///
/// Counts above 4 are scored as `N * 100`. The base is multiplied by the
/// level in effect before the clear is applied.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per cell descended by a hard drop
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

/// Frames between gravity drops, indexed by `level - 1` for levels 1-15
///
/// Monotonically non-increasing: a higher level never falls slower.
pub const DROP_INTERVAL_FRAMES: [u32; 15] =
    [48, 43, 38, 33, 28, 23, 18, 13, 8, 6, 5, 4, 3, 2, 1];

/// Drop interval for any level outside the table
pub const FASTEST_DROP_FRAMES: u32 = 1;

/// A cell on the game board (see the module docs for the encoding)
pub type Cell = u8;

/// Opaque label distinguishing the two boards of a match
///
/// Never used in game logic; it only identifies a board to the match
/// coordinator and to observers.
pub type PlayerId = u8;

/// The seven tetromino piece kinds
///
/// Declared in shape-table order. Unlike guideline Tetris, a piece's display
/// color is not derived from its kind; it is drawn independently at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    Z,
    S,
    T,
    J,
    L,
    O,
}

impl PieceKind {
    /// All piece kinds, in shape-table order
    pub fn all() -> [PieceKind; 7] {
        [
            PieceKind::I,
            PieceKind::Z,
            PieceKind::S,
            PieceKind::T,
            PieceKind::J,
            PieceKind::L,
            PieceKind::O,
        ]
    }
}

/// Game actions a shell can apply to a board
///
/// Each action maps to one mutation on the board; the board reports whether
/// the action had any effect. Rotation is counterclockwise only at this
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece counterclockwise
    Rotate,
    /// Drop piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Instantly drop piece to its resting position and lock it
    HardDrop,
    /// Hold the current piece (once per spawn)
    Hold,
    /// Toggle pause state
    Pause,
    /// Reinitialize the board and spawn a fresh piece
    Restart,
}

/// Read-only statistics snapshot of one board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub lines_sent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_intervals_never_speed_down() {
        for pair in DROP_INTERVAL_FRAMES.windows(2) {
            assert!(pair[0] >= pair[1], "interval table must be non-increasing");
        }
        assert_eq!(DROP_INTERVAL_FRAMES[0], 48);
        assert_eq!(DROP_INTERVAL_FRAMES[14], FASTEST_DROP_FRAMES);
    }

    #[test]
    fn line_score_table() {
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
    }

    #[test]
    fn garbage_cell_is_outside_palette() {
        assert!(GARBAGE_CELL > PALETTE_COLORS);
        assert_ne!(GARBAGE_CELL, EMPTY_CELL);
    }

    #[test]
    fn piece_kind_all_lists_each_once() {
        let all = PieceKind::all();
        assert_eq!(all.len(), 7);
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
