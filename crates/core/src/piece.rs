//! Piece module - tetromino shapes and the falling-piece value type
//!
//! Each piece kind defines a fixed set of rotation states. A state lists
//! exactly 4 occupied cells of a 4x4 local grid as row-major indices 0-15
//! (index = row * 4 + col). Kinds have different state counts: I, Z and S
//! have 2, T, J and L have 4, O has 1.
//!
//! Rotation here is a pure shape-state transition with no collision
//! awareness; the board decides whether a rotation is allowed.

use crate::types::PieceKind;

/// One rotation state: 4 cell indices of the 4x4 local grid
pub type RotationState = [u8; 4];

const I_STATES: [RotationState; 2] = [[4, 5, 6, 7], [1, 5, 9, 13]];
const Z_STATES: [RotationState; 2] = [[4, 5, 9, 10], [2, 6, 5, 9]];
const S_STATES: [RotationState; 2] = [[6, 7, 9, 10], [1, 5, 6, 10]];
const T_STATES: [RotationState; 4] =
    [[1, 2, 5, 9], [0, 4, 5, 6], [1, 5, 9, 8], [4, 5, 6, 10]];
const J_STATES: [RotationState; 4] =
    [[1, 2, 6, 10], [5, 6, 7, 9], [2, 6, 10, 11], [3, 5, 6, 7]];
const L_STATES: [RotationState; 4] =
    [[1, 4, 5, 6], [1, 4, 5, 9], [4, 5, 6, 9], [1, 5, 6, 9]];
const O_STATES: [RotationState; 1] = [[1, 2, 5, 6]];

/// Get the rotation states for a piece kind
pub fn rotation_states(kind: PieceKind) -> &'static [RotationState] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::O => &O_STATES,
    }
}

/// A falling tetromino: immutable shape, mutable position and rotation
///
/// `Piece` is a plain value. Speculative placements (ghost piece, move and
/// rotation validity checks) work on copies, so a failed trial never touches
/// the piece the board is tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    /// 0-based index into the kind's rotation states
    pub rotation: usize,
    /// Palette color index in 1..=7, assigned at spawn independently of kind
    pub color: u8,
    /// Board-cell x coordinate of the 4x4 local grid's top-left corner
    pub x: i32,
    /// Board-cell y coordinate of the 4x4 local grid's top-left corner
    pub y: i32,
}

impl Piece {
    /// Create a piece at the given origin, in its spawn rotation
    pub fn new(kind: PieceKind, color: u8, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation: 0,
            color,
            x,
            y,
        }
    }

    /// Number of distinct rotation states for this piece's kind
    pub fn rotation_count(&self) -> usize {
        rotation_states(self.kind).len()
    }

    /// Advance to the next rotation state (clockwise)
    pub fn rotate_cw(&mut self) {
        self.rotation = (self.rotation + 1) % self.rotation_count();
    }

    /// Retreat to the previous rotation state (counterclockwise)
    pub fn rotate_ccw(&mut self) {
        let count = self.rotation_count();
        self.rotation = (self.rotation + count - 1) % count;
    }

    /// Move the piece by the given offset; no bounds checking
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Absolute board coordinates of the 4 occupied cells, in table order
    pub fn cells(&self) -> [(i32, i32); 4] {
        let state = &rotation_states(self.kind)[self.rotation];
        let mut cells = [(0, 0); 4];
        for (cell, &idx) in cells.iter_mut().zip(state.iter()) {
            *cell = (self.x + (idx % 4) as i32, self.y + (idx / 4) as i32);
        }
        cells
    }
}
