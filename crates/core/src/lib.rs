//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and the
//! two-board match protocol. It has **zero dependencies** on UI, input
//! devices, or I/O, making it:
//!
//! - **Deterministic**: Same seeds produce identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run under any shell (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`piece`]: Tetromino shape tables and the piece value type
//! - [`grid`]: Locked-cell matrix with line clearing and garbage insertion
//! - [`board`]: Complete per-player state: active piece, hold, scoring, flags
//! - [`scoring`]: Score, level, and drop-speed lookup functions
//! - [`rng`]: Seedable randomness source for kinds, colors, and holes
//! - [`versus`]: Match coordinator pairing two boards for garbage exchange
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: piece kind and color are drawn independently at
//!   spawn; color is not derived from kind
//! - **Kick-free rotation**: the board surface rotates counterclockwise only
//!   and rejects any rotation that would collide
//! - **Hold**: store one piece for later use, once per spawn
//! - **Scoring**: fixed base per simultaneous-clear count, multiplied by the
//!   level in effect before the clear
//! - **Garbage**: clearing `n > 1` lines queues `n - 1` garbage lines on the
//!   opponent, each with one random hole; they surface at the opponent's
//!   next spawn
//!
//! # Timing
//!
//! The core owns no clock. [`Board::drop_interval_frames`] tells the shell
//! how many frames to wait between gravity steps; the shell calls
//! [`Board::soft_drop_or_lock`] (or [`Versus::tick`]) when that time
//! elapses.
//!
//! # Example
//!
//! ```
//! use duel_tetris_core::Versus;
//! use duel_tetris_core::types::GameAction;
//!
//! // Create a match and spawn the first pieces
//! let mut versus = Versus::new(10, 20, [12345, 67890]);
//! versus.start();
//!
//! // Drive player 0
//! versus.apply(0, GameAction::MoveLeft);
//! versus.apply(0, GameAction::HardDrop);
//!
//! // Hard drop awards points, so the score moved
//! assert!(versus.board(0).stats().score > 0);
//! ```

pub mod board;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod versus;

pub use duel_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use grid::Grid;
pub use piece::{rotation_states, Piece};
pub use rng::GameRng;
pub use versus::Versus;
