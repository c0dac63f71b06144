//! Duel Tetris (workspace facade crate).
//!
//! This package keeps the `duel_tetris::{core,types}` public API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use duel_tetris_core as core;
pub use duel_tetris_types as types;
