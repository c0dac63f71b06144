//! Scoring module - score, level, and speed lookups
//!
//! Pure functions over the tables in `duel-tetris-types`. The board applies
//! these on every lock; nothing here touches game state.
//!
//! The level formula is absolute, not incremental: a single multi-line clear
//! that crosses several multiples of ten raises the level past all of them
//! at once.

use crate::types::{
    DROP_INTERVAL_FRAMES, FASTEST_DROP_FRAMES, HARD_DROP_POINTS_PER_CELL,
    LINES_PER_LEVEL, LINE_SCORES, MAX_LEVEL,
};

/// Points awarded for clearing `lines` rows at once at the given level
///
/// Base points follow [`LINE_SCORES`]; counts above 4 (unreachable with
/// standard pieces) fall back to `lines * 100`. The caller passes the level
/// in effect before the clear.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    let base = match lines {
        0 => 0,
        1..=4 => LINE_SCORES[lines],
        _ => lines as u32 * 100,
    };
    base * level
}

/// Level implied by a cumulative line count: `min(15, lines / 10 + 1)`
pub fn level_for_lines(total_lines: u32) -> u32 {
    (total_lines / LINES_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Frames between gravity drops at the given level
///
/// Levels 1-15 index the fixed table; anything outside maps to the fastest
/// interval.
pub fn drop_interval_frames(level: u32) -> u32 {
    match level {
        1..=15 => DROP_INTERVAL_FRAMES[(level - 1) as usize],
        _ => FASTEST_DROP_FRAMES,
    }
}

/// Points awarded for a hard drop descending `cells` rows
pub fn hard_drop_score(cells: u32) -> u32 {
    cells * HARD_DROP_POINTS_PER_CELL
}

/// Garbage lines owed to the opponent for clearing `lines` rows at once
///
/// Singles send nothing; every further simultaneous line sends one.
pub fn garbage_for_clear(lines: usize) -> usize {
    if lines > 1 {
        lines - 1
    } else {
        0
    }
}
