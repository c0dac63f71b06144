//! Versus module - the two-board match coordinator
//!
//! `Versus` owns both boards and is the only place that connects them. After
//! every mutation it drains each board's outgoing garbage and enqueues it on
//! the other board, so the boards themselves never hold references to each
//! other. The opponent link a board carries is just the other player's id,
//! wired here at construction.
//!
//! Both boards are driven from one call sequence; there is no internal
//! concurrency. The shell decides when each player's gravity elapses and
//! calls [`Versus::tick`] accordingly.

use crate::board::Board;
use crate::types::{GameAction, PlayerId};

/// A competitive match between two boards in one process
#[derive(Debug, Clone)]
pub struct Versus {
    boards: [Board; 2],
}

impl Versus {
    /// Create a match of two equally sized boards with their own seeds
    ///
    /// Players get ids 1 and 2 and are linked as each other's opponent.
    pub fn new(width: usize, height: usize, seeds: [u64; 2]) -> Self {
        let mut left = Board::new(width, height, 1, seeds[0]);
        let mut right = Board::new(width, height, 2, seeds[1]);
        left.set_opponent(right.player_id());
        right.set_opponent(left.player_id());
        Self {
            boards: [left, right],
        }
    }

    /// Reset both boards and spawn their first pieces
    pub fn start(&mut self) {
        for board in &mut self.boards {
            board.reset();
        }
    }

    /// Read access to one board (player 0 or 1)
    pub fn board(&self, player: usize) -> &Board {
        &self.boards[player]
    }

    /// Apply a shell action to one player's board, then route garbage
    pub fn apply(&mut self, player: usize, action: GameAction) -> bool {
        let handled = self.boards[player].apply_action(action);
        self.route_garbage();
        handled
    }

    /// One gravity step for a player: drop by one or lock, then route garbage
    ///
    /// Returns what [`Board::soft_drop_or_lock`] returned: false means the
    /// piece locked (or the board is paused or finished).
    pub fn tick(&mut self, player: usize) -> bool {
        let moved = self.boards[player].soft_drop_or_lock();
        self.route_garbage();
        moved
    }

    /// Move staged garbage from each board to the other's pending queue
    fn route_garbage(&mut self) {
        for sender in 0..self.boards.len() {
            let holes = self.boards[sender].take_outgoing_garbage();
            if !holes.is_empty() {
                self.boards[1 - sender].queue_garbage(&holes);
            }
        }
    }

    /// True once either board has topped out
    pub fn is_over(&self) -> bool {
        self.boards.iter().any(|board| board.game_over())
    }

    /// Id of the surviving player, if exactly one board has topped out
    pub fn winner(&self) -> Option<PlayerId> {
        match (self.boards[0].game_over(), self.boards[1].game_over()) {
            (true, false) => Some(self.boards[1].player_id()),
            (false, true) => Some(self.boards[0].player_id()),
            _ => None,
        }
    }
}
