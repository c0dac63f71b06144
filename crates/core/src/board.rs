//! Board module - complete per-player game state
//!
//! A `Board` owns the grid of locked cells, the active/next/held pieces, and
//! every counter and flag of one player's game: score, level, lines, pause
//! and game-over state, and the garbage queues of competitive play.
//!
//! Every mutation reports policy rejection through its return value instead
//! of an error type: an action returns `false` (or is a silent no-op) when
//! the board is paused, the game is over, there is no active piece, or the
//! requested transform would collide. Two conditions end the game, both by
//! setting `game_over`: a freshly spawned piece that collides immediately
//! ("block out"), and a hold swap whose incoming piece collides. The only
//! way back is [`Board::reset`].
//!
//! Boards never hold a reference to their opponent. Outgoing garbage is
//! staged in a buffer that the match coordinator drains with
//! [`Board::take_outgoing_garbage`] and delivers with
//! [`Board::queue_garbage`]; pending garbage surfaces at the receiver's next
//! spawn.

use std::collections::VecDeque;

use log::debug;

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::GameRng;
use crate::scoring;
use crate::types::{Cell, GameAction, PlayerId, Stats};

/// One player's complete game state
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    player_id: PlayerId,
    rng: GameRng,
    current: Option<Piece>,
    next: Option<Piece>,
    held: Option<Piece>,
    can_hold: bool,
    score: u32,
    lines_cleared: u32,
    level: u32,
    game_over: bool,
    paused: bool,
    opponent: Option<PlayerId>,
    lines_sent: u32,
    pending_garbage: VecDeque<usize>,
    outgoing_garbage: Vec<usize>,
}

impl Board {
    /// Create an empty board; call [`Board::reset`] to spawn the first piece
    pub fn new(width: usize, height: usize, player_id: PlayerId, seed: u64) -> Self {
        Self {
            grid: Grid::new(width, height),
            player_id,
            rng: GameRng::new(seed),
            current: None,
            next: None,
            held: None,
            can_hold: true,
            score: 0,
            lines_cleared: 0,
            level: 1,
            game_over: false,
            paused: false,
            opponent: None,
            lines_sent: 0,
            pending_garbage: VecDeque::new(),
            outgoing_garbage: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// Read access to the locked-cell grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell at (x, y); `None` if out of bounds
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.grid.cell(x, y)
    }

    pub fn current_piece(&self) -> Option<Piece> {
        self.current
    }

    pub fn next_piece(&self) -> Option<Piece> {
        self.next
    }

    pub fn held_piece(&self) -> Option<Piece> {
        self.held
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn lines_sent(&self) -> u32 {
        self.lines_sent
    }

    /// Number of garbage lines waiting to surface at the next spawn
    pub fn pending_garbage_count(&self) -> usize {
        self.pending_garbage.len()
    }

    /// Statistics snapshot for observers
    pub fn stats(&self) -> Stats {
        Stats {
            score: self.score,
            level: self.level,
            lines_cleared: self.lines_cleared,
            lines_sent: self.lines_sent,
        }
    }

    /// Link the opponent's id; garbage is generated only while linked
    ///
    /// Set once at match setup. The id is an opaque handle for the match
    /// coordinator, not a reference.
    pub fn set_opponent(&mut self, opponent: PlayerId) {
        self.opponent = Some(opponent);
    }

    pub fn opponent(&self) -> Option<PlayerId> {
        self.opponent
    }

    /// Frames the shell should wait between gravity steps at this level
    pub fn drop_interval_frames(&self) -> u32 {
        scoring::drop_interval_frames(self.level)
    }

    /// Spawn column for this board's width; 3 on the default 10-wide board
    fn spawn_x(&self) -> i32 {
        (self.grid.width() as i32 - 4) / 2
    }

    fn fresh_piece(&mut self) -> Piece {
        let kind = self.rng.piece_kind();
        let color = self.rng.color();
        Piece::new(kind, color, self.spawn_x(), 0)
    }

    /// Toggle pause; ignored once the game is over
    pub fn toggle_pause(&mut self) {
        if !self.game_over {
            self.paused = !self.paused;
        }
    }

    /// Promote the next piece to current and refill the preview
    ///
    /// Pending garbage surfaces here, before the block-out check, so garbage
    /// queued while a piece was falling lands under the new one. A colliding
    /// fresh piece is left in place and ends the game.
    pub fn spawn_piece(&mut self) {
        if self.next.is_none() {
            self.next = Some(self.fresh_piece());
        }
        self.current = self.next.take();
        self.next = Some(self.fresh_piece());
        self.can_hold = true;

        self.apply_pending_garbage();

        if let Some(piece) = self.current {
            if self.is_collision(&piece) {
                debug!("player {}: blocked out on spawn", self.player_id);
                self.game_over = true;
            }
        }
    }

    /// Check a piece against the walls, the floor, and the locked stack
    ///
    /// Rows above the visible board (y < 0) never collide with a boundary;
    /// only walls, the floor, and occupied cells count.
    pub fn is_collision(&self, piece: &Piece) -> bool {
        piece.cells().iter().any(|&(x, y)| {
            if x < 0 || x >= self.grid.width() as i32 || y >= self.grid.height() as i32 {
                return true;
            }
            y >= 0 && self.grid.is_occupied(x, y)
        })
    }

    /// Would translating the piece by (dx, dy) be collision-free?
    ///
    /// Works on a copy; neither the piece nor the board is mutated.
    pub fn is_valid_move(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        let mut trial = *piece;
        trial.translate(dx, dy);
        !self.is_collision(&trial)
    }

    /// Would rotating the piece counterclockwise be collision-free?
    pub fn is_valid_rotation(&self, piece: &Piece) -> bool {
        let mut trial = *piece;
        trial.rotate_ccw();
        !self.is_collision(&trial)
    }

    /// Move the active piece by (dx, dy) if allowed
    pub fn move_piece(&mut self, dx: i32, dy: i32) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };
        if !self.is_valid_move(&piece, dx, dy) {
            return false;
        }
        let mut moved = piece;
        moved.translate(dx, dy);
        self.current = Some(moved);
        true
    }

    /// Rotate the active piece counterclockwise if allowed
    ///
    /// There is no kick search: a rotation that collides is rejected and the
    /// piece keeps its rotation.
    pub fn rotate_piece(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };
        if !self.is_valid_rotation(&piece) {
            return false;
        }
        let mut rotated = piece;
        rotated.rotate_ccw();
        self.current = Some(rotated);
        true
    }

    /// Drop the active piece one row, locking it if it cannot move
    ///
    /// Returns true if the piece moved down. A false return with an active
    /// piece means the piece locked, not that the input was rejected.
    pub fn soft_drop_or_lock(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };
        if self.is_valid_move(&piece, 0, 1) {
            let mut dropped = piece;
            dropped.translate(0, 1);
            self.current = Some(dropped);
            true
        } else {
            self.lock_piece();
            false
        }
    }

    /// Drop the active piece to its resting position and lock it
    ///
    /// Awards 2 points per cell descended, before any line-clear bonus from
    /// the same lock.
    pub fn hard_drop(&mut self) {
        if self.paused || self.game_over {
            return;
        }
        let Some(mut piece) = self.current else {
            return;
        };
        let mut descended: u32 = 0;
        while self.is_valid_move(&piece, 0, 1) {
            piece.translate(0, 1);
            descended += 1;
        }
        self.current = Some(piece);
        self.score += scoring::hard_drop_score(descended);
        self.lock_piece();
    }

    /// Stash the active piece, once per spawn
    ///
    /// The first hold stores the piece and advances the queue; later holds
    /// swap kind and color with the stored piece. The incoming piece starts
    /// at the spawn position in rotation 0; if it collides there the game is
    /// over (the hold is not rejected).
    pub fn hold_piece(&mut self) -> bool {
        if !self.can_hold || self.paused || self.game_over {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };

        match self.held {
            None => {
                self.held = Some(Piece::new(current.kind, current.color, self.spawn_x(), 0));
                self.spawn_piece();
            }
            Some(held) => {
                let incoming = Piece::new(held.kind, held.color, self.spawn_x(), 0);
                self.held = Some(Piece::new(current.kind, current.color, self.spawn_x(), 0));
                self.current = Some(incoming);
                if self.is_collision(&incoming) {
                    debug!("player {}: hold swap collided", self.player_id);
                    self.game_over = true;
                }
            }
        }

        self.can_hold = false;
        true
    }

    /// Commit the active piece to the grid and advance the game
    ///
    /// Cells above the visible board (y < 0) are discarded. Clears lines,
    /// scores them against the pre-clear level, raises the level if the
    /// absolute formula says so, stages garbage for a linked opponent, and
    /// spawns the next piece.
    pub fn lock_piece(&mut self) {
        let Some(piece) = self.current else {
            return;
        };

        for &(x, y) in piece.cells().iter() {
            if y >= 0 {
                self.grid.set(x, y, piece.color);
            }
        }

        let cleared = self.clear_lines();
        if cleared > 0 {
            self.lines_cleared += cleared as u32;
            self.score += scoring::line_clear_score(cleared, self.level);

            let new_level = scoring::level_for_lines(self.lines_cleared);
            if new_level > self.level {
                self.level = new_level;
            }

            if self.opponent.is_some() {
                let units = scoring::garbage_for_clear(cleared);
                for _ in 0..units {
                    let hole = self.rng.hole_column(self.grid.width());
                    self.outgoing_garbage.push(hole);
                }
                self.lines_sent += units as u32;
            }
        }

        self.spawn_piece();
    }

    /// Remove all complete rows; returns how many were removed
    pub fn clear_lines(&mut self) -> usize {
        self.grid.clear_full_rows()
    }

    /// Enqueue garbage lines to surface at this board's next spawn
    pub fn queue_garbage(&mut self, holes: &[usize]) {
        self.pending_garbage.extend(holes.iter().copied());
    }

    /// Drain the garbage staged for the opponent since the last call
    pub fn take_outgoing_garbage(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.outgoing_garbage)
    }

    fn apply_pending_garbage(&mut self) {
        let mut applied = 0;
        while let Some(hole) = self.pending_garbage.pop_front() {
            self.grid.push_garbage_row(hole);
            applied += 1;
        }
        if applied > 0 {
            debug!("player {}: {} garbage line(s) surfaced", self.player_id, applied);
        }
    }

    /// Where the active piece would land, without mutating anything
    pub fn ghost_piece(&self) -> Option<Piece> {
        let mut ghost = self.current?;
        while self.is_valid_move(&ghost, 0, 1) {
            ghost.translate(0, 1);
        }
        Some(ghost)
    }

    /// Reinitialize the board and spawn the first piece
    ///
    /// The rng stream and the opponent link carry over; everything else
    /// returns to its starting value. This is the only recovery from
    /// `game_over`.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.current = None;
        self.next = None;
        self.held = None;
        self.can_hold = true;
        self.score = 0;
        self.lines_cleared = 0;
        self.level = 1;
        self.game_over = false;
        self.paused = false;
        self.lines_sent = 0;
        self.pending_garbage.clear();
        self.outgoing_garbage.clear();
        self.spawn_piece();
    }

    /// Apply one shell action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1, 0),
            GameAction::MoveRight => self.move_piece(1, 0),
            GameAction::Rotate => self.rotate_piece(),
            GameAction::SoftDrop => self.soft_drop_or_lock(),
            GameAction::HardDrop => {
                if self.paused || self.game_over || self.current.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Hold => self.hold_piece(),
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.toggle_pause();
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, piece: Piece) {
        self.current = Some(piece);
    }
}
