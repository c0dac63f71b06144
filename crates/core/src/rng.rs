//! RNG module - the injected randomness source
//!
//! All randomness in the engine flows through [`GameRng`]: piece kind and
//! color at spawn, and the hole column of each outgoing garbage line. The
//! generator is seeded at board construction, so a whole game replays
//! identically from its seed.
//!
//! Kind and color are drawn independently and uniformly; there is no bag.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{PieceKind, PALETTE_COLORS};

/// Seedable randomness source owned by one board
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: StdRng,
}

impl GameRng {
    /// Create a generator from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a piece kind, uniformly over all seven
    pub fn piece_kind(&mut self) -> PieceKind {
        let all = PieceKind::all();
        all[self.rng.gen_range(0..all.len())]
    }

    /// Draw a palette color index in 1..=7
    pub fn color(&mut self) -> u8 {
        self.rng.gen_range(1..=PALETTE_COLORS)
    }

    /// Draw a garbage hole column in [0, width)
    pub fn hole_column(&mut self, width: usize) -> usize {
        self.rng.gen_range(0..width)
    }
}
