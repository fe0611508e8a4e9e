//! Player collaborators.
//!
//! The engine asks the current player's `Agent` to pick from an eagerly
//! materialized legal move list; the answer is an index into that list. The
//! call is synchronous and must not touch session state. Strategy quality is
//! out of scope: the two agents here exist to drive tests and harnesses.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::moves::LegalMoves;

/// A decision-making collaborator for one seat.
pub trait Agent {
    /// Pick a move by index from `moves`.
    ///
    /// Returning an index outside the list is rejected by the session as an
    /// invalid move, never silently corrected.
    fn choose(&mut self, moves: &LegalMoves<'_>) -> usize;
}

/// Always plays the first legal move.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstChoice;

impl Agent for FirstChoice {
    fn choose(&mut self, _moves: &LegalMoves<'_>) -> usize {
        0
    }
}

/// Picks uniformly among the legal moves, from its own seeded stream.
#[derive(Clone, Debug)]
pub struct RandomChoice {
    rng: ChaCha8Rng,
}

impl RandomChoice {
    /// Create an agent with its own deterministic stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomChoice {
    fn choose(&mut self, moves: &LegalMoves<'_>) -> usize {
        if moves.is_empty() {
            return 0;
        }
        self.rng.gen_range(0..moves.len())
    }
}
