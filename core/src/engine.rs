// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidate-move generation and the automated opponent

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{board::Board, game::Game, rules::MoveValidator, Move, Side};

/// Legal candidate moves for one side, jumps kept apart from plain steps
/// because an available jump is mandatory.
#[derive(Debug, Clone, Default)]
pub struct CandidateMoves {
    /// Legal single-capture jumps
    pub jumps: Vec<Move>,
    /// Legal non-capturing steps; empty whenever any jump exists
    pub steps: Vec<Move>,
}

impl CandidateMoves {
    /// True when the side has no legal move at all
    pub fn is_empty(&self) -> bool {
        self.jumps.is_empty() && self.steps.is_empty()
    }
}

/// Enumerate every legal two-coordinate move for `side`.
///
/// Each piece contributes four geometric candidates (forward-diagonal
/// steps and jumps, left and right); each is confirmed through the full
/// validator, so the forced-capture rule empties `steps` whenever a jump
/// exists. Multi-jump chains are not generated, only single captures.
pub fn legal_moves(board: &Board, side: Side) -> CandidateMoves {
    let validator = MoveValidator::new(board, side);
    let mut candidates = CandidateMoves::default();
    let dy = side.forward();

    for from in board.positions_of(side) {
        for dx in [-1i8, 1] {
            if let Some(to) = from.offset(dx * 2, dy * 2) {
                let mv = Move::new(vec![from, to]);
                if validator.check(&mv).is_ok() {
                    candidates.jumps.push(mv);
                }
            }
            if let Some(to) = from.offset(dx, dy) {
                let mv = Move::new(vec![from, to]);
                if validator.check(&mv).is_ok() {
                    candidates.steps.push(mv);
                }
            }
        }
    }

    candidates
}

/// Pick a legal move for `side` uniformly at random, jumps before steps.
/// `None` means the side has no legal move.
pub fn random_move<R: Rng>(board: &Board, side: Side, rng: &mut R) -> Option<Move> {
    let candidates = legal_moves(board, side);
    let pool = if candidates.jumps.is_empty() {
        &candidates.steps
    } else {
        &candidates.jumps
    };
    pool.choose(rng).cloned()
}

/// Move supplier for one seat at the table, human or automated
pub trait PlayerBackend {
    /// The move this player wants to make, or `None` when it has no
    /// legal move
    fn next_move(&mut self, game: &Game) -> Option<Move>;
}

/// Automated opponent choosing uniformly among legal moves.
///
/// The randomness source is owned by the player so tests can seed it and
/// replay the exact same game.
pub struct RandomPlayer<R: Rng> {
    rng: R,
}

impl RandomPlayer<StdRng> {
    /// Player seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Player with a fixed seed, for reproducible games
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomPlayer<R> {
    /// Player over a caller-supplied randomness source
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PlayerBackend for RandomPlayer<R> {
    fn next_move(&mut self, game: &Game) -> Option<Move> {
        game.random_legal_move(&mut self.rng)
    }
}
