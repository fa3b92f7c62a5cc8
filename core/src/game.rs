// SPDX-License-Identifier: MIT OR Apache-2.0

//! The game aggregate: board, turn, move application, end-of-game state

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    engine::{self, legal_moves},
    rules::MoveValidator,
    BoardSetupError, Move, RejectionReason, Side,
};

/// One checkers game: the board, whose turn it is, and whether it is over.
///
/// The board and turn mutate only through [`Game::play_move`]; a rejected
/// move leaves both untouched. Once no legal move exists for the side to
/// move the game is terminal and every further submission is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// The current board
    board: Board,
    /// The side to move
    turn: Side,
    /// Set once the side to move has no legal move
    over: bool,
    /// The winning side, if the game ended with one
    winner: Option<Side>,
    /// History of accepted moves
    moves: Vec<Move>,
}

impl Game {
    /// Start a game on a fresh board. Light moves first.
    pub fn new(size: u8, start_depth: u8) -> Result<Self, BoardSetupError> {
        Ok(Self::from_position(
            Board::new(size, start_depth)?,
            Side::Light,
        ))
    }

    /// Start from an arbitrary position with `turn` to move.
    ///
    /// Terminal-state detection runs immediately, so a position with no
    /// legal move for `turn` produces an already-finished game.
    pub fn from_position(board: Board, turn: Side) -> Self {
        let mut game = Self {
            board,
            turn,
            over: false,
            winner: None,
            moves: Vec::new(),
        };
        game.refresh_terminal_state();
        game
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Whether the game has ended
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The winner, or `None` while the game runs or when it ended drawn
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Accepted moves so far, oldest first
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Validate and apply a move for the side to move.
    ///
    /// On success the piece is relocated along the path, every jumped-over
    /// piece is removed, the turn flips and the terminal state is
    /// re-evaluated. On rejection nothing changes.
    pub fn play_move(&mut self, mv: &Move) -> Result<(), RejectionReason> {
        if self.over {
            return Err(RejectionReason::GameOver);
        }
        MoveValidator::new(&self.board, self.turn).check(mv)?;

        for pair in mv.path.windows(2) {
            let (prev, curr) = (pair[0], pair[1]);
            let piece = self.board.get(prev);
            self.board.set(prev, None);
            self.board.set(curr, piece);
            if let Some(mid) = prev.diagonal_midpoint(curr) {
                tracing::debug!(x = mid.x, y = mid.y, "piece captured");
                self.board.set(mid, None);
            }
        }

        self.moves.push(mv.clone());
        self.turn = self.turn.opposite();
        self.refresh_terminal_state();
        Ok(())
    }

    /// A uniformly random legal move for the side to move, jumps first.
    ///
    /// Returns `None` exactly when no legal move exists, which is also the
    /// condition that ends the game.
    pub fn random_legal_move<R: Rng>(&self, rng: &mut R) -> Option<Move> {
        if self.over {
            return None;
        }
        engine::random_move(&self.board, self.turn, rng)
    }

    /// Text view of the current board
    pub fn render(&self) -> String {
        self.board.render()
    }

    /// Mark the game over when the side to move has no legal move; a side
    /// left without pieces loses, a blocked side with pieces draws.
    fn refresh_terminal_state(&mut self) {
        if !legal_moves(&self.board, self.turn).is_empty() {
            return;
        }
        self.over = true;
        if self.board.count_of(self.turn) == 0 {
            self.winner = Some(self.turn.opposite());
        }
        tracing::debug!(winner = ?self.winner, "game over");
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
