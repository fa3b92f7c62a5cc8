// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move legality checking, including the forced-capture rule

use crate::{board::Board, Coord, Move, RejectionReason, Side};

/// Validates a submitted move path against the current board.
///
/// Checks run in a fixed order and the first failure is returned, so a
/// given board and move always produce the same single rejection reason.
pub struct MoveValidator<'a> {
    /// The board being checked
    board: &'a Board,
    /// The side whose turn it is
    side: Side,
}

impl<'a> MoveValidator<'a> {
    /// Create a validator for the side to move
    pub fn new(board: &'a Board, side: Side) -> Self {
        Self { board, side }
    }

    /// Check if a move is legal
    pub fn check(&self, mv: &Move) -> Result<(), RejectionReason> {
        let path = &mv.path;
        if path.len() < 2 {
            return Err(RejectionReason::TooFewSteps);
        }

        let origin = path[0];
        if !self.board.is_playable(origin) {
            return Err(RejectionReason::UnplayableCell);
        }
        if self.board.get(origin) != Some(self.side) {
            return Err(RejectionReason::NotYourPiece);
        }

        for pair in path.windows(2) {
            let (prev, curr) = (pair[0], pair[1]);

            if !self.board.is_playable(curr) {
                return Err(RejectionReason::UnplayableCell);
            }
            if self.board.get(curr).is_some() {
                return Err(RejectionReason::DestinationOccupied);
            }

            let dx = i16::from(curr.x) - i16::from(prev.x);
            let dy = i16::from(curr.y) - i16::from(prev.y);
            if dx.abs() != dy.abs() || !(1..=2).contains(&dx.abs()) {
                return Err(RejectionReason::InvalidStepLength);
            }
            if dy.signum() != i16::from(self.side.forward()) {
                return Err(RejectionReason::WrongDirection);
            }

            if dx.abs() == 1 {
                // A plain step must be the whole move.
                if path.len() > 2 {
                    return Err(RejectionReason::SingleStepOnly);
                }
                // Forced capture is board-wide for the side to move, not
                // local to the piece being moved.
                if side_has_capture(self.board, self.side) {
                    tracing::debug!(side = %self.side, "capture available, rejecting plain step");
                    return Err(RejectionReason::MustCapture);
                }
            } else {
                match prev.diagonal_midpoint(curr) {
                    Some(mid) if self.board.get(mid) == Some(self.side.opposite()) => {}
                    _ => return Err(RejectionReason::NothingToCapture),
                }
            }
        }

        Ok(())
    }
}

/// Scan the whole board for any pseudo-legal jump available to `side`.
///
/// A jump is pseudo-legal when the landing cell two diagonal steps ahead
/// is playable and empty and the cell jumped over holds an opposing piece.
/// Chain continuations are not considered; one jump anywhere is enough to
/// force a capture.
pub fn side_has_capture(board: &Board, side: Side) -> bool {
    let dy = side.forward() * 2;
    board.positions_of(side).any(|from| {
        [-2i8, 2].into_iter().any(|dx| {
            let Some(landing) = from.offset(dx, dy) else {
                return false;
            };
            if !board.is_playable(landing) || board.get(landing).is_some() {
                return false;
            }
            match from.diagonal_midpoint(landing) {
                Some(mid) => board.get(mid) == Some(side.opposite()),
                None => false,
            }
        })
    })
}
