// SPDX-License-Identifier: MIT OR Apache-2.0

//! Checkers Core - Game Rules and Board Logic
//!
//! This crate provides the core game functionality including:
//! - Board representation with the playable-cell parity rule
//! - Move parsing, validation (forced captures, jump chains) and application
//! - Turn alternation and end-of-game detection
//! - A uniform-random legal-move generator for the automated opponent
//!
//! The variant implemented here has no piece promotion: every piece moves
//! and captures diagonally forward only.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod engine;
pub mod game;
pub mod rules;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Piece colour in a checkers game (Light or Dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Light player, starts on the low ranks and moves first
    Light,
    /// Dark player, starts on the high ranks
    Dark,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Rank direction this side advances in: Light climbs, Dark descends.
    pub fn forward(&self) -> i8 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Light => write!(f, "Light"),
            Side::Dark => write!(f, "Dark"),
        }
    }
}

/// Board coordinate: file `x`, rank `y`, both zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (file)
    pub x: u8,
    /// Y coordinate (rank)
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if the coordinate is in bounds for a board of the given size
    pub fn is_valid(&self, board_size: u8) -> bool {
        self.x < board_size && self.y < board_size
    }

    /// Coordinate shifted by (dx, dy), or `None` if it would leave the
    /// non-negative range.
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Coord> {
        let x = i16::from(self.x) + i16::from(dx);
        let y = i16::from(self.y) + i16::from(dy);
        if (0..=i16::from(u8::MAX)).contains(&x) && (0..=i16::from(u8::MAX)).contains(&y) {
            Some(Coord::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Cell jumped over between `self` and `other`.
    ///
    /// Present only when the two coordinates are exactly two cells apart on
    /// a diagonal; any other pair has no midpoint.
    pub fn diagonal_midpoint(&self, other: Coord) -> Option<Coord> {
        let dx = i16::from(other.x) - i16::from(self.x);
        let dy = i16::from(other.y) - i16::from(self.y);
        if dx.abs() == 2 && dy.abs() == 2 {
            Some(Coord::new(
                ((i16::from(self.x) + i16::from(other.x)) / 2) as u8,
                ((i16::from(self.y) + i16::from(other.y)) / 2) as u8,
            ))
        } else {
            None
        }
    }
}

/// A submitted or generated move: an ordered path of board coordinates.
///
/// A plain step has exactly two coordinates; a jump chain has two or more,
/// every consecutive pair two cells apart diagonally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The visited coordinates, origin first
    pub path: Vec<Coord>,
}

impl Move {
    /// Create a move from a coordinate path
    pub fn new(path: Vec<Coord>) -> Self {
        Self { path }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parse a move in the format `c3 d4`, one two-character token per
    /// visited cell: a file letter (`a` = 0) followed by a rank digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut path = Vec::new();
        for token in s.split_whitespace() {
            let mut chars = token.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(file), Some(rank), None)
                    if file.is_ascii_lowercase() && rank.is_ascii_digit() =>
                {
                    path.push(Coord::new(file as u8 - b'a', rank as u8 - b'0'));
                }
                _ => return Err(ParseMoveError::BadToken(token.to_string())),
            }
        }

        if path.is_empty() {
            return Err(ParseMoveError::Empty);
        }

        Ok(Move::new(path))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coord) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}", (b'a' + coord.x) as char, coord.y)?;
        }
        Ok(())
    }
}

/// Errors from parsing move text; distinct from rule rejections
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// The input contained no tokens at all
    #[error("empty move text")]
    Empty,

    /// A token was not a file letter followed by a rank digit
    #[error("bad token `{0}`: expected a file letter followed by a rank digit, like `c3`")]
    BadToken(String),
}

/// Every way the rules can reject a submitted move.
///
/// The validator evaluates its checks in a fixed order and reports exactly
/// one reason, the first that fails. The board is never modified on
/// rejection.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The game has already ended; no further moves are accepted
    #[error("the game is already over")]
    GameOver,

    /// The path has fewer than two coordinates
    #[error("a move needs at least two positions")]
    TooFewSteps,

    /// A visited cell is off the board or on the wrong colour square
    #[error("cell is not a playable square")]
    UnplayableCell,

    /// The origin does not hold a piece of the side to move
    #[error("no piece of yours on the starting cell")]
    NotYourPiece,

    /// A step lands on an occupied cell
    #[error("destination cell is occupied")]
    DestinationOccupied,

    /// A step is not a one- or two-cell diagonal
    #[error("steps must be diagonal, one or two cells")]
    InvalidStepLength,

    /// A step goes against the side's forward direction
    #[error("pieces may not move backwards")]
    WrongDirection,

    /// A non-capturing step appeared in a path longer than one step
    #[error("only one step allowed when not jumping")]
    SingleStepOnly,

    /// A plain step was submitted while a capture exists somewhere for
    /// the side to move
    #[error("must capture if a capture is available")]
    MustCapture,

    /// A jump whose midpoint does not hold an opposing piece
    #[error("can only jump over an opponent")]
    NothingToCapture,
}

/// Errors from setting up a board with unusable parameters
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardSetupError {
    /// The board is too small to hold a game
    #[error("board size {0} is too small")]
    SizeTooSmall(u8),

    /// The two starting zones would overlap or touch every rank
    #[error("starting depth {depth} does not fit a {size}x{size} board")]
    OverlappingStartRows {
        /// Board size that was requested
        size: u8,
        /// Starting-row depth that was requested
        depth: u8,
    },
}

pub use board::Board;
pub use game::Game;
