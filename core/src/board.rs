// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation, playability parity and the starting layout

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{BoardSetupError, Coord, Side};

/// Square checkers board holding piece occupancy per cell.
///
/// Only cells where `x % 2 == y % 2` are playable; the rest stay empty for
/// the whole game. Bounds-checked access panics on out-of-range
/// coordinates: rule-level code is expected to check `is_playable` (which
/// implies in-bounds) before indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Size of the (square) board
    size: u8,
    /// Occupancy per cell, row-major by rank
    cells: Vec<Option<Side>>,
}

impl Board {
    /// Create a board with both starting zones populated.
    ///
    /// Playable cells on the `start_depth` lowest ranks get Light pieces,
    /// the same number of highest ranks get Dark pieces. Fails when the
    /// two zones would overlap.
    pub fn new(size: u8, start_depth: u8) -> Result<Self, BoardSetupError> {
        if size < 2 {
            return Err(BoardSetupError::SizeTooSmall(size));
        }
        if u16::from(start_depth) * 2 > u16::from(size) {
            return Err(BoardSetupError::OverlappingStartRows {
                size,
                depth: start_depth,
            });
        }

        let mut board = Self {
            size,
            cells: vec![None; usize::from(size) * usize::from(size)],
        };

        for y in 0..size {
            for x in 0..size {
                let coord = Coord::new(x, y);
                if !board.is_playable(coord) {
                    continue;
                }
                if y < start_depth {
                    board.set(coord, Some(Side::Light));
                } else if y >= size - start_depth {
                    board.set(coord, Some(Side::Dark));
                }
            }
        }

        Ok(board)
    }

    /// Get the size of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// True iff the coordinate is in bounds and on a playable square
    pub fn is_playable(&self, coord: Coord) -> bool {
        coord.is_valid(self.size) && coord.x % 2 == coord.y % 2
    }

    /// Occupancy of the cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics when `coord` is out of bounds; that is a caller bug, not a
    /// rule violation.
    pub fn get(&self, coord: Coord) -> Option<Side> {
        self.cells[self.index(coord)]
    }

    /// Overwrite the cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics when `coord` is out of bounds.
    pub fn set(&mut self, coord: Coord, cell: Option<Side>) {
        let idx = self.index(coord);
        self.cells[idx] = cell;
    }

    /// Convert a coordinate to a vector index
    fn index(&self, coord: Coord) -> usize {
        assert!(
            coord.is_valid(self.size),
            "coordinate ({}, {}) outside {size}x{size} board",
            coord.x,
            coord.y,
            size = self.size,
        );
        usize::from(coord.y) * usize::from(self.size) + usize::from(coord.x)
    }

    /// All coordinates currently holding a piece of `side`, in ascending
    /// rank-then-file order. The order carries no game meaning but is
    /// deterministic.
    pub fn positions_of(&self, side: Side) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            if *cell == Some(side) {
                Some(Coord::new(
                    (i % usize::from(self.size)) as u8,
                    (i / usize::from(self.size)) as u8,
                ))
            } else {
                None
            }
        })
    }

    /// Number of pieces `side` has on the board
    pub fn count_of(&self, side: Side) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(side)).count()
    }

    /// Text view of the board: ranks top-to-bottom in descending order,
    /// each prefixed with its rank number, `.` for empty cells, `x` for
    /// Light and `o` for Dark, and a file-letter footer.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for y in (0..self.size).rev() {
            out.push_str(&format!("{y} "));
            for x in 0..self.size {
                let glyph = match self.get(Coord::new(x, y)) {
                    Some(Side::Light) => 'x',
                    Some(Side::Dark) => 'o',
                    None => '.',
                };
                out.push(glyph);
                out.push(' ');
            }
            out.push('\n');
        }

        out.push_str("  ");
        for x in 0..self.size {
            out.push((b'a' + x) as char);
            out.push(' ');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_rejects_overlapping_zones() {
        assert_eq!(
            Board::new(8, 5),
            Err(BoardSetupError::OverlappingStartRows { size: 8, depth: 5 })
        );
        assert_eq!(Board::new(1, 0), Err(BoardSetupError::SizeTooSmall(1)));
        assert!(Board::new(8, 4).is_ok());
    }

    #[test]
    fn initial_layout_is_symmetric() {
        let board = Board::new(8, 3).unwrap();
        assert_eq!(board.count_of(Side::Light), 12);
        assert_eq!(board.count_of(Side::Dark), 12);

        for y in 0..8 {
            for x in 0..8 {
                let coord = Coord::new(x, y);
                let cell = board.get(coord);
                if x % 2 != y % 2 {
                    assert_eq!(cell, None, "non-playable cell ({x}, {y}) occupied");
                } else if y < 3 {
                    assert_eq!(cell, Some(Side::Light));
                } else if y >= 5 {
                    assert_eq!(cell, Some(Side::Dark));
                } else {
                    assert_eq!(cell, None);
                }
            }
        }
    }

    #[test]
    fn positions_scan_in_rank_then_file_order() {
        let board = Board::new(4, 1).unwrap();
        let light: Vec<Coord> = board.positions_of(Side::Light).collect();
        assert_eq!(light, vec![Coord::new(0, 0), Coord::new(2, 0)]);
        let dark: Vec<Coord> = board.positions_of(Side::Dark).collect();
        assert_eq!(dark, vec![Coord::new(1, 3), Coord::new(3, 3)]);
    }

    #[test]
    #[should_panic(expected = "outside 8x8 board")]
    fn out_of_bounds_access_panics() {
        let board = Board::new(8, 3).unwrap();
        let _ = board.get(Coord::new(8, 0));
    }

    #[test]
    fn playability_needs_bounds_and_parity() {
        let board = Board::new(8, 3).unwrap();
        assert!(board.is_playable(Coord::new(2, 2)));
        assert!(board.is_playable(Coord::new(1, 3)));
        assert!(!board.is_playable(Coord::new(1, 2)));
        assert!(!board.is_playable(Coord::new(8, 8)));
    }
}
