//! Board coordinate representation.

use std::fmt;

/// A square on the board, addressed by row and column.
///
/// Row 0 / column 0 is a8 (black's back rank, queenside); row 7 / column 7
/// is h1. Rows increase moving down the board toward white's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Creates a position. Both coordinates must be in 0-7.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Position { row, col }
    }

    /// Creates a position from signed coordinates, returning `None` when
    /// either falls off the board.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns the position offset by the given row/column deltas, or
    /// `None` if the result is off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// Parses a position from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Position {
            row: b'8' - rank,
            col: file - b'a',
        })
    }

    /// Returns the algebraic notation for this position.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, (b'8' - self.row) as char)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
