//! Player color representation.

/// Represents the two players in chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the row direction pawns of this color advance in.
    ///
    /// Rows count down the board from black's back rank (row 0) to white's
    /// (row 7), so white pawns move toward row 0 and black pawns toward row 7.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns the back rank row for this color (7 for White, 0 for Black).
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Returns the row a pawn of this color promotes on (the opponent's
    /// back rank).
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }

    /// Returns the row a pawn of this color must occupy to capture
    /// en passant (its fifth rank: row 3 for White, row 4 for Black).
    #[inline]
    pub const fn en_passant_rank(self) -> u8 {
        match self {
            Color::White => 3,
            Color::Black => 4,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
