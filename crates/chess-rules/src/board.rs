//! Board representation.

use chess_core::{Color, Piece, PieceKind, Position};
use std::fmt;

/// An 8x8 grid of cells, each empty or holding exactly one piece.
///
/// Row 0 is black's back rank (a8-h8), row 7 is white's (a1-h1). The board
/// keeps each piece's `pos` field in sync with the cell that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates a board with the standard starting setup.
    pub fn standard() -> Self {
        use PieceKind::*;
        const BACK_RANK: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.place(Piece::new(kind, Color::Black, Position::new(0, col)));
            board.place(Piece::new(Pawn, Color::Black, Position::new(1, col)));
            board.place(Piece::new(Pawn, Color::White, Position::new(6, col)));
            board.place(Piece::new(kind, Color::White, Position::new(7, col)));
        }
        board
    }

    /// Returns the piece at `pos`, if any.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.cells[pos.row as usize][pos.col as usize].as_ref()
    }

    /// Returns true if `pos` is empty.
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Puts a piece on the board at its own `pos`, replacing any occupant.
    pub fn place(&mut self, piece: Piece) {
        self.cells[piece.pos.row as usize][piece.pos.col as usize] = Some(piece);
    }

    /// Removes and returns the piece at `pos`.
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.cells[pos.row as usize][pos.col as usize].take()
    }

    /// Moves the piece at `from` to `to`, replacing any occupant of `to`.
    /// Does nothing if `from` is empty. Leaves `has_moved` untouched; the
    /// executor owns that transition.
    pub fn relocate(&mut self, from: Position, to: Position) {
        if let Some(mut piece) = self.take(from) {
            piece.pos = to;
            self.place(piece);
        }
    }

    /// Returns the position of the given color's king, if present.
    ///
    /// Hand-constructed test boards may lack a king; callers treat that as
    /// "not in check".
    pub fn king(&self, color: Color) -> Option<Position> {
        self.pieces(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.pos)
    }

    /// Iterates over all pieces of one color, in row-major board order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.all_pieces().filter(move |p| p.color == color)
    }

    /// Iterates over all pieces, in row-major board order.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter_map(|cell| cell.as_ref())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - i)?;
            for cell in row {
                match cell {
                    Some(piece) => write!(f, " {}", piece.to_char())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
