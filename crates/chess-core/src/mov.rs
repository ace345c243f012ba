//! Move representation.

use crate::{Piece, PieceKind, Position};
use std::fmt;

/// A chess move.
///
/// A move is a record, not an action: it carries the mover as it stood
/// before the move, plus annotations for captures and special moves.
/// Executing it is the engine's job and never mutates the record's source
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Source square.
    pub from: Position,
    /// Destination square.
    pub to: Position,
    /// The moving piece, pre-move.
    pub piece: Piece,
    /// The captured piece, if any. For en passant this is the pawn on the
    /// bypassed square, not the occupant of `to` (which is empty).
    pub captured: Option<Piece>,
    /// True for en passant captures.
    pub is_en_passant: bool,
    /// True for castling (king moves two files; the rook follows).
    pub is_castling: bool,
    /// Promotion target for pawns reaching the far rank.
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a plain move of `piece` to `to`.
    pub const fn new(piece: Piece, to: Position) -> Self {
        Move {
            from: piece.pos,
            to,
            piece,
            captured: None,
            is_en_passant: false,
            is_castling: false,
            promotion: None,
        }
    }

    /// Annotates this move with a captured piece.
    pub const fn with_capture(mut self, captured: Piece) -> Self {
        self.captured = Some(captured);
        self
    }

    /// Marks this move as an en passant capture of `captured`.
    pub const fn en_passant(mut self, captured: Piece) -> Self {
        self.captured = Some(captured);
        self.is_en_passant = true;
        self
    }

    /// Marks this move as castling.
    pub const fn castling(mut self) -> Self {
        self.is_castling = true;
        self
    }

    /// Sets the promotion target.
    pub const fn promoting_to(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    /// Returns true if the king moves toward the h-file (kingside) when
    /// castling. Meaningless unless `is_castling` is set.
    #[inline]
    pub const fn is_kingside(&self) -> bool {
        self.to.col > self.from.col
    }
}

impl fmt::Display for Move {
    /// Coordinate notation for display: `e2e4`, `e7e8q`, `O-O`, `O-O-O`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castling {
            return if self.is_kingside() {
                write!(f, "O-O")
            } else {
                write!(f, "O-O-O")
            };
        }
        let promo = match self.promotion {
            Some(PieceKind::Queen) => "q",
            Some(PieceKind::Rook) => "r",
            Some(PieceKind::Bishop) => "b",
            Some(PieceKind::Knight) => "n",
            _ => "",
        };
        write!(f, "{}{}{}", self.from, self.to, promo)
    }
}
