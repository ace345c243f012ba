//! Attack detection.
//!
//! Attack lookup works backwards from the target square: instead of
//! generating every enemy move, it asks which squares an attacker of each
//! kind would have to stand on. King attacks cover adjacency only, never
//! castling destinations, which is what breaks the recursion between
//! castling eligibility and king move generation.

use crate::board::Board;
use chess_core::{Color, PieceKind, Position};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Returns true if any piece of the color opposing `defender` attacks `pos`.
pub fn is_square_attacked(board: &Board, pos: Position, defender: Color) -> bool {
    let attacker = defender.opposite();

    // Pawns attack one row forward, one column to either side, so the
    // attacking pawn sits one row behind the target in its own direction
    // of travel.
    let pawn_row = -attacker.pawn_direction();
    for dc in [-1, 1] {
        if let Some(from) = pos.offset(pawn_row, dc) {
            if holds(board, from, attacker, PieceKind::Pawn) {
                return true;
            }
        }
    }

    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(from) = pos.offset(dr, dc) {
            if holds(board, from, attacker, PieceKind::Knight) {
                return true;
            }
        }
    }

    for (dr, dc) in KING_OFFSETS {
        if let Some(from) = pos.offset(dr, dc) {
            if holds(board, from, attacker, PieceKind::King) {
                return true;
            }
        }
    }

    // Sliders: walk each ray outward and test the first occupied square.
    ray_attacked(board, pos, attacker, &ROOK_DIRECTIONS, PieceKind::Rook)
        || ray_attacked(board, pos, attacker, &BISHOP_DIRECTIONS, PieceKind::Bishop)
}

fn holds(board: &Board, pos: Position, color: Color, kind: PieceKind) -> bool {
    board
        .piece_at(pos)
        .is_some_and(|p| p.color == color && p.kind == kind)
}

fn ray_attacked(
    board: &Board,
    pos: Position,
    attacker: Color,
    directions: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(dr, dc) in directions {
        let mut current = pos;
        while let Some(next) = current.offset(dr, dc) {
            if let Some(piece) = board.piece_at(next) {
                if piece.color == attacker
                    && (piece.kind == slider || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}
