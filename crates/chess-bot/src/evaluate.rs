//! Static position evaluation.

use chess_core::{Color, PieceKind};
use chess_rules::GameState;

/// Score for a delivered checkmate. Large enough to dominate any material
/// swing; terminal positions are classified in search, not here.
pub const MATE_SCORE: i32 = 1_000_000;

/// Bonus for a developed piece (any moved piece that is not a pawn or the
/// king), in centipawns.
const DEVELOPMENT_BONUS: i32 = 10;

/// Positional bonus table in centipawns, row-major from row 0 (a8-h8).
/// Center squares are worth up to +30, edges nothing; the table is
/// symmetric so both colors read it directly.
#[rustfmt::skip]
const CENTER_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     0, 10, 10, 10, 10, 10, 10,  0,
     0, 10, 20, 20, 20, 20, 10,  0,
     0, 10, 20, 30, 30, 20, 10,  0,
     0, 10, 20, 30, 30, 20, 10,  0,
     0, 10, 20, 20, 20, 20, 10,  0,
     0, 10, 10, 10, 10, 10, 10,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
];

/// Evaluates the position in centipawns from `perspective`'s point of view;
/// positive favors that side.
///
/// Material (pawn 100, knight/bishop 300, rook 500, queen 900) plus the
/// center table plus a flat development bonus, each signed by color.
pub fn evaluate(state: &GameState, perspective: Color) -> i32 {
    let mut score = 0i32;

    for piece in state.board.all_pieces() {
        let sign = if piece.color == perspective { 1 } else { -1 };
        let mut value = piece.kind.value();
        value += CENTER_TABLE[(piece.pos.row * 8 + piece.pos.col) as usize];
        if piece.has_moved && !matches!(piece.kind, PieceKind::Pawn | PieceKind::King) {
            value += DEVELOPMENT_BONUS;
        }
        score += sign * value;
    }

    score
}
