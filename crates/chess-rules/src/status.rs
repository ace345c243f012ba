//! Check, checkmate, and stalemate detection.

use crate::attacks::is_square_attacked;
use crate::movegen::all_legal_moves;
use crate::state::GameState;
use chess_core::Color;

/// Returns true if `color`'s king is attacked.
///
/// A board without that king (possible in hand-built fixtures) is treated as
/// not in check rather than an error.
pub fn is_in_check(color: Color, state: &GameState) -> bool {
    match state.board.king(color) {
        Some(king) => is_square_attacked(&state.board, king, color),
        None => false,
    }
}

/// Returns true if `color` is in check with no legal move.
pub fn is_checkmate(color: Color, state: &GameState) -> bool {
    is_in_check(color, state) && all_legal_moves(color, state).is_empty()
}

/// Returns true if the side to move has no legal move but is not in check.
pub fn is_stalemate(state: &GameState) -> bool {
    !is_in_check(state.current_turn, state)
        && all_legal_moves(state.current_turn, state).is_empty()
}
