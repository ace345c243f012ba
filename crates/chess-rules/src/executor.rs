//! Move execution.
//!
//! [`execute`] trusts its input: callers validate with [`is_valid_move`]
//! first and simply do not execute rejected moves. That keeps the hot path
//! branch-free; a debug assertion catches caller bugs in test builds.

use crate::movegen::{all_legal_moves, legal_moves};
use crate::state::GameState;
use crate::status::is_in_check;
use chess_core::{Move, PieceKind, Position};

/// Validates a move against the current state, independently of how it was
/// constructed. Returns false (never panics) on any mismatch:
/// - no piece at `from`, or it belongs to the side not to move
/// - the move's recorded piece disagrees with the actual occupant
/// - `to` is not among the legal destinations for `from`
/// - a special-move flag contradicts board facts
pub fn is_valid_move(mov: &Move, state: &GameState) -> bool {
    let Some(occupant) = state.board.piece_at(mov.from) else {
        return false;
    };
    if occupant.color != state.current_turn {
        return false;
    }
    if occupant.kind != mov.piece.kind || occupant.color != mov.piece.color {
        return false;
    }
    if !legal_moves(mov.from, state).contains(&mov.to) {
        return false;
    }

    let dr = (mov.to.row as i8 - mov.from.row as i8).abs();
    let dc = (mov.to.col as i8 - mov.from.col as i8).abs();
    if mov.is_castling && !(occupant.kind == PieceKind::King && dr == 0 && dc == 2) {
        return false;
    }
    if mov.is_en_passant
        && !(occupant.kind == PieceKind::Pawn
            && dr == 1
            && dc == 1
            && state.board.is_empty(mov.to))
    {
        return false;
    }
    if let Some(kind) = mov.promotion {
        if !(occupant.kind == PieceKind::Pawn
            && mov.to.row == occupant.color.promotion_rank()
            && kind.is_promotion_target())
        {
            return false;
        }
    }
    true
}

/// Applies a pre-validated move and returns the successor state. The input
/// state is never mutated.
pub fn execute(mov: &Move, state: &GameState) -> GameState {
    debug_assert!(is_valid_move(mov, state));

    let mut board = state.board.clone();

    // Resolve the capture before anything moves. The en passant victim is
    // the pawn on the mover's origin row at the destination column, not the
    // (empty) destination square.
    let captured = if mov.is_en_passant {
        board.take(Position::new(mov.from.row, mov.to.col))
    } else {
        board.piece_at(mov.to).copied()
    };

    if let Some(mut piece) = board.take(mov.from) {
        piece.pos = mov.to;
        piece.has_moved = true;
        if let Some(kind) = mov.promotion {
            piece.kind = kind;
        }
        board.place(piece);
    }

    if mov.is_castling {
        let row = mov.from.row;
        let (rook_from, rook_to) = if mov.is_kingside() { (7, 5) } else { (0, 3) };
        if let Some(mut rook) = board.take(Position::new(row, rook_from)) {
            rook.pos = Position::new(row, rook_to);
            rook.has_moved = true;
            board.place(rook);
        }
    }

    let executed = Move {
        captured,
        ..*mov
    };

    let mut move_history = state.move_history.clone();
    move_history.push(executed);
    let mut captured_pieces = state.captured_pieces.clone();
    if let Some(victim) = captured {
        captured_pieces.push(victim);
    }

    let next_turn = state.current_turn.opposite();
    let mut next = GameState {
        board,
        current_turn: next_turn,
        move_history,
        captured_pieces,
        is_check: false,
        is_checkmate: false,
        is_stalemate: false,
        move_count: state.move_count + 1,
        last_move: Some(executed),
    };

    next.is_check = is_in_check(next_turn, &next);
    let no_moves = all_legal_moves(next_turn, &next).is_empty();
    next.is_checkmate = next.is_check && no_moves;
    next.is_stalemate = !next.is_check && no_moves;
    next
}
