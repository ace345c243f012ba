//! Legal move generation.
//!
//! Generation is two-phase: per-kind pseudo-legal destinations first, then a
//! self-check filter that simulates each candidate on a scratch board and
//! discards it if the mover's own king ends up attacked. Castling and en
//! passant eligibility live here; the generic filter catches the
//! castle-into-check case so the eligibility test only covers the king's
//! current and transit squares.

use crate::attacks::{
    is_square_attacked, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};
use crate::board::Board;
use crate::state::GameState;
use chess_core::{Color, Move, Piece, PieceKind, Position};

/// Returns the legal destinations for the piece at `pos`.
///
/// Empty squares and pieces of the side not to move yield an empty set, not
/// an error. Results are deterministic and the state is never touched.
pub fn legal_moves(pos: Position, state: &GameState) -> Vec<Position> {
    match state.board.piece_at(pos) {
        Some(piece) if piece.color == state.current_turn => legal_destinations(piece, state),
        _ => Vec::new(),
    }
}

/// Returns every legal move for `color`, in row-major board-scan order.
///
/// Pawn moves onto the far rank expand into one move per promotion kind.
/// Unlike [`legal_moves`], this is not gated on the side to move: status
/// detection asks it about either color.
pub fn all_legal_moves(color: Color, state: &GameState) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece in state.board.pieces(color) {
        for to in legal_destinations(piece, state) {
            push_moves(piece, to, state, &mut moves);
        }
    }
    moves
}

/// Returns true if the piece at `from` is a pawn and `to` is its promotion
/// rank (the opponent's back rank).
pub fn is_pawn_promotion(from: Position, to: Position, state: &GameState) -> bool {
    state
        .board
        .piece_at(from)
        .is_some_and(|p| p.kind == PieceKind::Pawn && to.row == p.color.promotion_rank())
}

/// Pseudo-legal destinations filtered for self-check.
fn legal_destinations(piece: &Piece, state: &GameState) -> Vec<Position> {
    pseudo_legal_destinations(piece, state)
        .into_iter()
        .filter(|&to| !leaves_king_exposed(piece, to, &state.board))
        .collect()
}

fn pseudo_legal_destinations(piece: &Piece, state: &GameState) -> Vec<Position> {
    let board = &state.board;
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(piece, state),
        PieceKind::Knight => offset_destinations(piece, &KNIGHT_OFFSETS, board),
        PieceKind::Bishop => ray_destinations(piece, &BISHOP_DIRECTIONS, board),
        PieceKind::Rook => ray_destinations(piece, &ROOK_DIRECTIONS, board),
        PieceKind::Queen => {
            let mut moves = ray_destinations(piece, &ROOK_DIRECTIONS, board);
            moves.extend(ray_destinations(piece, &BISHOP_DIRECTIONS, board));
            moves
        }
        PieceKind::King => king_destinations(piece, board),
    }
}

fn pawn_destinations(piece: &Piece, state: &GameState) -> Vec<Position> {
    let board = &state.board;
    let dir = piece.color.pawn_direction();
    let mut moves = Vec::new();

    if let Some(one) = piece.pos.offset(dir, 0) {
        if board.is_empty(one) {
            moves.push(one);
            if !piece.has_moved {
                if let Some(two) = one.offset(dir, 0) {
                    if board.is_empty(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(diag) = piece.pos.offset(dir, dc) {
            if board
                .piece_at(diag)
                .is_some_and(|p| p.color != piece.color)
            {
                moves.push(diag);
            }
        }
    }

    if let Some(to) = en_passant_destination(piece, state) {
        moves.push(to);
    }

    moves
}

/// En passant: the capturing pawn sits on its fifth rank, and the last move
/// was an opposing pawn's two-row advance landing beside it. The capture
/// lands on the square the opposing pawn skipped.
fn en_passant_destination(piece: &Piece, state: &GameState) -> Option<Position> {
    if piece.pos.row != piece.color.en_passant_rank() {
        return None;
    }
    let last = state.last_move.as_ref()?;
    let two_rows = (last.from.row as i8 - last.to.row as i8).abs() == 2;
    let beside = last.to.row == piece.pos.row
        && (last.to.col as i8 - piece.pos.col as i8).abs() == 1;
    if last.piece.kind == PieceKind::Pawn
        && last.piece.color == piece.color.opposite()
        && two_rows
        && beside
    {
        piece
            .pos
            .offset(piece.color.pawn_direction(), last.to.col as i8 - piece.pos.col as i8)
    } else {
        None
    }
}

fn offset_destinations(piece: &Piece, offsets: &[(i8, i8)], board: &Board) -> Vec<Position> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| piece.pos.offset(dr, dc))
        .filter(|&to| board.piece_at(to).is_none_or(|p| p.color != piece.color))
        .collect()
}

fn ray_destinations(piece: &Piece, directions: &[(i8, i8)], board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for &(dr, dc) in directions {
        let mut current = piece.pos;
        while let Some(next) = current.offset(dr, dc) {
            match board.piece_at(next) {
                None => moves.push(next),
                Some(other) => {
                    if other.color != piece.color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
    moves
}

fn king_destinations(piece: &Piece, board: &Board) -> Vec<Position> {
    let mut moves = offset_destinations(piece, &KING_OFFSETS, board);

    // Castling: unmoved king and rook, empty squares between them, and
    // neither the king's square nor the square it crosses attacked. Landing
    // in check is rejected by the generic self-check filter.
    if piece.has_moved || is_square_attacked(board, piece.pos, piece.color) {
        return moves;
    }
    let row = piece.pos.row;
    // Kingside: rook on the h-file, f and g empty, king crosses f.
    if castling_rook_ready(board, Position::new(row, 7), piece.color)
        && board.is_empty(Position::new(row, 5))
        && board.is_empty(Position::new(row, 6))
        && !is_square_attacked(board, Position::new(row, 5), piece.color)
    {
        moves.push(Position::new(row, 6));
    }
    // Queenside: rook on the a-file, b, c, and d empty, king crosses d.
    if castling_rook_ready(board, Position::new(row, 0), piece.color)
        && board.is_empty(Position::new(row, 1))
        && board.is_empty(Position::new(row, 2))
        && board.is_empty(Position::new(row, 3))
        && !is_square_attacked(board, Position::new(row, 3), piece.color)
    {
        moves.push(Position::new(row, 2));
    }
    moves
}

fn castling_rook_ready(board: &Board, corner: Position, color: Color) -> bool {
    board
        .piece_at(corner)
        .is_some_and(|p| p.kind == PieceKind::Rook && p.color == color && !p.has_moved)
}

/// Simulates moving `piece` to `to` on a scratch board and reports whether
/// its own king would be attacked afterwards. The simulation mirrors the
/// executor's board mechanics: en passant removes the bypassed pawn and
/// castling brings the rook along.
fn leaves_king_exposed(piece: &Piece, to: Position, board: &Board) -> bool {
    let mut scratch = board.clone();

    if piece.kind == PieceKind::Pawn && to.col != piece.pos.col && scratch.is_empty(to) {
        scratch.take(Position::new(piece.pos.row, to.col));
    }
    if piece.kind == PieceKind::King && (to.col as i8 - piece.pos.col as i8).abs() == 2 {
        let (rook_from, rook_to) = if to.col > piece.pos.col { (7, 5) } else { (0, 3) };
        scratch.relocate(
            Position::new(piece.pos.row, rook_from),
            Position::new(piece.pos.row, rook_to),
        );
    }
    scratch.relocate(piece.pos, to);

    match scratch.king(piece.color) {
        Some(king) => is_square_attacked(&scratch, king, piece.color),
        None => false,
    }
}

/// Builds the move record(s) for a legal destination, annotating captures
/// and special-move flags. Promotions fan out into four records.
fn push_moves(piece: &Piece, to: Position, state: &GameState, out: &mut Vec<Move>) {
    let board = &state.board;

    if piece.kind == PieceKind::Pawn {
        if to.col != piece.pos.col && board.is_empty(to) {
            // Diagonal onto an empty square is only reachable en passant.
            if let Some(&victim) = board.piece_at(Position::new(piece.pos.row, to.col)) {
                out.push(Move::new(*piece, to).en_passant(victim));
            }
            return;
        }
        if to.row == piece.color.promotion_rank() {
            for kind in PieceKind::PROMOTIONS {
                let mut m = Move::new(*piece, to).promoting_to(kind);
                if let Some(&victim) = board.piece_at(to) {
                    m = m.with_capture(victim);
                }
                out.push(m);
            }
            return;
        }
    }

    if piece.kind == PieceKind::King && (to.col as i8 - piece.pos.col as i8).abs() == 2 {
        out.push(Move::new(*piece, to).castling());
        return;
    }

    let mut m = Move::new(*piece, to);
    if let Some(&victim) = board.piece_at(to) {
        m = m.with_capture(victim);
    }
    out.push(m);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::execute;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    fn find_move(state: &GameState, from: &str, to: &str) -> Move {
        all_legal_moves(state.current_turn, state)
            .into_iter()
            .find(|m| m.from == pos(from) && m.to == pos(to))
            .unwrap_or_else(|| panic!("no move {}{}", from, to))
    }

    #[test]
    fn twenty_moves_from_start() {
        let state = GameState::new();
        let moves = all_legal_moves(Color::White, &state);
        assert_eq!(moves.len(), 20);
        // Black also has 20 replies to any opening move.
        let next = execute(&find_move(&state, "e2", "e4"), &state);
        assert_eq!(all_legal_moves(Color::Black, &next).len(), 20);
    }

    #[test]
    fn empty_square_and_off_turn_yield_nothing() {
        let state = GameState::new();
        assert!(legal_moves(pos("e4"), &state).is_empty());
        assert!(legal_moves(pos("e7"), &state).is_empty()); // black piece, white to move
        assert!(!legal_moves(pos("e2"), &state).is_empty());
    }

    #[test]
    fn pawn_double_step_only_before_moving() {
        let state = GameState::new();
        let e2 = pos("e2");
        let moves = legal_moves(e2, &state);
        assert!(moves.contains(&pos("e3")));
        assert!(moves.contains(&pos("e4")));

        // After advancing once, only the single step remains.
        let state = execute(&find_move(&state, "e2", "e3"), &state);
        let state = execute(&find_move(&state, "d7", "d6"), &state);
        let moves = legal_moves(pos("e3"), &state);
        assert_eq!(moves, vec![pos("e4")]);
    }

    #[test]
    fn pawn_double_step_blocked_by_intervening_piece() {
        let mut board = Board::standard();
        board.place(Piece::new(PieceKind::Knight, Color::Black, pos("e3")));
        let state = GameState::with_board(board, Color::White);
        let moves = legal_moves(pos("e2"), &state);
        assert!(!moves.contains(&pos("e3")));
        assert!(!moves.contains(&pos("e4")));
    }

    #[test]
    fn pawn_captures_diagonally() {
        let state = GameState::new();
        let state = execute(&find_move(&state, "e2", "e4"), &state);
        let state = execute(&find_move(&state, "d7", "d5"), &state);
        let moves = legal_moves(pos("e4"), &state);
        assert!(moves.contains(&pos("d5")));
        assert!(moves.contains(&pos("e5")));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn knight_moves_from_start() {
        let state = GameState::new();
        let moves = legal_moves(pos("g1"), &state);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&pos("f3")));
        assert!(moves.contains(&pos("h3")));
    }

    #[test]
    fn sliders_blocked_at_start() {
        let state = GameState::new();
        assert!(legal_moves(pos("c1"), &state).is_empty()); // bishop
        assert!(legal_moves(pos("a1"), &state).is_empty()); // rook
        assert!(legal_moves(pos("d1"), &state).is_empty()); // queen
    }

    #[test]
    fn rook_stops_at_first_capture() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, pos("h1")));
        board.place(Piece::new(PieceKind::King, Color::Black, pos("h8")));
        board.place(Piece::new(PieceKind::Rook, Color::White, pos("a1")));
        board.place(Piece::new(PieceKind::Pawn, Color::Black, pos("a5")));
        let state = GameState::with_board(board, Color::White);
        let moves = legal_moves(pos("a1"), &state);
        assert!(moves.contains(&pos("a5")));
        assert!(!moves.contains(&pos("a6")));
    }

    #[test]
    fn en_passant_gating() {
        let state = GameState::new();
        let state = execute(&find_move(&state, "e2", "e4"), &state);
        let state = execute(&find_move(&state, "a7", "a6"), &state);
        let state = execute(&find_move(&state, "e4", "e5"), &state);
        // Black's double step lands beside the e5 pawn.
        let state = execute(&find_move(&state, "d7", "d5"), &state);
        let moves = legal_moves(pos("e5"), &state);
        assert!(moves.contains(&pos("d6")));

        let ep = find_move(&state, "e5", "d6");
        assert!(ep.is_en_passant);
        assert_eq!(ep.captured.map(|p| p.pos), Some(pos("d5")));
    }

    #[test]
    fn en_passant_expires_after_one_move() {
        let state = GameState::new();
        let state = execute(&find_move(&state, "e2", "e4"), &state);
        let state = execute(&find_move(&state, "a7", "a6"), &state);
        let state = execute(&find_move(&state, "e4", "e5"), &state);
        let state = execute(&find_move(&state, "d7", "d5"), &state);
        // Decline the capture; the right is gone next turn.
        let state = execute(&find_move(&state, "h2", "h3"), &state);
        let state = execute(&find_move(&state, "a6", "a5"), &state);
        assert!(!legal_moves(pos("e5"), &state).contains(&pos("d6")));
    }

    #[test]
    fn en_passant_requires_double_step() {
        let state = GameState::new();
        let state = execute(&find_move(&state, "e2", "e4"), &state);
        let state = execute(&find_move(&state, "d7", "d6"), &state);
        let state = execute(&find_move(&state, "e4", "e5"), &state);
        // Single-step advance to d5 does not grant the capture.
        let state = execute(&find_move(&state, "d6", "d5"), &state);
        assert!(!legal_moves(pos("e5"), &state).contains(&pos("d6")));
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, pos("e1")));
        board.place(Piece::new(PieceKind::Rook, Color::White, pos("h1")));
        board.place(Piece::new(PieceKind::Rook, Color::White, pos("a1")));
        board.place(Piece::new(PieceKind::King, Color::Black, pos("e8")));
        board
    }

    #[test]
    fn castling_both_sides_when_eligible() {
        let state = GameState::with_board(castling_board(), Color::White);
        let moves = legal_moves(pos("e1"), &state);
        assert!(moves.contains(&pos("g1")));
        assert!(moves.contains(&pos("c1")));

        let kingside = find_move(&state, "e1", "g1");
        assert!(kingside.is_castling);
        assert!(kingside.is_kingside());
    }

    #[test]
    fn castling_blocked_by_intervening_piece() {
        let mut board = castling_board();
        board.place(Piece::new(PieceKind::Bishop, Color::White, pos("f1")));
        let state = GameState::with_board(board, Color::White);
        let moves = legal_moves(pos("e1"), &state);
        assert!(!moves.contains(&pos("g1")));
        assert!(moves.contains(&pos("c1")));
    }

    #[test]
    fn castling_denied_after_king_moved() {
        let mut board = castling_board();
        let mut king = board.take(pos("e1")).unwrap();
        king.has_moved = true;
        board.place(king);
        let state = GameState::with_board(board, Color::White);
        let moves = legal_moves(pos("e1"), &state);
        assert!(!moves.contains(&pos("g1")));
        assert!(!moves.contains(&pos("c1")));
    }

    #[test]
    fn castling_denied_after_rook_moved() {
        let mut board = castling_board();
        let mut rook = board.take(pos("h1")).unwrap();
        rook.has_moved = true;
        board.place(rook);
        let state = GameState::with_board(board, Color::White);
        let moves = legal_moves(pos("e1"), &state);
        assert!(!moves.contains(&pos("g1")));
        assert!(moves.contains(&pos("c1")));
    }

    #[test]
    fn castling_denied_while_in_check() {
        let mut board = castling_board();
        board.place(Piece::new(PieceKind::Rook, Color::Black, pos("e5")));
        let state = GameState::with_board(board, Color::White);
        let moves = legal_moves(pos("e1"), &state);
        assert!(!moves.contains(&pos("g1")));
        assert!(!moves.contains(&pos("c1")));
    }

    #[test]
    fn castling_denied_through_attacked_square() {
        let mut board = castling_board();
        board.place(Piece::new(PieceKind::Rook, Color::Black, pos("f5")));
        let state = GameState::with_board(board, Color::White);
        let moves = legal_moves(pos("e1"), &state);
        assert!(!moves.contains(&pos("g1"))); // crosses f1
        assert!(moves.contains(&pos("c1")));
    }

    #[test]
    fn castling_denied_into_attacked_square() {
        let mut board = castling_board();
        board.place(Piece::new(PieceKind::Rook, Color::Black, pos("g5")));
        let state = GameState::with_board(board, Color::White);
        let moves = legal_moves(pos("e1"), &state);
        assert!(!moves.contains(&pos("g1"))); // lands on g1, caught by self-check filter
        assert!(moves.contains(&pos("c1")));
    }

    #[test]
    fn promotion_expands_to_four_moves() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, pos("e1")));
        board.place(Piece::new(PieceKind::King, Color::Black, pos("h5")));
        let mut pawn = Piece::new(PieceKind::Pawn, Color::White, pos("a7"));
        pawn.has_moved = true;
        board.place(pawn);
        let state = GameState::with_board(board, Color::White);

        let promotions: Vec<Move> = all_legal_moves(Color::White, &state)
            .into_iter()
            .filter(|m| m.from == pos("a7"))
            .collect();
        assert_eq!(promotions.len(), 4);
        assert!(promotions.iter().all(|m| m.to == pos("a8")));
        for kind in PieceKind::PROMOTIONS {
            assert!(promotions.iter().any(|m| m.promotion == Some(kind)));
        }
    }

    #[test]
    fn promotion_detection() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, pos("e1")));
        board.place(Piece::new(PieceKind::King, Color::Black, pos("e8")));
        board.place(Piece::new(PieceKind::Pawn, Color::White, pos("a7")));
        board.place(Piece::new(PieceKind::Rook, Color::White, pos("b7")));
        board.place(Piece::new(PieceKind::Pawn, Color::Black, pos("h2")));
        let state = GameState::with_board(board, Color::White);

        assert!(is_pawn_promotion(pos("a7"), pos("a8"), &state));
        assert!(!is_pawn_promotion(pos("a7"), pos("a6"), &state));
        assert!(!is_pawn_promotion(pos("b7"), pos("b8"), &state)); // rook
        assert!(!is_pawn_promotion(pos("h2"), pos("h8"), &state)); // wrong rank for black
        assert!(is_pawn_promotion(pos("h2"), pos("h1"), &state));
        assert!(!is_pawn_promotion(pos("c4"), pos("c8"), &state)); // empty source
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, pos("e1")));
        board.place(Piece::new(PieceKind::Bishop, Color::White, pos("e4")));
        board.place(Piece::new(PieceKind::Rook, Color::Black, pos("e8")));
        board.place(Piece::new(PieceKind::King, Color::Black, pos("a8")));
        let state = GameState::with_board(board, Color::White);
        // The bishop is pinned on the e-file and may not move at all.
        assert!(legal_moves(pos("e4"), &state).is_empty());
    }

    #[test]
    fn check_must_be_addressed() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, pos("e1")));
        board.place(Piece::new(PieceKind::Rook, Color::Black, pos("e8")));
        board.place(Piece::new(PieceKind::Rook, Color::White, pos("a3")));
        board.place(Piece::new(PieceKind::King, Color::Black, pos("h8")));
        let state = GameState::with_board(board, Color::White);

        let moves = all_legal_moves(Color::White, &state);
        // Every move must leave the king safe: block on e3, or step off the file.
        assert!(moves
            .iter()
            .all(|m| !crate::status::is_in_check(Color::White, &execute(m, &state))));
        assert!(moves.iter().any(|m| m.to == pos("e3"))); // rook block
    }

    #[test]
    fn destinations_never_land_on_own_pieces() {
        let state = GameState::new();
        for m in all_legal_moves(Color::White, &state) {
            assert_ne!(m.from, m.to);
            assert!(state
                .board
                .piece_at(m.to)
                .is_none_or(|p| p.color != Color::White));
        }
    }
}
