//! Game state snapshot.

use crate::board::Board;
use crate::movegen::all_legal_moves;
use crate::status::is_in_check;
use chess_core::{Color, Move, Piece};

/// A snapshot of a game in progress.
///
/// States are immutable by convention: the executor returns a fresh value
/// and never touches the one it was given. The UI holds the latest snapshot;
/// older ones stay valid for history display.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    /// The side to move.
    pub current_turn: Color,
    /// Executed moves in chronological order, capture-annotated.
    pub move_history: Vec<Move>,
    /// Every piece captured so far, in capture order.
    pub captured_pieces: Vec<Piece>,
    /// The side to move is in check.
    pub is_check: bool,
    /// The side to move is checkmated.
    pub is_checkmate: bool,
    /// The side to move has no legal move but is not in check.
    pub is_stalemate: bool,
    /// Full plies executed; always equals `move_history.len()`.
    pub move_count: u32,
    /// The most recent move, needed for en passant eligibility.
    pub last_move: Option<Move>,
}

impl GameState {
    /// Creates the standard starting position, white to move.
    pub fn new() -> Self {
        GameState {
            board: Board::standard(),
            current_turn: Color::White,
            move_history: Vec::new(),
            captured_pieces: Vec::new(),
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
            move_count: 0,
            last_move: None,
        }
    }

    /// Creates a state from an arbitrary board with the given side to move,
    /// recomputing the status flags. Intended for tests and analysis
    /// positions; the engine does not verify that both kings are present.
    pub fn with_board(board: Board, current_turn: Color) -> Self {
        let mut state = GameState {
            board,
            current_turn,
            move_history: Vec::new(),
            captured_pieces: Vec::new(),
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
            move_count: 0,
            last_move: None,
        };
        state.is_check = is_in_check(current_turn, &state);
        let no_moves = all_legal_moves(current_turn, &state).is_empty();
        state.is_checkmate = state.is_check && no_moves;
        state.is_stalemate = !state.is_check && no_moves;
        state
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
