//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - 8x8 grid of owned pieces
//! - [`GameState`] - immutable game snapshot (board, turn, history, status)
//! - Legal move generation and attack detection
//! - Check, checkmate, and stalemate detection
//! - Move execution with castling, en passant, and promotion handling
//! - [`Game`] - a thin controller-facing wrapper that validates then executes
//!
//! # Architecture
//!
//! Every operation is a pure function over [`GameState`] values: executing a
//! move produces a new snapshot and never mutates its input, so callers may
//! retain old states for history or undo. Attack detection deliberately uses
//! a castling-free king rule, breaking the cycle between castling
//! eligibility (which asks "is this square attacked?") and king move
//! generation.
//!
//! # Example
//!
//! ```
//! use chess_rules::{all_legal_moves, execute, GameState};
//!
//! let state = GameState::new();
//! let moves = all_legal_moves(state.current_turn, &state);
//! assert_eq!(moves.len(), 20);
//!
//! let next = execute(&moves[0], &state);
//! assert_ne!(next.current_turn, state.current_turn);
//! assert_eq!(state.move_count, 0); // input untouched
//! ```

mod attacks;
mod board;
mod executor;
mod game;
mod movegen;
pub mod perft;
mod state;
mod status;

pub use attacks::is_square_attacked;
pub use board::Board;
pub use executor::{execute, is_valid_move};
pub use game::{Game, GameError};
pub use movegen::{all_legal_moves, is_pawn_promotion, legal_moves};
pub use state::GameState;
pub use status::{is_checkmate, is_in_check, is_stalemate};
