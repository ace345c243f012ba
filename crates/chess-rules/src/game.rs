//! Controller-facing game wrapper.
//!
//! [`Game`] owns the latest [`GameState`] snapshot and guards the
//! validate-then-execute sequence the engine core expects of its callers.
//! The core itself never throws for game conditions; the error type here
//! exists so a controller gets a `Result` instead of having to remember the
//! gating protocol.

use crate::executor::{execute, is_valid_move};
use crate::movegen::legal_moves;
use crate::state::GameState;
use chess_core::{Move, Position};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move failed validation against the current state.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// The game has already ended in checkmate or stalemate.
    #[error("game has already ended")]
    GameOver,
}

/// A chess game holding the latest state snapshot.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Starts a new game from the standard position, white to move.
    pub fn new() -> Self {
        Game {
            state: GameState::new(),
        }
    }

    /// Starts a game from an existing snapshot.
    pub fn from_state(state: GameState) -> Self {
        Game { state }
    }

    /// Returns the current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the legal destinations for the piece at `pos`, for move
    /// highlighting. Empty for empty squares and off-turn pieces.
    pub fn legal_moves(&self, pos: Position) -> Vec<Position> {
        legal_moves(pos, &self.state)
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.state.is_checkmate || self.state.is_stalemate
    }

    /// Validates and executes a move, replacing the held snapshot.
    pub fn try_move(&mut self, mov: &Move) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if !is_valid_move(mov, &self.state) {
            return Err(GameError::IllegalMove(mov.to_string()));
        }
        self.state = execute(mov, &self.state);
        Ok(())
    }
}
