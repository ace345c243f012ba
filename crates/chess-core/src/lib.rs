//! Core types for chess.
//!
//! This crate provides the fundamental value types used across the engine:
//! - [`Color`] for the two players
//! - [`Position`] for board coordinates (row/column grid)
//! - [`PieceKind`] and [`Piece`] for piece representation
//! - [`Move`] for move records

mod color;
mod mov;
mod piece;
mod position;

pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use position::Position;
