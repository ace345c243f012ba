//! Minimax opponent with alpha-beta pruning.
//!
//! The bot scores every root candidate with a fixed-depth alpha-beta
//! search over the rules engine, applies a difficulty policy (score
//! perturbation and checkmate avoidance on easy, staged aggression on
//! hard), and races the whole computation against a wall-clock budget.
//! A search that loses the race is abandoned and a random legal move is
//! played instead, so a move always comes back promptly.
//!
//! # Example
//!
//! ```
//! use chess_bot::{generate_move, BotConfig, Difficulty};
//! use chess_rules::GameState;
//!
//! let state = GameState::new();
//! let config = BotConfig::new(Difficulty::Easy);
//! let reply = generate_move(&state, &config);
//! assert!(reply.is_some());
//! ```

mod evaluate;
mod search;

pub use evaluate::{evaluate, MATE_SCORE};
pub use search::{generate_move, would_result_in_checkmate, BotConfig, Difficulty};
