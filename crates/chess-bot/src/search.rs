//! Move selection: alpha-beta search, difficulty policy, and time budget.

use crate::evaluate::{evaluate, MATE_SCORE};
use chess_core::{Color, Move};
use chess_rules::{all_legal_moves, execute, GameState};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Search depth and filtering behavior of the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    /// Fixed search depth in plies.
    pub const fn search_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Conventional wall-clock budget for this difficulty.
    pub const fn thinking_time(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(2000),
            Difficulty::Hard => Duration::from_millis(3000),
        }
    }
}

/// Configuration for a move request.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub difficulty: Difficulty,
    /// Wall-clock budget; when it elapses the search is abandoned and a
    /// random legal move is played instead.
    pub max_thinking_time: Duration,
}

impl BotConfig {
    /// Creates a config with the conventional time budget for `difficulty`.
    pub const fn new(difficulty: Difficulty) -> Self {
        BotConfig {
            difficulty,
            max_thinking_time: difficulty.thinking_time(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new(Difficulty::Easy)
    }
}

/// Easy-mode score perturbation half-width, in centipawns.
const JITTER: i32 = 20;

/// Hard mode avoids delivering mate during the opening; from this many
/// executed plies onward it plays mating moves.
const MATE_AVOIDANCE_PLIES: u32 = 10;

/// Picks a move for the side to move, racing the search against the
/// configured time budget.
///
/// Returns `None` only when there is no legal move at all, i.e. the game
/// already ended and the caller should not have asked. The search thread is
/// never interrupted; if it loses the race its result is discarded and a
/// uniformly random legal move is returned instead.
pub fn generate_move(state: &GameState, config: &BotConfig) -> Option<Move> {
    let root_moves = all_legal_moves(state.current_turn, state);
    if root_moves.is_empty() {
        return None;
    }

    let (tx, rx) = mpsc::channel();
    {
        let state = state.clone();
        let config = config.clone();
        thread::spawn(move || {
            // The receiver may be gone if the timer already won.
            let _ = tx.send(pick_move(&state, &config));
        });
    }

    match rx.recv_timeout(config.max_thinking_time) {
        Ok(best) => best,
        Err(_) => root_moves.choose(&mut rand::thread_rng()).copied(),
    }
}

/// Executes `mov` on a scratch state and reports whether the opponent ends
/// up checkmated.
pub fn would_result_in_checkmate(mov: &Move, state: &GameState) -> bool {
    execute(mov, state).is_checkmate
}

/// Scores every root candidate, applies the difficulty policy, and selects
/// the best survivor (first seen wins ties).
fn pick_move(state: &GameState, config: &BotConfig) -> Option<Move> {
    let bot = state.current_turn;
    let depth = config.difficulty.search_depth();
    let mut rng = rand::thread_rng();

    let mut scored: Vec<(Move, i32)> = all_legal_moves(bot, state)
        .into_iter()
        .map(|m| {
            let next = execute(&m, state);
            let mut score = minimax(&next, depth - 1, i32::MIN + 1, i32::MAX, bot);
            if config.difficulty == Difficulty::Easy {
                score += rng.gen_range(-JITTER..=JITTER);
            }
            (m, score)
        })
        .collect();

    let avoid_mates = match config.difficulty {
        Difficulty::Easy => true,
        Difficulty::Hard => state.move_count < MATE_AVOIDANCE_PLIES,
    };
    if avoid_mates {
        let merciful: Vec<(Move, i32)> = scored
            .iter()
            .copied()
            .filter(|(m, _)| !would_result_in_checkmate(m, state))
            .collect();
        // Never end up with no move: if everything mates, keep the full list.
        if !merciful.is_empty() {
            scored = merciful;
        }
    }

    let mut best: Option<(Move, i32)> = None;
    for (m, score) in scored {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((m, score));
        }
    }
    best.map(|(m, _)| m)
}

/// Fixed-depth minimax with alpha-beta pruning. `bot` is the maximizing
/// side; terminal classification reads the flags the executor computed.
fn minimax(state: &GameState, depth: u8, mut alpha: i32, mut beta: i32, bot: Color) -> i32 {
    if state.is_checkmate {
        // The side to move has been mated. Remaining depth breaks ties in
        // favor of the faster mate.
        let score = MATE_SCORE + depth as i32;
        return if state.current_turn == bot { -score } else { score };
    }
    if state.is_stalemate {
        return 0;
    }
    if depth == 0 {
        return evaluate(state, bot);
    }

    let moves = all_legal_moves(state.current_turn, state);
    if moves.is_empty() {
        // Malformed fixture (e.g. kingless board); score it statically.
        return evaluate(state, bot);
    }

    if state.current_turn == bot {
        let mut best = i32::MIN + 1;
        for m in &moves {
            best = best.max(minimax(&execute(m, state), depth - 1, alpha, beta, bot));
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for m in &moves {
            best = best.min(minimax(&execute(m, state), depth - 1, alpha, beta, bot));
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
