//! Perft (performance test) for move generator validation.
//!
//! Perft counts leaf nodes of the legal-move tree at a given depth; the
//! counts from the starting position are well known, so any divergence
//! points at a generation or execution bug.

use crate::executor::execute;
use crate::movegen::all_legal_moves;
use crate::state::GameState;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(state.current_turn, state);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let next = execute(m, state);
        nodes += perft(&next, depth - 1);
    }
    nodes
}

/// Perft with divide - shows the node count under each root move.
/// Useful for pinpointing which move subtree has an incorrect count.
pub fn perft_divide(state: &GameState, depth: u32) -> Vec<(String, u64)> {
    let moves = all_legal_moves(state.current_turn, state);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let next = execute(m, state);
        let nodes = if depth > 1 { perft(&next, depth - 1) } else { 1 };
        results.push((m.to_string(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
