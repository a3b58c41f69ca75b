//! One-ply tactics: the Medium difficulty.
//!
//! Takes an immediate win when one exists, otherwise blocks the opponent's
//! immediate win, otherwise plays randomly. Looks exactly one move ahead.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{check_winner, Board, GameState, Player};

use super::agent::Agent;
use super::random::random_move;

/// Would dropping `player`'s piece in `col` win on the spot?
fn is_winning_drop(board: &Board, col: usize, player: Player) -> bool {
    match board.with_piece(col, player.to_cell()) {
        Ok((next, row)) => check_winner(&next, row, col, player).is_some(),
        Err(_) => false,
    }
}

/// Win-then-block-then-random move choice for `player`.
pub fn tactical_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Option<usize> {
    let valid = board.valid_columns();
    if valid.is_empty() {
        return None;
    }

    // Take an immediate win
    for &col in &valid {
        if is_winning_drop(board, col, player) {
            return Some(col);
        }
    }

    // Block the opponent's immediate win
    for &col in &valid {
        if is_winning_drop(board, col, player.other()) {
            return Some(col);
        }
    }

    random_move(board, rng)
}

/// Agent wrapper around [`tactical_move`].
pub struct TacticalAgent {
    rng: StdRng,
}

impl TacticalAgent {
    pub fn new() -> Self {
        TacticalAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    pub fn from_seed(seed: u64) -> Self {
        TacticalAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for TacticalAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for TacticalAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        tactical_move(state.board(), state.current_player(), &mut self.rng)
    }

    fn name(&self) -> &str {
        "Tactical"
    }
}
