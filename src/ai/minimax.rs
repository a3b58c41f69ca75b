//! Fixed-depth minimax search with alpha-beta pruning: the Hard difficulty.
//!
//! The search is parameterized by the side it optimizes for, so either
//! player may run it (AI vs AI works). Every simulated move copies the
//! board, so sibling branches never see each other's state and the caller's
//! board is never touched.

use crate::game::{check_draw, find_winner, Board, GameState, Player};

use super::agent::Agent;
use super::heuristic::score_position;

/// Base score of a decided position. Depth remaining is added on top so the
/// search prefers faster wins and slower losses.
const WIN_SCORE: i32 = 1000;

/// Pick the best column for `player` searching `depth` plies ahead.
///
/// Each root move is scored by a minimizing continuation at `depth - 1` with
/// fresh alpha-beta bounds; the strictly greatest score wins, so ties go to
/// the lowest column index. Returns `None` only on a full board.
pub fn best_move(board: &Board, player: Player, depth: usize) -> Option<usize> {
    let valid = board.valid_columns();

    let mut best_col = None;
    let mut best_score = i32::MIN;

    for col in valid {
        let (next, _) = board.with_piece(col, player.to_cell()).unwrap();
        let score = minimax(
            &next,
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            false,
            player,
        );
        if score > best_score {
            best_score = score;
            best_col = Some(col);
        }
    }

    best_col
}

/// Recursive minimax step. `maximizing` says whose move it is relative to
/// `player`, the side the whole search optimizes for.
fn minimax(
    board: &Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    player: Player,
) -> i32 {
    // Terminal checks, in priority order: win, loss, then draw/cutoff
    if let Some(win) = find_winner(board) {
        return if win.player == player {
            WIN_SCORE + depth as i32
        } else {
            -WIN_SCORE - depth as i32
        };
    }
    if check_draw(board) || depth == 0 {
        return score_position(board, player);
    }

    if maximizing {
        let mut max_score = i32::MIN;
        for col in board.valid_columns() {
            let (next, _) = board.with_piece(col, player.to_cell()).unwrap();
            let score = minimax(&next, depth - 1, alpha, beta, false, player);
            max_score = max_score.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        max_score
    } else {
        let opponent = player.other();
        let mut min_score = i32::MAX;
        for col in board.valid_columns() {
            let (next, _) = board.with_piece(col, opponent.to_cell()).unwrap();
            let score = minimax(&next, depth - 1, alpha, beta, true, player);
            min_score = min_score.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        min_score
    }
}

/// Agent wrapper around [`best_move`] at a fixed depth.
pub struct MinimaxAgent {
    depth: usize,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent { depth }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        best_move(state.board(), state.current_player(), self.depth)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
