//! Difficulty tiers and the single move-selection entry point.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::game::{Board, Player};

use super::minimax::best_move;
use super::random::random_move;
use super::tactical::tactical_move;

/// Search depth used by [`Difficulty::Hard`].
pub const HARD_SEARCH_DEPTH: usize = 6;

/// Named difficulty tiers as presented to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// The search depth this tier corresponds to under the depth thresholds
    /// of [`choose_move_at_depth`].
    pub fn search_depth(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => HARD_SEARCH_DEPTH,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{other}' (expected 'easy', 'medium', or 'hard')"
            )),
        }
    }
}

/// Choose a column for `player` at the given difficulty tier. `None` means
/// the board is full and no move exists.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => tactical_move(board, player, rng),
        Difficulty::Hard => best_move(board, player, HARD_SEARCH_DEPTH),
    }
}

/// Depth-parameterized move choice: depth 0 or 1 plays randomly, 2 or 3
/// plays one-ply tactics, anything deeper runs the full search.
pub fn choose_move_at_depth<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    depth: usize,
    rng: &mut R,
) -> Option<usize> {
    match depth {
        0 | 1 => random_move(board, rng),
        2 | 3 => tactical_move(board, player, rng),
        deeper => best_move(board, player, deeper),
    }
}
