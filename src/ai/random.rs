use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, GameState};

use super::agent::Agent;

/// Pick a column uniformly at random among those still playable, or `None`
/// on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let valid = board.valid_columns();
    if valid.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..valid.len());
    Some(valid[idx])
}

/// An agent that selects uniformly at random from legal columns (the Easy
/// difficulty).
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    pub fn from_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        random_move(state.board(), &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
