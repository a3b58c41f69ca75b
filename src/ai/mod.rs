//! Move-selection engine: difficulty tiers, heuristic evaluation, and the
//! alpha-beta search. Pure computation over board snapshots; never mutates
//! caller state and performs no I/O.

mod agent;
mod difficulty;
pub mod heuristic;
mod minimax;
mod random;
mod tactical;

pub use agent::Agent;
pub use difficulty::{
    choose_move, choose_move_at_depth, Difficulty, HARD_SEARCH_DEPTH,
};
pub use minimax::{best_move, MinimaxAgent};
pub use random::{random_move, RandomAgent};
pub use tactical::{tactical_move, TacticalAgent};
