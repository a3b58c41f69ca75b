//! Core Connect Four game logic: board representation, player types, win and
//! draw detection, and the game state machine with immutable transitions.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, CENTER_COL, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use win::{check_draw, check_winner, find_winner, WinLine, WIN_LENGTH};
