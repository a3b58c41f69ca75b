//! # Connect Four
//!
//! A Connect Four engine: 6×7 board model, win/draw detection, and a
//! difficulty-tiered AI opponent (random, one-ply tactics, and minimax with
//! alpha-beta pruning over a windowed positional heuristic).
//!
//! The engine is a pure computation library: every call receives a board
//! snapshot and returns a result without mutating caller state or doing any
//! I/O. The terminal front end in `main.rs` is one possible collaborator.
//!
//! ## Modules
//!
//! - [`game`] — Board, player, win/draw detection, game state machine
//! - [`ai`] — Agent trait, difficulty tiers, heuristic, alpha-beta search
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
