//! Core traits and types shared by the search engine and the games
//!
//! This crate provides the abstractions a game has to satisfy to be searched:
//! - `GameState`: the adapter contract (legal moves, win value, pure move application)
//! - `Player`: the two sides of a zero-sum game
//! - the win-value convention used by every adapter

pub mod player;
pub mod state;

// Re-export main types for convenience
pub use player::{Player, DRAW, UNDECIDED};
pub use state::GameState;
