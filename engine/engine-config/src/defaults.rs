//! Default configuration values loaded from config.defaults.toml.
//!
//! The shared TOML file is embedded at compile time so the binary and the
//! checked-in defaults can never drift apart.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    mcts: MctsDefaults,
    arena: ArenaDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
    seed: u64,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    num_iterations: u32,
    rollout_depth: u32,
    exploration_constant: f64,
    early_exit_on_terminal: bool,
    perspective: String,
    final_selection: String,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    game: String,
    games: u32,
    max_moves: u32,
    reuse_tree: bool,
    show_board: bool,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}
pub fn seed() -> u64 {
    DEFAULTS.common.seed
}

// MCTS
pub fn num_iterations() -> u32 {
    DEFAULTS.mcts.num_iterations
}
pub fn rollout_depth() -> u32 {
    DEFAULTS.mcts.rollout_depth
}
pub fn exploration_constant() -> f64 {
    DEFAULTS.mcts.exploration_constant
}
pub fn early_exit_on_terminal() -> bool {
    DEFAULTS.mcts.early_exit_on_terminal
}
pub fn perspective() -> &'static str {
    &DEFAULTS.mcts.perspective
}
pub fn final_selection() -> &'static str {
    &DEFAULTS.mcts.final_selection
}

// Arena
pub fn game() -> &'static str {
    &DEFAULTS.arena.game
}
pub fn games() -> u32 {
    DEFAULTS.arena.games
}
pub fn max_moves() -> u32 {
    DEFAULTS.arena.max_moves
}
pub fn reuse_tree() -> bool {
    DEFAULTS.arena.reuse_tree
}
pub fn show_board() -> bool {
    DEFAULTS.arena.show_board
}
