//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_seed() -> u64 {
    defaults::seed()
}
fn d_num_iterations() -> u32 {
    defaults::num_iterations()
}
fn d_rollout_depth() -> u32 {
    defaults::rollout_depth()
}
fn d_exploration_constant() -> f64 {
    defaults::exploration_constant()
}
fn d_early_exit() -> bool {
    defaults::early_exit_on_terminal()
}
fn d_perspective() -> String {
    defaults::perspective().into()
}
fn d_final_selection() -> String {
    defaults::final_selection().into()
}
fn d_game() -> String {
    defaults::game().into()
}
fn d_games() -> u32 {
    defaults::games()
}
fn d_max_moves() -> u32 {
    defaults::max_moves()
}
fn d_reuse_tree() -> bool {
    defaults::reuse_tree()
}
fn d_show_board() -> bool {
    defaults::show_board()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub mcts: MctsSection,
    #[serde(default)]
    pub arena: ArenaConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    /// Seed for every search RNG; games in a match use `seed + game_index`.
    #[serde(default = "d_seed")]
    pub seed: u64,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
            seed: defaults::seed(),
        }
    }
}

/// Search parameters as written in config.toml.
///
/// `perspective` and `final_selection` stay strings here; the binary parses
/// them into the search crate's enums and reports bad values.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsSection {
    #[serde(default = "d_num_iterations")]
    pub num_iterations: u32,
    #[serde(default = "d_rollout_depth")]
    pub rollout_depth: u32,
    #[serde(default = "d_exploration_constant")]
    pub exploration_constant: f64,
    #[serde(default = "d_early_exit")]
    pub early_exit_on_terminal: bool,
    #[serde(default = "d_perspective")]
    pub perspective: String,
    #[serde(default = "d_final_selection")]
    pub final_selection: String,
}

impl Default for MctsSection {
    fn default() -> Self {
        Self {
            num_iterations: defaults::num_iterations(),
            rollout_depth: defaults::rollout_depth(),
            exploration_constant: defaults::exploration_constant(),
            early_exit_on_terminal: defaults::early_exit_on_terminal(),
            perspective: defaults::perspective().into(),
            final_selection: defaults::final_selection().into(),
        }
    }
}

/// Self-play arena configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    /// Game to play: "tictactoe" or "connect4"
    #[serde(default = "d_game")]
    pub game: String,
    /// Number of self-play games per run
    #[serde(default = "d_games")]
    pub games: u32,
    /// Hard cap on plies per game
    #[serde(default = "d_max_moves")]
    pub max_moves: u32,
    /// Keep the searched subtree between moves instead of starting fresh
    #[serde(default = "d_reuse_tree")]
    pub reuse_tree: bool,
    /// Print the board after every move
    #[serde(default = "d_show_board")]
    pub show_board: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            game: defaults::game().into(),
            games: defaults::games(),
            max_moves: defaults::max_moves(),
            reuse_tree: defaults::reuse_tree(),
            show_board: defaults::show_board(),
        }
    }
}
