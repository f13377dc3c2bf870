//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::Path;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "PLAYOUT_CONFIG";

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from subdirectory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by PLAYOUT_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    // Check for explicit config path
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from {}: {}", CONFIG_ENV_VAR, path.display());
            return load_from_path(&path);
        }
        warn!(
            "{}={} not found, searching defaults",
            CONFIG_ENV_VAR,
            path.display()
        );
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = PathBuf::from(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(&path);
        }
    }

    // Fall back to defaults
    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
///
/// An unreadable or malformed file is logged and replaced by the built-in
/// defaults; env overrides apply either way.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, u64, f64, bool)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(raw) = std::env::var($key) {
            match raw.parse() {
                Ok(v) => $config.$section.$field = v,
                Err(_) => warn!("Ignoring {}={}: not a valid value", $key, raw),
            }
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: PLAYOUT_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "PLAYOUT_COMMON_LOG_LEVEL");
    env_override!(config, common.seed, "PLAYOUT_COMMON_SEED", parse);

    // MCTS
    env_override!(
        config,
        mcts.num_iterations,
        "PLAYOUT_MCTS_NUM_ITERATIONS",
        parse
    );
    env_override!(
        config,
        mcts.rollout_depth,
        "PLAYOUT_MCTS_ROLLOUT_DEPTH",
        parse
    );
    env_override!(
        config,
        mcts.exploration_constant,
        "PLAYOUT_MCTS_EXPLORATION_CONSTANT",
        parse
    );
    env_override!(
        config,
        mcts.early_exit_on_terminal,
        "PLAYOUT_MCTS_EARLY_EXIT_ON_TERMINAL",
        parse
    );
    env_override!(config, mcts.perspective, "PLAYOUT_MCTS_PERSPECTIVE");
    env_override!(
        config,
        mcts.final_selection,
        "PLAYOUT_MCTS_FINAL_SELECTION"
    );

    // Arena
    env_override!(config, arena.game, "PLAYOUT_ARENA_GAME");
    env_override!(config, arena.games, "PLAYOUT_ARENA_GAMES", parse);
    env_override!(config, arena.max_moves, "PLAYOUT_ARENA_MAX_MOVES", parse);
    env_override!(config, arena.reuse_tree, "PLAYOUT_ARENA_REUSE_TREE", parse);
    env_override!(config, arena.show_board, "PLAYOUT_ARENA_SHOW_BOARD", parse);

    config
}
