//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic shared by
//! the search engine binaries.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`PLAYOUT_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! PLAYOUT_<SECTION>_<KEY>=value
//!
//! Examples:
//!     PLAYOUT_COMMON_LOG_LEVEL=debug
//!     PLAYOUT_MCTS_NUM_ITERATIONS=5000
//!     PLAYOUT_MCTS_PERSPECTIVE=node_to_move
//!     PLAYOUT_ARENA_GAME=connect4
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{
    apply_env_overrides, load_config, load_from_path, CONFIG_ENV_VAR, CONFIG_SEARCH_PATHS,
};
pub use structs::*;

#[cfg(test)]
mod tests;
