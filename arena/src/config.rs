//! Configuration for the arena binary
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use mcts::{FinalSelection, MctsConfig, ScorePerspective};
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;

/// Games the arena knows how to play
pub const SUPPORTED_GAMES: &[&str] = &["tictactoe", "connect4"];

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_game() -> String {
    CENTRAL_CONFIG.arena.game.clone()
}

fn default_games() -> u32 {
    CENTRAL_CONFIG.arena.games
}

fn default_max_moves() -> u32 {
    CENTRAL_CONFIG.arena.max_moves
}

fn default_reuse_tree() -> bool {
    CENTRAL_CONFIG.arena.reuse_tree
}

fn default_show_board() -> bool {
    CENTRAL_CONFIG.arena.show_board
}

fn default_iterations() -> u32 {
    CENTRAL_CONFIG.mcts.num_iterations
}

fn default_rollout_depth() -> u32 {
    CENTRAL_CONFIG.mcts.rollout_depth
}

fn default_exploration() -> f64 {
    CENTRAL_CONFIG.mcts.exploration_constant
}

fn default_early_exit() -> bool {
    CENTRAL_CONFIG.mcts.early_exit_on_terminal
}

fn default_perspective() -> String {
    CENTRAL_CONFIG.mcts.perspective.clone()
}

fn default_final_selection() -> String {
    CENTRAL_CONFIG.mcts.final_selection.clone()
}

fn default_seed() -> u64 {
    CENTRAL_CONFIG.common.seed
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

#[derive(Parser, Debug, Clone)]
#[command(name = "arena")]
#[command(about = "Self-play games between two UCB1 MCTS players")]
#[command(
    long_about = "Plays complete games where both sides are driven by the same MCTS tree.
After every search the chosen move is committed, so the explored subtree
carries over to the next turn.

Configuration is loaded from config.toml with PLAYOUT_<SECTION>_<KEY>
environment variable overrides. CLI arguments take highest priority."
)]
pub struct Config {
    /// Game to play (tictactoe, connect4)
    #[arg(long, default_value_t = default_game())]
    pub game: String,

    /// Number of games to play
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// Stop a game after this many plies
    #[arg(long, default_value_t = default_max_moves())]
    pub max_moves: u32,

    /// Keep the searched subtree between moves
    #[arg(long, action = clap::ArgAction::Set, default_value_t = default_reuse_tree())]
    pub reuse_tree: bool,

    /// Print the board after every move
    #[arg(long, action = clap::ArgAction::Set, default_value_t = default_show_board())]
    pub show_board: bool,

    /// MCTS iterations per move
    #[arg(long, default_value_t = default_iterations())]
    pub iterations: u32,

    /// Maximum plies per rollout
    #[arg(long, default_value_t = default_rollout_depth())]
    pub rollout_depth: u32,

    /// UCB1 exploration constant
    #[arg(long, default_value_t = default_exploration())]
    pub exploration: f64,

    /// Stop a search once a step lands on a resolved terminal node
    #[arg(long, action = clap::ArgAction::Set, default_value_t = default_early_exit())]
    pub early_exit: bool,

    /// Whose wins drive UCB1 (mover, node_to_move)
    #[arg(long, default_value_t = default_perspective())]
    pub perspective: String,

    /// How the move is picked after searching (ucb1, most_visited, best_win_rate)
    #[arg(long, default_value_t = default_final_selection())]
    pub final_selection: String,

    /// Base RNG seed; game N uses seed + N
    #[arg(long, default_value_t = default_seed())]
    pub seed: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_GAMES.contains(&self.game.as_str()) {
            return Err(anyhow!(
                "unknown game '{}', expected one of {}",
                self.game,
                SUPPORTED_GAMES.join(", ")
            ));
        }

        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        if self.max_moves == 0 {
            return Err(anyhow!("max_moves must be greater than 0"));
        }

        if self.iterations == 0 {
            return Err(anyhow!("iterations must be greater than 0"));
        }

        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(anyhow!(
                "exploration must be a finite non-negative number, got {}",
                self.exploration
            ));
        }

        self.score_perspective()?;
        self.selection()?;

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    pub fn score_perspective(&self) -> Result<ScorePerspective> {
        self.perspective.parse().map_err(|e: String| anyhow!(e))
    }

    pub fn selection(&self) -> Result<FinalSelection> {
        self.final_selection.parse().map_err(|e: String| anyhow!(e))
    }

    /// Search parameters for the given game of the match.
    pub fn mcts_config(&self, game_index: u32) -> Result<MctsConfig> {
        Ok(MctsConfig::default()
            .with_iterations(self.iterations)
            .with_rollout_depth(self.rollout_depth)
            .with_exploration(self.exploration)
            .with_early_exit(self.early_exit)
            .with_perspective(self.score_perspective()?)
            .with_final_selection(self.selection()?)
            .with_seed(self.seed.wrapping_add(u64::from(game_index))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            game: "tictactoe".into(),
            games: 1,
            max_moves: 9,
            reuse_tree: true,
            show_board: false,
            iterations: 100,
            rollout_depth: 9,
            exploration: 2.0,
            early_exit: false,
            perspective: "mover".into(),
            final_selection: "ucb1".into(),
            seed: 42,
            log_level: "info".into(),
        }
    }

    #[test]
    fn validate_accepts_valid_configuration() {
        let cfg = base_config();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_unknown_game() {
        let mut cfg = base_config();
        cfg.game = "chess".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("unknown game"));
    }

    #[test]
    fn validate_rejects_zero_games() {
        let mut cfg = base_config();
        cfg.games = 0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("games"));
    }

    #[test]
    fn validate_rejects_zero_iterations() {
        let mut cfg = base_config();
        cfg.iterations = 0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("iterations"));
    }

    #[test]
    fn validate_rejects_negative_exploration() {
        let mut cfg = base_config();
        cfg.exploration = -1.0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("exploration"));
    }

    #[test]
    fn validate_rejects_unknown_perspective() {
        let mut cfg = base_config();
        cfg.perspective = "parent".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("score perspective"));
    }

    #[test]
    fn validate_rejects_unknown_final_selection() {
        let mut cfg = base_config();
        cfg.final_selection = "robust".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("final selection"));
    }

    #[test]
    fn validate_rejects_invalid_log_level() {
        let mut cfg = base_config();
        cfg.log_level = "nope".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("invalid log level"));
    }

    #[test]
    fn mcts_config_carries_cli_values() {
        let mut cfg = base_config();
        cfg.perspective = "node_to_move".into();
        cfg.final_selection = "most_visited".into();

        let mcts = cfg.mcts_config(3).unwrap();
        assert_eq!(mcts.num_iterations, 100);
        assert_eq!(mcts.rollout_depth, 9);
        assert_eq!(mcts.perspective, ScorePerspective::NodeToMove);
        assert_eq!(mcts.final_selection, FinalSelection::MostVisited);
        assert_eq!(mcts.seed, 45);
    }

    #[test]
    fn shipped_defaults_pick_most_visited() {
        let mut cfg = base_config();
        cfg.final_selection = CentralConfig::default().mcts.final_selection;

        let mcts = cfg.mcts_config(0).unwrap();
        assert_eq!(mcts.final_selection, FinalSelection::MostVisited);
        assert_eq!(MctsConfig::default().final_selection, FinalSelection::Ucb1);
    }

    #[test]
    fn cli_flags_override_defaults() {
        let cfg = Config::parse_from([
            "arena",
            "--game",
            "connect4",
            "--iterations",
            "250",
            "--reuse-tree",
            "false",
        ]);
        assert_eq!(cfg.game, "connect4");
        assert_eq!(cfg.iterations, 250);
        assert!(!cfg.reuse_tree);
    }
}
