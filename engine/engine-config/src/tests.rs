//! Tests for the configuration module.

use super::*;

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.common.log_level, "info");
    assert_eq!(config.common.seed, 42);
    assert_eq!(config.mcts.num_iterations, 1000);
    assert_eq!(config.arena.game, "tictactoe");
}

#[test]
fn test_mcts_defaults() {
    let config = CentralConfig::default();
    assert_eq!(config.mcts.num_iterations, 1000);
    assert!((config.mcts.exploration_constant - 2.0).abs() < f64::EPSILON);
    assert!(!config.mcts.early_exit_on_terminal);
    assert_eq!(config.mcts.perspective, "mover");
    assert_eq!(config.mcts.final_selection, "most_visited");
}

#[test]
fn test_arena_defaults() {
    let config = CentralConfig::default();
    assert_eq!(config.arena.games, 1);
    assert_eq!(config.arena.max_moves, 100);
    assert!(config.arena.reuse_tree);
    assert!(config.arena.show_board);
}

#[test]
fn test_env_overrides() {
    std::env::set_var("PLAYOUT_MCTS_ROLLOUT_DEPTH", "7");
    std::env::set_var("PLAYOUT_MCTS_EXPLORATION_CONSTANT", "0.5");
    std::env::set_var("PLAYOUT_MCTS_FINAL_SELECTION", "best_win_rate");
    std::env::set_var("PLAYOUT_ARENA_REUSE_TREE", "false");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.mcts.rollout_depth, 7);
    assert!((config.mcts.exploration_constant - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.mcts.final_selection, "best_win_rate");
    assert!(!config.arena.reuse_tree);

    std::env::remove_var("PLAYOUT_MCTS_ROLLOUT_DEPTH");
    std::env::remove_var("PLAYOUT_MCTS_EXPLORATION_CONSTANT");
    std::env::remove_var("PLAYOUT_MCTS_FINAL_SELECTION");
    std::env::remove_var("PLAYOUT_ARENA_REUSE_TREE");
}

#[test]
fn test_unparseable_env_override_is_ignored() {
    std::env::set_var("PLAYOUT_ARENA_MAX_MOVES", "lots");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.arena.max_moves, 100);

    std::env::remove_var("PLAYOUT_ARENA_MAX_MOVES");
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[common]
log_level = "debug"
seed = 7

[mcts]
num_iterations = 5000
rollout_depth = 42
exploration_constant = 1.41
early_exit_on_terminal = true
perspective = "node_to_move"
final_selection = "best_win_rate"

[arena]
game = "connect4"
games = 10
max_moves = 42
reuse_tree = false
show_board = false
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.common.log_level, "debug");
    assert_eq!(config.common.seed, 7);
    assert_eq!(config.mcts.num_iterations, 5000);
    assert_eq!(config.mcts.rollout_depth, 42);
    assert!((config.mcts.exploration_constant - 1.41).abs() < f64::EPSILON);
    assert!(config.mcts.early_exit_on_terminal);
    assert_eq!(config.mcts.perspective, "node_to_move");
    assert_eq!(config.mcts.final_selection, "best_win_rate");
    assert_eq!(config.arena.game, "connect4");
    assert_eq!(config.arena.games, 10);
    assert_eq!(config.arena.max_moves, 42);
    assert!(!config.arena.reuse_tree);
    assert!(!config.arena.show_board);
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[arena]
game = "connect4"
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.arena.game, "connect4");
    assert_eq!(config.arena.max_moves, 100); // Default
    assert_eq!(config.common.log_level, "info"); // Default
    assert_eq!(config.mcts.num_iterations, 1000); // Default
}

#[test]
fn test_load_from_path() {
    let path = std::env::temp_dir().join(format!("playout-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[mcts]\nnum_iterations = 321\n").unwrap();

    let config = load_from_path(&path);
    assert_eq!(config.mcts.num_iterations, 321);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_from_bad_path_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("playout-config-does-not-exist.toml");
    let config = load_from_path(&path);
    assert_eq!(config.arena.game, "tictactoe");
}

#[test]
fn test_load_from_malformed_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join(format!("playout-bad-{}.toml", std::process::id()));
    std::fs::write(&path, "[mcts\nnum_iterations = ").unwrap();

    let config = load_from_path(&path);
    assert_eq!(config.mcts.num_iterations, 1000);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_config_clone() {
    let config = CentralConfig::default();
    let cloned = config.clone();
    assert_eq!(config.arena.game, cloned.arena.game);
    assert_eq!(config.common.seed, cloned.common.seed);
}
