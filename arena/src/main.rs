//! Arena - self-play driver for the UCB1 MCTS engine
//!
//! Plays complete games of TicTacToe or Connect 4 where both sides are
//! driven by the same search tree, committing each chosen move so the
//! explored subtree is reused on the next turn.

use anyhow::Result;
use clap::Parser;
use engine_core::GameState;
use tracing::info;

mod config;
mod selfplay;

use crate::config::Config;
use crate::selfplay::{play_game, MatchStats, PlayOptions};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn run_match<S: GameState>(config: &Config) -> Result<MatchStats> {
    let opts = PlayOptions {
        max_moves: config.max_moves,
        reuse_tree: config.reuse_tree,
        show_board: config.show_board,
    };
    let mut stats = MatchStats::default();

    for game_index in 0..config.games {
        let mcts_config = config.mcts_config(game_index)?;
        let record = play_game::<S>(&mcts_config, opts)?;
        info!(
            game = game_index + 1,
            plies = record.moves.len(),
            outcome = %record.outcome,
            moves = ?record.moves,
            "Game complete"
        );
        stats.record(record.outcome, record.moves.len());
    }

    Ok(stats)
}

fn main() -> Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Validate configuration
    config.validate()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    info!(
        game = %config.game,
        games = config.games,
        iterations = config.iterations,
        rollout_depth = config.rollout_depth,
        exploration = config.exploration,
        reuse_tree = config.reuse_tree,
        "Starting arena"
    );

    let stats = match config.game.as_str() {
        "connect4" => run_match::<games_connect4::State>(&config)?,
        _ => run_match::<games_tictactoe::State>(&config)?,
    };

    info!(
        games = stats.games,
        player1_wins = stats.player1_wins,
        player2_wins = stats.player2_wins,
        draws = stats.draws,
        unfinished = stats.unfinished,
        avg_game_length = %format!("{:.1}", stats.avg_game_length()),
        "Match finished"
    );
    println!(
        "{} games: player 1 won {}, player 2 won {}, {} draws, {} unfinished",
        stats.games, stats.player1_wins, stats.player2_wins, stats.draws, stats.unfinished
    );

    Ok(())
}
