//! Self-play games driven by a single MCTS tree per game.

use anyhow::{Context, Result};
use engine_core::{GameState, Player};
use mcts::{MctsConfig, MctsSearch};
use std::fmt;
use std::time::Instant;
use tracing::{debug, info};

/// How a self-play game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
    /// Stopped by the move cap before the game was decided
    Unfinished,
}

impl Outcome {
    pub fn from_win_value(value: i32) -> Self {
        match value {
            0 => Outcome::Unfinished,
            v => Player::from_win_value(v).map_or(Outcome::Draw, Outcome::Win),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Unfinished => write!(f, "unfinished"),
        }
    }
}

/// Options for one self-play game that are not search parameters
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    pub max_moves: u32,
    pub reuse_tree: bool,
    pub show_board: bool,
}

/// Summary of a finished self-play game
#[derive(Debug, Clone)]
pub struct GameRecord<M> {
    pub moves: Vec<M>,
    pub outcome: Outcome,
    /// Root simulations already available when each search started
    pub reused_simulations: Vec<u32>,
}

/// Play one game where both sides search with the same tree.
///
/// With `reuse_tree` the chosen move is committed so the subtree below it
/// survives; otherwise a fresh tree is built from the new position.
pub fn play_game<S: GameState>(config: &MctsConfig, opts: PlayOptions) -> Result<GameRecord<S::Move>> {
    let mut search = MctsSearch::<S>::new(config.clone());
    let mut moves = Vec::new();
    let mut reused_simulations = Vec::new();

    if opts.show_board {
        println!("{}\n", search.render_root());
    }

    while !search.is_finished() && (moves.len() as u32) < opts.max_moves {
        let to_move = search.root_state().player_to_move();
        reused_simulations.push(search.stats().root_simulations);

        let start = Instant::now();
        let mv = search
            .search()
            .with_context(|| format!("search failed at ply {}", moves.len()))?;
        let stats = search.stats();

        debug!(
            ply = moves.len(),
            player = %to_move,
            ?mv,
            nodes = stats.total_nodes,
            root_simulations = stats.root_simulations,
            max_depth = stats.max_depth,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Move selected"
        );
        for child in search.root_child_stats() {
            debug!(
                mv = ?child.mv,
                simulations = child.simulations,
                mover_wins = child.mover_wins,
                "Root child"
            );
        }

        if opts.reuse_tree {
            search.commit_move(&mv)?;
        } else {
            let next = search.root_state().apply_move(&mv);
            search = MctsSearch::from_state(next, search.config().clone());
        }
        moves.push(mv);

        if opts.show_board {
            println!("{} played {:?}\n{}\n", to_move, moves[moves.len() - 1], search.render_root());
        }
    }

    let outcome = Outcome::from_win_value(search.root_state().win_value());
    info!(plies = moves.len(), %outcome, "Game finished");

    Ok(GameRecord {
        moves,
        outcome,
        reused_simulations,
    })
}

/// Win/draw tally across a match
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchStats {
    pub games: u32,
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub draws: u32,
    pub unfinished: u32,
    pub total_plies: u64,
}

impl MatchStats {
    pub fn record(&mut self, outcome: Outcome, plies: usize) {
        self.games += 1;
        self.total_plies += plies as u64;
        match outcome {
            Outcome::Win(Player::One) => self.player1_wins += 1,
            Outcome::Win(Player::Two) => self.player2_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Unfinished => self.unfinished += 1,
        }
    }

    pub fn avg_game_length(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / self.games as f64
        }
    }
}
