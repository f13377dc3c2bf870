//! Monte Carlo Tree Search (MCTS) with UCB1 selection and random rollouts.
//!
//! This crate provides a game-agnostic MCTS implementation that works with any
//! game implementing the `engine-core` [`GameState`](engine_core::GameState) trait.
//!
//! # Overview
//!
//! MCTS builds a search tree by running iterations. Each iteration consists of
//! four phases:
//!
//! 1. **Selection**: Descend from the root through expanded nodes, always
//!    taking the child with the highest UCB1 score
//! 2. **Expansion**: Generate every child of the node reached (once per node)
//! 3. **Rollout**: Play random moves from that node until the game is decided
//!    or the rollout depth runs out
//! 4. **Backpropagation**: Credit the result to every node on the path back
//!    to the root
//!
//! # Usage
//!
//! ```rust
//! use games_tictactoe::State;
//! use mcts::{MctsConfig, MctsSearch};
//!
//! let config = MctsConfig::default().with_iterations(200).with_rollout_depth(9);
//! let mut search: MctsSearch<State> = MctsSearch::new(config);
//!
//! let mv = search.search().unwrap();
//! // Keep the explored subtree for the next move
//! search.commit_move(&mv).unwrap();
//! assert!(search.stats().root_simulations > 0);
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `num_iterations`: Iterations per search (default: 1000)
//! - `rollout_depth`: Maximum plies per rollout (default: 100)
//! - `exploration_constant`: C in the UCB1 formula (default: 2.0)
//! - `early_exit_on_terminal`: Stop once a step resolves a terminal node (default: off)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                    MctsSearch                    │
//! ├──────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌─────────────┐  ┌──────────┐  │
//! │  │  MctsTree   │  │  GameState  │  │ ChaCha20 │  │
//! │  │  (arena)    │  │  (adapter)  │  │   RNG    │  │
//! │  └─────────────┘  └─────────────┘  └──────────┘  │
//! │   select → expand → rollout → backpropagate      │
//! │   commit_move: rebase arena on the played child  │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod node;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::{FinalSelection, MctsConfig, ScorePerspective};
pub use error::SearchError;
pub use node::{ucb1, NodeId, SearchNode};
pub use search::{ChildStats, MctsSearch};
pub use tree::{MctsTree, TreeStats, MAX_NODES};
