//! MCTS search implementation.
//!
//! Implements the core MCTS loop on top of [`MctsTree`]:
//! 1. Selection: descend through expanded nodes using UCB1
//! 2. Expansion: generate all children of the frontier node
//! 3. Rollout: play a random game from the frontier node
//! 4. Backpropagation: credit the result to every node up to the root
//!
//! The search keeps its tree between moves. [`MctsSearch::commit_move`] rebases
//! the tree on the child that was actually played, so statistics gathered for
//! that line carry over to the next search.

use engine_core::GameState;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::config::{FinalSelection, MctsConfig};
use crate::error::SearchError;
use crate::node::NodeId;
use crate::tree::{MctsTree, TreeStats};

/// Statistics of one root child, for inspection and logging.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildStats<M> {
    /// Move leading to the child
    pub mv: M,
    /// Rollouts that passed through the child
    pub simulations: u32,
    /// Wins credited to the player who made `mv`
    pub mover_wins: u32,
}

/// MCTS search state: the tree plus the configuration and RNG driving it.
#[derive(Debug)]
pub struct MctsSearch<S: GameState> {
    tree: MctsTree<S>,
    config: MctsConfig,
    rng: ChaCha20Rng,
}

impl<S: GameState> MctsSearch<S> {
    /// Create a search rooted at the adapter's starting position.
    pub fn new(config: MctsConfig) -> Self {
        Self::from_state(S::initial(), config)
    }

    /// Create a search rooted at an arbitrary position.
    pub fn from_state(state: S, config: MctsConfig) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(config.seed);
        Self {
            tree: MctsTree::new(state),
            config,
            rng,
        }
    }

    /// Run a single iteration (select -> expand -> rollout -> backpropagate).
    ///
    /// Returns `true` when the walk ended on an already-expanded terminal
    /// node, whose stored result was backpropagated without a rollout.
    pub fn step(&mut self) -> Result<bool, SearchError> {
        let c = self.config.exploration_constant;
        let perspective = self.config.perspective;
        let mut current = self.tree.root();
        let mut depth = 0u32;

        while self.tree.get(current).is_expanded() {
            let node = self.tree.get(current);
            if node.is_terminal() {
                let value = node.win_value();
                self.tree.backpropagate(current, value);
                trace!(node = current.0, depth, value, "MCTS step reached terminal node");
                return Ok(true);
            }

            // Expanded and non-terminal always has children
            current = self
                .tree
                .select_child(current, c, perspective)
                .ok_or_else(|| {
                    SearchError::AdapterContractViolation(
                        "expanded non-terminal node has no children".to_string(),
                    )
                })?;
            depth += 1;
        }

        self.tree.expand(current, &mut self.rng)?;
        let value = self
            .tree
            .get(current)
            .rollout(self.config.rollout_depth, &mut self.rng)?;
        self.tree.backpropagate(current, value);

        trace!(node = current.0, depth, value, "MCTS step complete");
        Ok(false)
    }

    /// Run the configured number of iterations and return the chosen move.
    ///
    /// Stops early on a terminal step only if `early_exit_on_terminal` is set.
    pub fn search(&mut self) -> Result<S::Move, SearchError> {
        let mut iterations = 0u32;
        for _ in 0..self.config.num_iterations {
            iterations += 1;
            if self.step()? && self.config.early_exit_on_terminal {
                break;
            }
        }

        let mv = self.best_move()?;
        debug!(
            iterations,
            root_simulations = self.tree.get(self.tree.root()).simulations(),
            nodes = self.tree.len(),
            chosen = ?mv,
            "MCTS search complete"
        );
        Ok(mv)
    }

    /// Same as [`search`](Self::search) with explicit budgets, overriding the config.
    pub fn search_with(
        &mut self,
        num_iterations: u32,
        rollout_depth: u32,
    ) -> Result<S::Move, SearchError> {
        self.config.num_iterations = num_iterations;
        self.config.rollout_depth = rollout_depth;
        self.search()
    }

    /// The move the root would currently choose, per `final_selection`.
    pub fn best_move(&self) -> Result<S::Move, SearchError> {
        let root = self.tree.get(self.tree.root());
        let c = self.config.exploration_constant;
        let perspective = self.config.perspective;
        let parent_sims = root.simulations();

        let score = |id: NodeId| -> f64 {
            let child = self.tree.get(id);
            match self.config.final_selection {
                FinalSelection::Ucb1 => child.ucb1_score(parent_sims, c, perspective),
                FinalSelection::MostVisited => child.simulations() as f64,
                FinalSelection::BestWinRate => {
                    child.win_rate(perspective).unwrap_or(f64::NEG_INFINITY)
                }
            }
        };

        // Strictly greater wins, so the first child keeps ties
        let mut best: Option<(&S::Move, f64)> = None;
        for (mv, child_id) in root.children() {
            let value = score(*child_id);
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((mv, value)),
            }
        }

        best.map(|(mv, _)| mv.clone())
            .ok_or(SearchError::TerminalRoot)
    }

    /// Play `mv` for real: keep the matching subtree, drop everything else.
    ///
    /// The root is expanded first if needed. If `mv` is not a child of the
    /// root, `InvalidMove` is returned and the tree is left as it was.
    pub fn commit_move(&mut self, mv: &S::Move) -> Result<(), SearchError> {
        let root = self.tree.root();
        self.tree.expand(root, &mut self.rng)?;

        let child = self
            .tree
            .child_for(root, mv)
            .ok_or_else(|| SearchError::InvalidMove(format!("{mv:?} is not playable here")))?;

        let before = self.tree.len();
        self.tree.rebase(child);

        debug!(
            mv = ?mv,
            kept_nodes = self.tree.len(),
            dropped_nodes = before - self.tree.len(),
            root_simulations = self.tree.get(self.tree.root()).simulations(),
            "Root advanced"
        );
        Ok(())
    }

    /// Statistics of every root child, in child order.
    pub fn root_child_stats(&self) -> Vec<ChildStats<S::Move>> {
        let root = self.tree.get(self.tree.root());
        root.children()
            .iter()
            .map(|(mv, id)| {
                let child = self.tree.get(*id);
                ChildStats {
                    mv: mv.clone(),
                    simulations: child.simulations(),
                    mover_wins: child.wins(root.player_to_move()),
                }
            })
            .collect()
    }

    /// State at the current root.
    pub fn root_state(&self) -> &S {
        self.tree.get(self.tree.root()).state()
    }

    /// Render the current root position with the adapter's renderer.
    pub fn render_root(&self) -> String {
        self.root_state().render()
    }

    /// Whether the current root position is finished.
    pub fn is_finished(&self) -> bool {
        self.tree.get(self.tree.root()).is_terminal()
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<S> {
        &self.tree
    }

    /// Get statistics about the tree.
    pub fn stats(&self) -> TreeStats {
        self.tree.stats()
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}
