//! MCTS configuration parameters.

/// Whose win counter a node's UCB1 exploitation term reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorePerspective {
    /// Wins of the player who made the move into the node, i.e. the player
    /// choosing among the node and its siblings at the parent.
    #[default]
    Mover,

    /// Wins of the player to move *at* the node itself.
    NodeToMove,
}

/// How the move is read off the root once the iteration budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinalSelection {
    /// Root child with the highest UCB1 score.
    #[default]
    Ucb1,

    /// Root child with the most simulations.
    MostVisited,

    /// Root child with the highest win rate for the mover (unvisited children rank last).
    BestWinRate,
}

impl std::str::FromStr for ScorePerspective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mover" => Ok(Self::Mover),
            "node_to_move" | "node-to-move" => Ok(Self::NodeToMove),
            other => Err(format!(
                "unknown score perspective '{other}' (expected mover or node_to_move)"
            )),
        }
    }
}

impl std::str::FromStr for FinalSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ucb1" => Ok(Self::Ucb1),
            "most_visited" | "most-visited" => Ok(Self::MostVisited),
            "best_win_rate" | "best-win-rate" => Ok(Self::BestWinRate),
            other => Err(format!(
                "unknown final selection '{other}' (expected ucb1, most_visited or best_win_rate)"
            )),
        }
    }
}

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Number of select/expand/rollout/backpropagate iterations per search.
    pub num_iterations: u32,

    /// Maximum plies played by a single rollout before it reports "undecided".
    pub rollout_depth: u32,

    /// Exploration constant C in `w/n + C * sqrt(ln N / n)`.
    /// Higher values encourage exploration, lower values favor exploitation.
    pub exploration_constant: f64,

    /// Stop a search as soon as a step reaches an already-resolved terminal node.
    /// Purely an efficiency switch; off by default so the full budget is spent.
    pub early_exit_on_terminal: bool,

    /// Which counter feeds the UCB1 exploitation term.
    pub perspective: ScorePerspective,

    /// How `search` picks the move to return.
    pub final_selection: FinalSelection,

    /// Seed for the search RNG (child shuffling and rollout policy).
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_iterations: 1000,
            rollout_depth: 100,
            exploration_constant: 2.0,
            early_exit_on_terminal: false,
            perspective: ScorePerspective::Mover,
            final_selection: FinalSelection::Ucb1,
            seed: 42,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            num_iterations: 50,
            rollout_depth: 20,
            ..Self::default()
        }
    }

    /// Builder pattern: set number of iterations.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.num_iterations = n;
        self
    }

    /// Builder pattern: set rollout depth.
    pub fn with_rollout_depth(mut self, depth: u32) -> Self {
        self.rollout_depth = depth;
        self
    }

    /// Builder pattern: set the UCB1 exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Builder pattern: enable or disable the terminal early exit.
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit_on_terminal = enabled;
        self
    }

    /// Builder pattern: set the UCB1 scoring perspective.
    pub fn with_perspective(mut self, perspective: ScorePerspective) -> Self {
        self.perspective = perspective;
        self
    }

    /// Builder pattern: set the final move selection rule.
    pub fn with_final_selection(mut self, selection: FinalSelection) -> Self {
        self.final_selection = selection;
        self
    }

    /// Builder pattern: set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
