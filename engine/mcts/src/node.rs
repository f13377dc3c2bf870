//! MCTS tree node representation.
//!
//! Each node owns the game state reached by taking a move from its parent and
//! keeps the win/simulation tallies used for UCB1 selection.

use engine_core::{GameState, Player};
use rand_chacha::ChaCha20Rng;

use crate::config::ScorePerspective;
use crate::error::SearchError;

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// UCB1 score: `wins / sims + c * sqrt(ln(parent_sims) / sims)`.
///
/// Unvisited nodes score positive infinity so every child is tried once
/// before any child is tried twice.
#[inline]
pub fn ucb1(wins: u32, sims: u32, parent_sims: u32, c: f64) -> f64 {
    if sims == 0 {
        return f64::INFINITY;
    }
    let n = sims as f64;
    wins as f64 / n + c * ((parent_sims as f64).ln() / n).sqrt()
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct SearchNode<S: GameState> {
    /// Game state at this node (exclusively owned)
    pub(crate) state: S,

    /// Parent node index (NONE for root). Never used for ownership.
    pub(crate) parent: NodeId,

    /// Children: (move, NodeId) pairs in shuffled order.
    /// Empty until expanded, and forever empty for terminal nodes.
    pub(crate) children: Vec<(S::Move, NodeId)>,

    /// Set once the children have been generated (or at birth for terminal nodes)
    pub(crate) expanded: bool,

    /// Wins credited to each player, indexed by `Player::index`
    pub(crate) wins: [u32; 2],

    /// Number of rollouts that passed through this node
    pub(crate) simulations: u32,

    /// Whether the state had a nonzero win value at construction
    pub(crate) terminal: bool,

    /// Player to move at this state, cached at construction
    pub(crate) player_to_move: Player,

    /// Player to move at the parent when this node was expanded (None for
    /// nodes built without a parent)
    pub(crate) moved_by: Option<Player>,
}

impl<S: GameState> SearchNode<S> {
    /// Create a node for `state`. Terminal states are born expanded.
    pub fn new(state: S, parent: NodeId) -> Self {
        let terminal = state.win_value() != 0;
        let player_to_move = state.player_to_move();
        Self {
            state,
            parent,
            children: Vec::new(),
            expanded: terminal,
            wins: [0; 2],
            simulations: 0,
            terminal,
            player_to_move,
            moved_by: None,
        }
    }

    /// Create the child reached when `mover` plays from the node at `parent`.
    pub fn child_of(state: S, parent: NodeId, mover: Player) -> Self {
        Self {
            moved_by: Some(mover),
            ..Self::new(state, parent)
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[inline]
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[(S::Move, NodeId)] {
        &self.children
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[inline]
    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    #[inline]
    pub fn simulations(&self) -> u32 {
        self.simulations
    }

    #[inline]
    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    /// Win value of the held state.
    #[inline]
    pub fn win_value(&self) -> i32 {
        self.state.win_value()
    }

    /// The player whose wins feed this node's exploitation term.
    ///
    /// With [`ScorePerspective::Mover`] that is the player who moved into the
    /// node, taken from the parent's player to move. Adapters may keep the
    /// winner as the player to move on a finished board, so the node's own
    /// player is only consulted when no parent recorded a mover.
    #[inline]
    pub fn scoring_player(&self, perspective: ScorePerspective) -> Player {
        match perspective {
            ScorePerspective::Mover => self
                .moved_by
                .unwrap_or_else(|| self.player_to_move.opponent()),
            ScorePerspective::NodeToMove => self.player_to_move,
        }
    }

    /// UCB1 score of this node given its parent's simulation count.
    ///
    /// Callers must only ask this of non-root nodes; the tree enforces that.
    #[inline]
    pub fn ucb1_score(&self, parent_sims: u32, c: f64, perspective: ScorePerspective) -> f64 {
        let wins = self.wins(self.scoring_player(perspective));
        ucb1(wins, self.simulations, parent_sims, c)
    }

    /// Win rate of the scoring player, `None` if never visited.
    pub fn win_rate(&self, perspective: ScorePerspective) -> Option<f64> {
        if self.simulations == 0 {
            return None;
        }
        Some(self.wins(self.scoring_player(perspective)) as f64 / self.simulations as f64)
    }

    /// Credit one simulation ending in `win_value` to this node only.
    ///
    /// Undecided (0) and draw-like values only bump the simulation count.
    #[inline]
    pub(crate) fn record(&mut self, win_value: i32) {
        if let Some(winner) = Player::from_win_value(win_value) {
            self.wins[winner.index()] += 1;
        }
        self.simulations += 1;
    }

    /// Play a random game from this node and report its win value.
    ///
    /// Terminal nodes return their stored value without simulating. Otherwise
    /// a copy of the state is advanced with the adapter's default policy for at
    /// most `max_depth` plies; the first nonzero win value is returned, or 0 if
    /// the depth runs out. A ply with no legal moves is skipped.
    pub fn rollout(&self, max_depth: u32, rng: &mut ChaCha20Rng) -> Result<i32, SearchError> {
        if self.terminal {
            return Ok(self.state.win_value());
        }

        let mut state = self.state.clone();
        for _ in 0..max_depth {
            let moves = state.legal_moves();
            if moves.is_empty() {
                continue;
            }

            let mv = state.default_policy_move(rng).ok_or_else(|| {
                SearchError::AdapterContractViolation(
                    "default policy returned no move while legal moves exist".to_string(),
                )
            })?;
            if !moves.contains(&mv) {
                return Err(SearchError::AdapterContractViolation(format!(
                    "default policy chose {mv:?}, which is not a legal move"
                )));
            }

            state = state.apply_move(&mv);
            let value = state.win_value();
            if value != 0 {
                return Ok(value);
            }
        }

        Ok(0)
    }
}
