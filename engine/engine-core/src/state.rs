//! Game state contract consumed by the search engine
//!
//! A game plugs into the search by implementing [`GameState`] for its
//! position type. The search never inspects moves or boards; it only asks the
//! state for legal moves, applies them, and reads the win value.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

use crate::player::Player;

/// Snapshot of a two-player game after some sequence of moves.
///
/// Implementations must behave like values: [`apply_move`](GameState::apply_move)
/// returns a new state and leaves the receiver untouched, because the search
/// holds the parent and every child state at the same time.
///
/// # Example
///
/// ```rust
/// use engine_core::{GameState, Player};
///
/// /// Take one or two stones; whoever takes the last stone wins.
/// #[derive(Debug, Clone)]
/// struct Stones {
///     left: u8,
///     to_move: Player,
///     winner: Option<Player>,
/// }
///
/// impl GameState for Stones {
///     type Move = u8;
///
///     fn initial() -> Self {
///         Stones { left: 5, to_move: Player::One, winner: None }
///     }
///
///     fn legal_moves(&self) -> Vec<u8> {
///         if self.winner.is_some() {
///             return Vec::new();
///         }
///         (1..=2).filter(|&n| n <= self.left).collect()
///     }
///
///     fn win_value(&self) -> i32 {
///         self.winner.map_or(0, Player::win_value)
///     }
///
///     fn apply_move(&self, mv: &u8) -> Self {
///         let left = self.left - mv;
///         Stones {
///             left,
///             to_move: self.to_move.opponent(),
///             winner: (left == 0).then_some(self.to_move),
///         }
///     }
///
///     fn player_to_move(&self) -> Player {
///         self.to_move
///     }
/// }
///
/// let state = Stones::initial().apply_move(&2);
/// assert_eq!(state.left, 3);
/// assert_eq!(state.player_to_move(), Player::Two);
/// ```
pub trait GameState: Clone + std::fmt::Debug {
    /// Opaque transition out of a state. Only ever produced by the state itself.
    type Move: Clone + PartialEq + std::fmt::Debug;

    /// The adapter's starting position, used to provision a fresh search root.
    fn initial() -> Self;

    /// All moves playable from this state.
    ///
    /// Order is irrelevant to the search (children are shuffled after
    /// expansion). Must not be empty for a non-terminal state that the search
    /// expands; an empty list is tolerated inside rollouts as a stalled ply.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Outcome of this position: `0` while undecided, `+1` / `-1` when
    /// player one / player two won, any other nonzero value for a finished
    /// game without a winner. Must be side-effect free.
    fn win_value(&self) -> i32;

    /// Produce the state reached by playing `mv`. Must not mutate `self`.
    fn apply_move(&self, mv: &Self::Move) -> Self;

    /// Which player acts next, consistent with the sign of `win_value`.
    fn player_to_move(&self) -> Player;

    /// Pick one legal move for a rollout.
    ///
    /// The default policy is uniform over [`legal_moves`](GameState::legal_moves).
    /// Returns `None` only when there is nothing to play.
    fn default_policy_move(&self, rng: &mut ChaCha20Rng) -> Option<Self::Move> {
        self.legal_moves().choose(rng).cloned()
    }

    /// Human-readable rendering for debugging and the CLI.
    fn render(&self) -> String {
        format!("{self:?}")
    }
}
