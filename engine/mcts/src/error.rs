//! Errors reported by the search.

use thiserror::Error;

/// Errors that can occur while building or querying a search tree.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    /// The game adapter broke its contract: a non-terminal state without
    /// legal moves at expansion, or a rollout move that is not legal.
    #[error("Adapter contract violation: {0}")]
    AdapterContractViolation(String),

    /// A move was committed that is not a child of the current root.
    /// The tree is left unchanged.
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    /// UCB1 is only defined for nodes that have a parent.
    #[error("UCB1 requested for the root node")]
    RootHasNoParent,

    /// Expansion would push the arena past the largest addressable id.
    #[error("Search tree is full ({0} nodes)")]
    ArenaFull(usize),

    /// A best move was requested from a root without children.
    #[error("Root position is terminal, no move to choose")]
    TerminalRoot,
}
