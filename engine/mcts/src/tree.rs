//! MCTS tree structure with arena allocation.
//!
//! Nodes live in a contiguous Vec and refer to each other by NodeId. The
//! arena owns every node; a child's `parent` index is only a back-reference
//! for walking up during backpropagation. Pruning happens by moving a subtree
//! into a fresh arena and dropping the old one.

use std::collections::VecDeque;

use engine_core::GameState;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

use crate::config::ScorePerspective;
use crate::error::SearchError;
use crate::node::{NodeId, SearchNode};

/// Largest arena size. Every id stays below `NodeId::NONE`.
pub const MAX_NODES: usize = NodeId::NONE.0 as usize;

/// Whether `extra` more nodes fit in an arena that already holds `len`.
fn has_room(len: usize, extra: usize) -> bool {
    len.checked_add(extra).is_some_and(|total| total <= MAX_NODES)
}

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree<S: GameState> {
    /// Arena storing all nodes
    nodes: Vec<SearchNode<S>>,

    /// Root node index (always 0: the root is allocated first, and rebasing
    /// copies the new root first)
    root: NodeId,
}

impl<S: GameState> MctsTree<S> {
    /// Create a new tree whose root holds `root_state`.
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![SearchNode::new(root_state, NodeId::NONE)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.index()]
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.index()]
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Push a node into the arena. Callers check `has_room` first.
    fn allocate(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Generate every child of `id`, one per legal move, in shuffled order.
    ///
    /// No-op if the node is already expanded (terminal nodes are born
    /// expanded). A non-terminal state without legal moves is reported as an
    /// adapter contract violation and leaves the node unexpanded.
    pub fn expand(&mut self, id: NodeId, rng: &mut ChaCha20Rng) -> Result<(), SearchError> {
        let node = self.get(id);
        if node.expanded {
            return Ok(());
        }

        let moves = node.state.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::AdapterContractViolation(format!(
                "non-terminal state has no legal moves: {}",
                node.state.render()
            )));
        }

        let mover = node.player_to_move;
        let child_states: Vec<(S::Move, S)> = moves
            .into_iter()
            .map(|mv| {
                let next = node.state.apply_move(&mv);
                (mv, next)
            })
            .collect();

        if !has_room(self.nodes.len(), child_states.len()) {
            return Err(SearchError::ArenaFull(MAX_NODES));
        }

        let mut children = Vec::with_capacity(child_states.len());
        for (mv, state) in child_states {
            let child_id = self.allocate(SearchNode::child_of(state, id, mover));
            children.push((mv, child_id));
        }
        children.shuffle(rng);

        let node = self.get_mut(id);
        node.children = children;
        node.expanded = true;
        Ok(())
    }

    /// UCB1 score of a node relative to its parent.
    ///
    /// The root has no parent and therefore no score.
    pub fn ucb1(&self, id: NodeId, c: f64, perspective: ScorePerspective) -> Result<f64, SearchError> {
        let node = self.get(id);
        if node.parent.is_none() {
            return Err(SearchError::RootHasNoParent);
        }
        let parent_sims = self.get(node.parent).simulations;
        Ok(node.ucb1_score(parent_sims, c, perspective))
    }

    /// Select the child of `id` with the strictly greatest UCB1 score.
    ///
    /// The first child wins ties, so selection is deterministic given the
    /// (already shuffled) child order. Returns None if there are no children.
    pub fn select_child(&self, id: NodeId, c: f64, perspective: ScorePerspective) -> Option<NodeId> {
        let node = self.get(id);
        let parent_sims = node.simulations;

        let mut best: Option<(NodeId, f64)> = None;
        for &(_, child_id) in &node.children {
            let score = self.get(child_id).ucb1_score(parent_sims, c, perspective);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child_id, score)),
            }
        }
        best.map(|(child_id, _)| child_id)
    }

    /// Find the child of `id` reached by `mv`.
    pub fn child_for(&self, id: NodeId, mv: &S::Move) -> Option<NodeId> {
        self.get(id)
            .children
            .iter()
            .find(|(child_move, _)| child_move == mv)
            .map(|(_, child_id)| *child_id)
    }

    /// Backpropagate a win value from `leaf_id` up to and including the root.
    pub fn backpropagate(&mut self, leaf_id: NodeId, win_value: i32) {
        let mut current_id = leaf_id;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.record(win_value);
            current_id = node.parent;
        }
    }

    /// Re-root the tree at `new_root`, keeping only its subtree.
    ///
    /// Nodes are moved into a fresh arena, not cloned, so all statistics
    /// survive. The kept root loses its parent link. Everything outside the
    /// subtree (the old root and every sibling branch) is dropped.
    pub fn rebase(&mut self, new_root: NodeId) {
        // First pass: breadth-first order of the kept nodes and their new ids.
        let mut remap: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([new_root]);
        while let Some(old_id) = queue.pop_front() {
            remap[old_id.index()] = Some(NodeId(order.len() as u32));
            order.push(old_id);
            queue.extend(self.get(old_id).children.iter().map(|(_, child)| *child));
        }

        // Second pass: move the kept nodes into the new arena.
        let old_nodes = std::mem::take(&mut self.nodes);
        let mut slots: Vec<Option<SearchNode<S>>> = old_nodes.into_iter().map(Some).collect();
        let mut nodes = Vec::with_capacity(order.len());
        for old_id in order {
            let Some(mut node) = slots[old_id.index()].take() else {
                continue;
            };
            node.parent = if old_id == new_root {
                NodeId::NONE
            } else {
                remap[node.parent.index()].unwrap_or(NodeId::NONE)
            };
            for (_, child) in node.children.iter_mut() {
                *child = remap[child.index()].unwrap_or(NodeId::NONE);
            }
            nodes.push(node);
        }

        self.nodes = nodes;
        self.root = NodeId(0);
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            total_nodes: self.nodes.len(),
            root_simulations: self.get(self.root).simulations,
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        node.children
            .iter()
            .map(|(_, id)| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_simulations: u32,
    pub max_depth: u32,
}
