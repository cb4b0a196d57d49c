//! Arena-based search tree.
//!
//! Nodes are stored in a flat `Vec` and referenced by `NodeId` indices,
//! avoiding shared-ownership pointers and reference cycles. One tree is
//! built per decision and released wholesale when the move is returned.

use serde::{Deserialize, Serialize};

use super::node::{NodeId, SearchNode};
use crate::core::state::GameState;

/// Arena holding every node reachable from the current search root.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,

    /// The root node ID (always 0 after initialization).
    root: NodeId,
}

impl SearchTree {
    /// Create a tree rooted at a state snapshot.
    #[must_use]
    pub fn new(root_state: GameState) -> Self {
        Self::with_capacity(root_state, 1024)
    }

    /// Create a tree with a custom initial arena capacity.
    #[must_use]
    pub fn with_capacity(root_state: GameState, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity);
        nodes.push(SearchNode::root(root_state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node and restart from a new root snapshot.
    pub fn reset(&mut self, root_state: GameState) {
        self.nodes.clear();
        self.nodes.push(SearchNode::root(root_state));
        self.root = NodeId::new(0);
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode {
        self.get(self.root)
    }

    /// Get the root node mutably.
    pub fn root_node_mut(&mut self) -> &mut SearchNode {
        self.get_mut(self.root)
    }

    /// Summarize the tree for diagnostics.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal()).count();
        let total_children: usize = self.nodes.iter().map(|n| n.children.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            total_children,
        }
    }
}

/// Statistics about the search tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,

    /// Total child links.
    pub total_children: usize,
}

impl TreeStats {
    /// Average children per node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            self.total_children as f64 / self.node_count as f64
        }
    }
}
