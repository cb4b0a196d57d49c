//! Search tree nodes.
//!
//! Nodes live in an arena (`SearchTree`) and reference each other by index,
//! so the parent back-reference carries no ownership and the whole tree is
//! dropped in one deallocation when the decision returns.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::state::{GameState, Move};
use crate::core::PlayerId;

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the search tree.
///
/// Owns an independent `GameState` snapshot reachable from the root by
/// exactly the recorded move sequence. Statistics are mutated only by
/// backpropagation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchNode {
    /// Parent node (NONE for the root).
    pub parent: NodeId,

    /// The move that produced this node from its parent (None for the root).
    pub mv: Option<Move>,

    /// The player who played `mv`. Rewards are credited against this.
    pub mover: Option<PlayerId>,

    /// State snapshot after `mv`.
    pub state: GameState,

    /// Child node ids. A micro-board holds at most 9 cells, so a single
    /// expansion rarely exceeds the inline capacity.
    pub children: SmallVec<[NodeId; 9]>,

    /// Depth in the tree (root = 0).
    pub depth: u16,

    /// Times this node was on a backpropagation path.
    pub visits: u32,

    /// Accumulated reward for the edge mover.
    pub score: f64,
}

impl SearchNode {
    /// Create a root node around a state snapshot.
    #[must_use]
    pub fn root(state: GameState) -> Self {
        Self {
            parent: NodeId::NONE,
            mv: None,
            mover: None,
            state,
            children: SmallVec::new(),
            depth: 0,
            visits: 0,
            score: 0.0,
        }
    }

    /// Create a child node for the state reached by `mv`.
    #[must_use]
    pub fn child(parent: NodeId, depth: u16, mv: Move, mover: PlayerId, state: GameState) -> Self {
        Self {
            parent,
            mv: Some(mv),
            mover: Some(mover),
            state,
            children: SmallVec::new(),
            depth,
            visits: 0,
            score: 0.0,
        }
    }

    /// Mean accumulated score. Zero before the first visit.
    #[must_use]
    pub fn mean_score(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.score / f64::from(self.visits)
        }
    }

    /// Check if the node has no children yet.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if the node's state is terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.state.status().is_active()
    }
}
