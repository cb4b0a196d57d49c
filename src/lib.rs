//! # uttt-engine
//!
//! Rules engine and Monte Carlo Tree Search move selection for Ultimate
//! Tic-Tac-Toe: a 9x9 cell grid organized into nine 3x3 micro-boards whose
//! outcomes populate a 3x3 macro-board that decides the overall winner.
//!
//! ## Design Principles
//!
//! 1. **One rules engine**: legality, the cascading forced-activation rule,
//!    and win/tie detection at both board granularities live in a single set
//!    of pure functions in `rules`.
//!
//! 2. **Per-decision search**: `mcts::MctsEngine` deep-copies the observed
//!    state, builds an arena-allocated tree under a wall-clock budget, and
//!    releases the whole tree when the move is returned. Nothing is shared
//!    across turns and the caller's state is never mutated.
//!
//! 3. **Reproducibility**: randomness comes from one seeded, forkable
//!    generator per engine, never from ambient sources.
//!
//! ## Modules
//!
//! - `core`: players, board state, deterministic RNG
//! - `rules`: legality, state transition, two-level win detection, simulator
//! - `mcts`: configuration, tree arena, playout policies, the search loop
//! - `bots`: `Bot` trait plus search-backed, greedy, and random bots
//! - `wire`: string-sentinel exchange with external drivers

pub mod bots;
pub mod core;
pub mod mcts;
pub mod rules;
pub mod wire;

// Re-export commonly used types
pub use crate::core::{
    Cell, GameState, GameStatus, MacroCell, Move, PlayerId, SearchRng, BOARD_SIZE, MICRO_SIZE,
};

pub use crate::rules::{MoveError, Simulator};

pub use crate::mcts::{
    GreedyPlayout, MctsConfig, MctsEngine, NodeId, PlayoutPolicy, RandomPlayout, SearchNode,
    SearchStats, SearchTree, SelectionCriterion, TreeStats,
};

pub use crate::bots::{Bot, GreedyBot, RandomBot, SearchBot};

pub use crate::wire::WireError;
