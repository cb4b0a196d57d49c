//! Monte Carlo Tree Search for move selection.
//!
//! ## Overview
//!
//! A classic single-threaded UCT search over an arena-allocated tree:
//!
//! - **Per-decision tree**: each call deep-copies the observed state into a
//!   fresh root and drops the whole tree when the move is returned.
//! - **Time-bounded**: the loop runs until a wall-clock budget expires, with
//!   the deadline checked between iterations; rollouts are bounded by the
//!   81-cell board.
//! - **Configurable**: exploration constant, win/tie/loss reward scheme, and
//!   best-move criterion live in one `MctsConfig`.
//! - **Reproducible**: one seeded RNG per engine; identical seeds produce
//!   identical searches.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use uttt_engine::core::GameState;
//! use uttt_engine::mcts::{MctsConfig, MctsEngine};
//!
//! let state = GameState::new();
//! let mut engine = MctsEngine::new(MctsConfig::default());
//!
//! let mv = engine.choose_move(&state, Duration::from_millis(50));
//! assert!(uttt_engine::rules::is_legal(&state, mv));
//! ```
//!
//! Rollouts can be biased with a different playout policy:
//!
//! ```
//! use uttt_engine::mcts::{GreedyPlayout, MctsConfig, MctsEngine};
//!
//! let engine = MctsEngine::new(MctsConfig::default()).with_playout(GreedyPlayout);
//! # let _ = engine;
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::{MctsConfig, SelectionCriterion};
pub use node::{NodeId, SearchNode};
pub use policy::{GreedyPlayout, PlayoutPolicy, RandomPlayout};
pub use search::{best_child, ucb1, MctsEngine};
pub use stats::SearchStats;
pub use tree::{SearchTree, TreeStats};
