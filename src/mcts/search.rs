//! The time-bounded Selection -> Expansion -> Simulation -> Backpropagation
//! loop.
//!
//! Each decision deep-copies the observed state into a fresh root, runs
//! iterations until the wall-clock budget expires (the deadline is checked
//! only between iterations; a rollout is bounded by the 81-cell board), then
//! extracts the move on the best root child. If the budget is too small for
//! even one expansion, a uniformly random legal move is returned instead.

use std::time::{Duration, Instant};

use crate::core::state::{GameState, GameStatus, Move, BOARD_SIZE};
use crate::core::SearchRng;
use crate::rules::{engine, Simulator};

use super::config::{MctsConfig, SelectionCriterion};
use super::node::{NodeId, SearchNode};
use super::policy::{PlayoutPolicy, RandomPlayout};
use super::stats::SearchStats;
use super::tree::SearchTree;

/// UCB1 value of a child from its parent's perspective.
///
/// An unvisited child is treated as +infinity so every fresh expansion is
/// explored before any statistics are trusted.
#[must_use]
pub fn ucb1(parent_visits: u32, visits: u32, score_sum: f64, exploration: f64) -> f64 {
    if visits == 0 {
        return f64::INFINITY;
    }
    let mean = score_sum / f64::from(visits);
    mean + exploration * (f64::from(parent_visits.max(1)).ln() / f64::from(visits)).sqrt()
}

/// Pick the best child id by the configured criterion.
///
/// Pure over the candidate list; ties go to the first candidate in
/// enumeration order. Returns `None` only for an empty list, which callers
/// guard with the random-move fallback.
#[must_use]
pub fn best_child(
    tree: &SearchTree,
    children: &[NodeId],
    criterion: SelectionCriterion,
) -> Option<NodeId> {
    let key = |id: NodeId| -> f64 {
        let node = tree.get(id);
        match criterion {
            SelectionCriterion::VisitCount => f64::from(node.visits),
            SelectionCriterion::MeanScore => node.mean_score(),
        }
    };

    let mut best: Option<(NodeId, f64)> = None;
    for &id in children {
        let value = key(id);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((id, value)),
        }
    }
    best.map(|(id, _)| id)
}

/// MCTS move-selection engine.
///
/// Owns the search tree, configuration, RNG, and playout policy. The caller's
/// state is never mutated: every decision works on a private deep copy.
pub struct MctsEngine {
    config: MctsConfig,
    tree: SearchTree,
    rng: SearchRng,
    playout: Box<dyn PlayoutPolicy>,
    stats: SearchStats,
}

impl MctsEngine {
    /// Create an engine with the given configuration and the default
    /// uniform-random playout policy.
    #[must_use]
    pub fn new(config: MctsConfig) -> Self {
        let rng = SearchRng::new(config.seed);
        Self {
            config,
            tree: SearchTree::with_capacity(GameState::new(), 4096),
            rng,
            playout: Box::new(RandomPlayout),
            stats: SearchStats::default(),
        }
    }

    /// Replace the playout policy.
    #[must_use]
    pub fn with_playout<P: PlayoutPolicy + 'static>(mut self, playout: P) -> Self {
        self.playout = Box::new(playout);
        self
    }

    /// Pick a move for the current mover within a wall-clock budget.
    ///
    /// The root state must be active; requesting a decision on a finished
    /// game is a caller logic error.
    pub fn choose_move(&mut self, state: &GameState, budget: Duration) -> Move {
        let start = self.begin_search(state);

        while start.elapsed() < budget {
            self.iteration();
            self.stats.iterations += 1;
        }

        self.finish_search(state, start)
    }

    /// Pick a move after a fixed number of iterations.
    ///
    /// Deterministic for a given seed, which makes it the right entry point
    /// for tests and benchmarks.
    pub fn run_iterations(&mut self, state: &GameState, iterations: u32) -> Move {
        let start = self.begin_search(state);

        for _ in 0..iterations {
            self.iteration();
            self.stats.iterations += 1;
        }

        self.finish_search(state, start)
    }

    fn begin_search(&mut self, state: &GameState) -> Instant {
        assert!(
            state.status().is_active(),
            "move requested on a finished game"
        );
        self.stats.reset();
        self.tree.reset(state.clone());
        Instant::now()
    }

    fn finish_search(&mut self, state: &GameState, start: Instant) -> Move {
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let root_children: Vec<NodeId> = self.tree.root_node().children.to_vec();
        match best_child(&self.tree, &root_children, self.config.criterion) {
            Some(id) => self
                .tree
                .get(id)
                .mv
                .unwrap_or_else(|| self.random_move(state)),
            None => self.random_move(state),
        }
    }

    /// One full Selection -> Expansion -> Simulation -> Backpropagation pass.
    fn iteration(&mut self) {
        // Selection: descend by UCB1 until a leaf.
        let mut current = self.tree.root();
        while !self.tree.get(current).is_leaf() {
            current = self.select_child(current);
        }

        // Expansion: create all children of an active leaf, then simulate
        // from one of them chosen uniformly. Terminal leaves are simulated
        // in place.
        if !self.tree.get(current).is_terminal() {
            self.expand(current);
            let child_count = self.tree.get(current).children.len();
            if child_count > 0 {
                let pick = self.rng.gen_range_usize(0..child_count);
                current = self.tree.get(current).children[pick];
            }
        }

        // Simulation.
        let outcome = self.simulate(current);
        self.stats.simulations += 1;

        // Backpropagation.
        self.backpropagate(current, outcome);
    }

    /// Child maximizing UCB1; ties go to the first in enumeration order.
    fn select_child(&self, parent: NodeId) -> NodeId {
        let node = self.tree.get(parent);
        let parent_visits = node.visits;
        let c = self.config.exploration_constant;

        let mut best = node.children[0];
        let mut best_value = f64::NEG_INFINITY;
        for &child_id in &node.children {
            let child = self.tree.get(child_id);
            let value = ucb1(parent_visits, child.visits, child.score, c);
            if value > best_value {
                best = child_id;
                best_value = value;
            }
        }
        best
    }

    /// Create one child per legal move of the node's state.
    fn expand(&mut self, id: NodeId) {
        let moves = engine::available_moves(&self.tree.get(id).state);
        let depth = self.tree.get(id).depth + 1;

        for mv in moves {
            let parent = self.tree.get(id);
            let mover = parent.state.mover();
            let mut state = parent.state.clone();
            if engine::apply_move(&mut state, mv).is_err() {
                debug_assert!(false, "available_moves produced an illegal move");
                continue;
            }

            let child_id = self
                .tree
                .alloc(SearchNode::child(id, depth, mv, mover, state));
            self.tree.get_mut(id).children.push(child_id);
        }

        self.stats.nodes_expanded += 1;
        if depth > self.stats.max_depth {
            self.stats.max_depth = depth;
        }
    }

    /// Roll out from the node's state to a terminal outcome.
    ///
    /// The policy drives both sides. The ply cap matches the board size; an
    /// unresolved rollout (which the bounded board rules out) counts as a
    /// tie rather than an error.
    fn simulate(&mut self, id: NodeId) -> GameStatus {
        let mut sim = Simulator::new(self.tree.get(id).state.clone());
        let mut rollout_rng = self.rng.fork();

        for _ in 0..BOARD_SIZE * BOARD_SIZE {
            if !sim.status().is_active() {
                break;
            }
            match self.playout.choose(sim.state(), &mut rollout_rng) {
                Some(mv) => {
                    if !sim.update(mv) {
                        break;
                    }
                }
                None => break,
            }
        }

        match sim.status() {
            GameStatus::Active => GameStatus::Tied,
            status => status,
        }
    }

    /// Walk from the simulated node to the root, crediting each edge's mover.
    ///
    /// Every ancestor's visit count increments unconditionally; the score
    /// increments by the win reward when the player who made the move into
    /// that node won the rollout, the tie reward on a tie, and the loss
    /// reward otherwise. The root carries no producing move and collects
    /// visits only.
    fn backpropagate(&mut self, from: NodeId, outcome: GameStatus) {
        let mut current = from;
        loop {
            let node = self.tree.get_mut(current);
            node.visits += 1;
            if let Some(mover) = node.mover {
                node.score += match outcome {
                    GameStatus::Won(winner) if winner == mover => self.config.win_reward,
                    GameStatus::Won(_) => self.config.loss_reward,
                    GameStatus::Tied | GameStatus::Active => self.config.tie_reward,
                };
            }

            let parent = node.parent;
            if parent.is_none() {
                break;
            }
            current = parent;
        }
    }

    /// Uniform random legal move; the under-budget fallback.
    fn random_move(&mut self, state: &GameState) -> Move {
        let moves = engine::available_moves(state);
        assert!(
            !moves.is_empty(),
            "active state must have at least one legal move"
        );
        moves[self.rng.gen_range_usize(0..moves.len())]
    }

    /// Per-move visit counts at the root, for diagnostics.
    #[must_use]
    pub fn move_visits(&self) -> Vec<(Move, u32)> {
        self.tree
            .root_node()
            .children
            .iter()
            .filter_map(|&id| {
                let node = self.tree.get(id);
                node.mv.map(|mv| (mv, node.visits))
            })
            .collect()
    }

    /// Statistics for the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The search tree of the most recent search.
    #[must_use]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}
