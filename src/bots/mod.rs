//! Move-choosing bots built on the rules engine.
//!
//! Bots are alternative implementations of the same capability: given an
//! active state and a time budget, return one legal move. The search engine
//! knows nothing about them; the greedy shortcuts live entirely out here.

pub mod greedy;
pub mod random;

use std::time::Duration;

use crate::core::state::{GameState, Move};
use crate::mcts::{MctsConfig, MctsEngine, PlayoutPolicy};

pub use greedy::GreedyBot;
pub use random::RandomBot;

/// A move chooser. The budget is advisory; heuristic bots ignore it.
pub trait Bot {
    /// Display name.
    fn name(&self) -> &str;

    /// Choose one legal move for the current mover of an active state.
    fn choose_move(&mut self, state: &GameState, budget: Duration) -> Move;
}

/// MCTS-backed bot.
pub struct SearchBot {
    name: String,
    engine: MctsEngine,
}

impl SearchBot {
    /// Create a search bot with the given configuration.
    #[must_use]
    pub fn new(name: impl Into<String>, config: MctsConfig) -> Self {
        Self {
            name: name.into(),
            engine: MctsEngine::new(config),
        }
    }

    /// Replace the rollout policy.
    #[must_use]
    pub fn with_playout<P: PlayoutPolicy + 'static>(mut self, playout: P) -> Self {
        self.engine = self.engine.with_playout(playout);
        self
    }

    /// The underlying engine, for post-move diagnostics.
    #[must_use]
    pub fn engine(&self) -> &MctsEngine {
        &self.engine
    }
}

impl Bot for SearchBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, state: &GameState, budget: Duration) -> Move {
        self.engine.choose_move(state, budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    #[test]
    fn test_search_bot_returns_legal_move() {
        let state = GameState::new();
        let mut bot = SearchBot::new("searcher", MctsConfig::default().with_seed(7));

        let mv = bot.choose_move(&state, Duration::from_millis(20));
        assert!(rules::is_legal(&state, mv));
        assert_eq!(bot.name(), "searcher");
        assert!(bot.engine().stats().iterations > 0);
    }
}
