//! Uniform-random bot, the weakest baseline.

use std::time::Duration;

use super::Bot;
use crate::core::state::{GameState, Move};
use crate::core::SearchRng;
use crate::rules::engine;

/// Picks a uniformly random legal move every turn.
pub struct RandomBot {
    rng: SearchRng,
}

impl RandomBot {
    /// Create a bot with a seeded generator.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SearchRng::new(seed),
        }
    }
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        "Random bot"
    }

    fn choose_move(&mut self, state: &GameState, _budget: Duration) -> Move {
        let moves = engine::available_moves(state);
        assert!(
            !moves.is_empty(),
            "active state must have at least one legal move"
        );
        moves[self.rng.gen_range_usize(0..moves.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    #[test]
    fn test_random_bot_moves_are_legal() {
        let mut bot = RandomBot::new(3);
        let mut state = GameState::new();

        for _ in 0..20 {
            if !state.status().is_active() {
                break;
            }
            let mv = bot.choose_move(&state, Duration::ZERO);
            assert!(rules::is_legal(&state, mv));
            rules::apply_move(&mut state, mv).unwrap();
        }
    }

    #[test]
    fn test_random_bot_deterministic() {
        let state = GameState::new();
        let mut b1 = RandomBot::new(11);
        let mut b2 = RandomBot::new(11);

        assert_eq!(
            b1.choose_move(&state, Duration::ZERO),
            b2.choose_move(&state, Duration::ZERO)
        );
    }
}
