//! Playout policies.
//!
//! A `PlayoutPolicy` picks one legal move per ply during a rollout, for
//! whichever side is to move; both sides use the same policy and neither
//! looks ahead. Swapping the policy never changes the engine's control flow.

use crate::core::state::GameState;
use crate::core::SearchRng;
use crate::rules::engine;

/// Per-ply move choice during rollouts.
pub trait PlayoutPolicy: Send + Sync {
    /// Pick a legal move for the current mover, or `None` if no legal move
    /// exists (terminal state).
    fn choose(&self, state: &GameState, rng: &mut SearchRng) -> Option<crate::core::state::Move>;
}

/// Uniform-random selection among legal moves. The default.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlayout;

impl PlayoutPolicy for RandomPlayout {
    fn choose(&self, state: &GameState, rng: &mut SearchRng) -> Option<crate::core::state::Move> {
        let moves = engine::available_moves(state);
        rng.choose(&moves).copied()
    }
}

/// Heuristic rollouts: take an immediate micro-board win, else block the
/// opponent's, else play randomly.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPlayout;

impl PlayoutPolicy for GreedyPlayout {
    fn choose(&self, state: &GameState, rng: &mut SearchRng) -> Option<crate::core::state::Move> {
        let moves = engine::available_moves(state);
        if moves.is_empty() {
            return None;
        }

        let mover = state.mover();
        if let Some(&mv) = moves.iter().find(|&&mv| engine::is_winning_move(state, mv, mover)) {
            return Some(mv);
        }
        let opponent = mover.opponent();
        if let Some(&mv) = moves
            .iter()
            .find(|&&mv| engine::is_winning_move(state, mv, opponent))
        {
            return Some(mv);
        }

        rng.choose(&moves).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Move;
    use crate::rules;

    #[test]
    fn test_random_playout_returns_legal_move() {
        let state = GameState::new();
        let mut rng = SearchRng::new(42);

        let mv = RandomPlayout.choose(&state, &mut rng).unwrap();
        assert!(rules::is_legal(&state, mv));
    }

    #[test]
    fn test_greedy_playout_takes_micro_win() {
        // P1 to move, forced into micro-board (0,0) where it holds
        // (1,0), (2,0), (1,1): both (1,2) and (0,2) finish a line.
        let mut state = GameState::new();
        for (x, y) in [(0, 0), (1, 0), (3, 0), (2, 0), (6, 0), (1, 1), (3, 3)] {
            rules::apply_move(&mut state, Move::new(x, y)).unwrap();
        }
        let mover = state.mover();
        assert_eq!(mover, crate::core::PlayerId::P1);

        let mut rng = SearchRng::new(1);
        let mv = GreedyPlayout.choose(&state, &mut rng).unwrap();
        assert!(engine::is_winning_move(&state, mv, mover));
    }

    #[test]
    fn test_greedy_playout_blocks() {
        // P0 to move, forced into micro-board (0,0), where P1 holds (0,0)
        // and (0,1) and threatens the x=0 column at (0,2). P0 owns nothing
        // there, so the block is the only heuristic pick.
        let mut state = GameState::new();
        for (x, y) in [(0, 3), (0, 1), (0, 4), (1, 3), (3, 0), (0, 0)] {
            rules::apply_move(&mut state, Move::new(x, y)).unwrap();
        }
        assert_eq!(state.mover(), crate::core::PlayerId::P0);
        assert_eq!(state.macro_cell(0, 0), crate::core::MacroCell::Available);

        let mut rng = SearchRng::new(1);
        let mv = GreedyPlayout.choose(&state, &mut rng).unwrap();
        assert_eq!(mv, Move::new(0, 2));
    }
}
