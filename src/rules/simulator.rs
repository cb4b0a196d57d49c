//! Stateful wrapper for advancing one game, a real move at a time or a full
//! rollout.
//!
//! The mover is derived from the ply counter (invariant: mover =
//! move_number mod 2), so a successful `update` flips it implicitly.

use crate::core::state::{GameState, GameStatus, Move};
use crate::core::PlayerId;
use crate::rules::engine;

/// Owns one `GameState` and applies moves through the rules engine.
#[derive(Clone, Debug)]
pub struct Simulator {
    state: GameState,
}

impl Simulator {
    /// Wrap a state for simulation.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// The live state, for move enumeration.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Terminal status of the wrapped state.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// The player expected to move next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.mover()
    }

    /// Apply a move if legal. Returns `false` and leaves the state untouched
    /// otherwise.
    pub fn update(&mut self, mv: Move) -> bool {
        engine::apply_move(&mut self.state, mv).is_ok()
    }

    /// Unwrap the final state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_flips_mover() {
        let mut sim = Simulator::new(GameState::new());
        assert_eq!(sim.current_player(), PlayerId::P0);

        assert!(sim.update(Move::new(4, 4)));
        assert_eq!(sim.current_player(), PlayerId::P1);
        assert_eq!(sim.status(), GameStatus::Active);
    }

    #[test]
    fn test_rejected_update_has_no_effect() {
        let mut sim = Simulator::new(GameState::new());
        assert!(sim.update(Move::new(4, 4)));

        let before = sim.state().clone();
        assert!(!sim.update(Move::new(0, 0))); // closed micro-board
        assert_eq!(sim.state(), &before);
        assert_eq!(sim.current_player(), PlayerId::P1);
    }

    #[test]
    fn test_random_rollout_terminates() {
        use crate::core::SearchRng;

        let mut sim = Simulator::new(GameState::new());
        let mut rng = SearchRng::new(7);

        // A game is bounded by 81 plies.
        for _ in 0..81 {
            if !sim.status().is_active() {
                break;
            }
            let moves = engine::available_moves(sim.state());
            assert!(!moves.is_empty(), "active state must have legal moves");
            let mv = *rng.choose(&moves).unwrap();
            assert!(sim.update(mv));
        }

        assert!(!sim.status().is_active());
    }
}
