//! Greedy heuristic bot: win now, else block, else follow a static
//! cell-preference list. No search.

use std::time::Duration;

use super::Bot;
use crate::core::state::{GameState, MacroCell, Move, MICRO_SIZE};
use crate::rules::engine;

/// Preference order within a 3x3 block: center, corners, edge middles.
const PREFERRED: [(usize, usize); 9] = [
    (1, 1),
    (0, 2),
    (2, 0),
    (0, 0),
    (2, 2),
    (0, 1),
    (2, 1),
    (1, 0),
    (1, 2),
];

/// Scans for an immediate micro-board win, then for a block of the
/// opponent's, then falls back to the static preference list applied first
/// to the macro-board and then within the chosen micro-board.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyBot;

impl GreedyBot {
    /// Create the bot.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn priority_move(state: &GameState) -> Option<Move> {
        for &(mx, my) in &PREFERRED {
            if state.macro_cell(mx, my) != MacroCell::Available {
                continue;
            }
            for &(lx, ly) in &PREFERRED {
                let mv = Move::new((mx * MICRO_SIZE + lx) as u8, (my * MICRO_SIZE + ly) as u8);
                if state.cell(mv.x as usize, mv.y as usize).is_empty() {
                    return Some(mv);
                }
            }
        }
        None
    }
}

impl Bot for GreedyBot {
    fn name(&self) -> &str {
        "Greedy bot"
    }

    fn choose_move(&mut self, state: &GameState, _budget: Duration) -> Move {
        let mover = state.mover();

        let wins = engine::winning_moves(state, mover);
        if let Some(&mv) = wins.first() {
            return mv;
        }

        let blocks = engine::winning_moves(state, mover.opponent());
        if let Some(&mv) = blocks.first() {
            return mv;
        }

        if let Some(mv) = Self::priority_move(state) {
            return mv;
        }

        // Every available micro-board had only occupied preferred cells;
        // cannot happen, but any legal move is acceptable.
        let moves = engine::available_moves(state);
        assert!(
            !moves.is_empty(),
            "active state must have at least one legal move"
        );
        moves[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    #[test]
    fn test_opening_takes_global_center() {
        let state = GameState::new();
        let mut bot = GreedyBot::new();

        // Preference list: macro (1,1), cell (1,1) within it.
        assert_eq!(bot.choose_move(&state, Duration::ZERO), Move::new(4, 4));
    }

    #[test]
    fn test_takes_immediate_win_over_preference() {
        // P1 to move, forced into micro-board (0,0) with a finishing move
        // available (see the rules-engine column-win fixture).
        let mut state = GameState::new();
        for (x, y) in [(0, 0), (1, 0), (3, 0), (2, 0), (6, 0), (1, 1), (3, 3)] {
            rules::apply_move(&mut state, Move::new(x, y)).unwrap();
        }

        let mut bot = GreedyBot::new();
        let mv = bot.choose_move(&state, Duration::ZERO);
        assert!(engine::is_winning_move(&state, mv, state.mover()));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // P0 to move, forced into micro-board (0,0) where P1 threatens the
        // x=0 column at (0,2).
        let mut state = GameState::new();
        for (x, y) in [(0, 3), (0, 1), (0, 4), (1, 3), (3, 0), (0, 0)] {
            rules::apply_move(&mut state, Move::new(x, y)).unwrap();
        }

        let mut bot = GreedyBot::new();
        assert_eq!(bot.choose_move(&state, Duration::ZERO), Move::new(0, 2));
    }

    #[test]
    fn test_always_legal_over_many_plies() {
        let mut state = GameState::new();
        let mut bot = GreedyBot::new();

        while state.status().is_active() {
            let mv = bot.choose_move(&state, Duration::ZERO);
            assert!(rules::is_legal(&state, mv));
            rules::apply_move(&mut state, mv).unwrap();
        }
    }
}
