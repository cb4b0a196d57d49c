//! Board state for Ultimate Tic-Tac-Toe.
//!
//! `GameState` owns the 9x9 cell grid, the 3x3 macro-board summarizing each
//! micro-board, the ply counters, and the overall status. It carries no rules
//! logic: legality, transitions, and win detection live in `rules::engine`,
//! which is the only module allowed to mutate a state.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Side length of the full cell grid.
pub const BOARD_SIZE: usize = 9;

/// Side length of one micro-board (and of the macro-board).
pub const MICRO_SIZE: usize = 3;

/// One cell of the 9x9 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unplayed.
    Empty,
    /// Marked by a player.
    Owned(PlayerId),
}

impl Cell {
    /// Check if the cell is unplayed.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Status of one macro cell: a micro-board as seen from the macro grid.
///
/// `Empty` and `Available` are distinct: a micro-board is a legal target
/// only while its macro cell is exactly `Available`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MacroCell {
    /// Undecided and not currently playable.
    Empty,
    /// Undecided and open for the next move.
    Available,
    /// Won by a player.
    Won(PlayerId),
    /// Full with no winner.
    Tied,
}

impl MacroCell {
    /// Check if the micro-board outcome is settled (won or tied).
    #[must_use]
    pub fn is_decided(self) -> bool {
        matches!(self, MacroCell::Won(_) | MacroCell::Tied)
    }

    /// Check if the micro-board is still undecided.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, MacroCell::Empty | MacroCell::Available)
    }
}

/// Overall game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game in progress.
    Active,
    /// Won by a player.
    Won(PlayerId),
    /// Macro-board exhausted with no winner.
    Tied,
}

impl GameStatus {
    /// Check if the game is still in progress.
    #[must_use]
    pub fn is_active(self) -> bool {
        self == GameStatus::Active
    }
}

/// A move: cell coordinates in `[0,8] x [0,8]`. Immutable value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub x: u8,
    pub y: u8,
}

impl Move {
    /// Create a move at the given cell coordinates.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check both coordinates are on the board.
    #[must_use]
    pub const fn in_range(self) -> bool {
        self.x < BOARD_SIZE as u8 && self.y < BOARD_SIZE as u8
    }

    /// Macro-board column of the micro-board this move lands in.
    #[must_use]
    pub const fn macro_x(self) -> usize {
        self.x as usize / MICRO_SIZE
    }

    /// Macro-board row of the micro-board this move lands in.
    #[must_use]
    pub const fn macro_y(self) -> usize {
        self.y as usize / MICRO_SIZE
    }

    /// Column within the move's micro-board.
    #[must_use]
    pub const fn local_x(self) -> usize {
        self.x as usize % MICRO_SIZE
    }

    /// Row within the move's micro-board.
    #[must_use]
    pub const fn local_y(self) -> usize {
        self.y as usize % MICRO_SIZE
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Complete game state.
///
/// Cheap to clone (two fixed-size arrays plus counters), which the search
/// relies on: every tree node owns an independent snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Cell grid, indexed `[x][y]`.
    pub(crate) board: [[Cell; BOARD_SIZE]; BOARD_SIZE],

    /// Macro-board, indexed `[macro_x][macro_y]`.
    pub(crate) macroboard: [[MacroCell; MICRO_SIZE]; MICRO_SIZE],

    /// Plies played so far. The mover alternates on this counter.
    pub(crate) move_number: u32,

    /// Full rounds completed (increments every second ply).
    pub(crate) round_number: u32,

    /// Overall status. A finished state is never mutated further.
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Create the starting position: empty grid, every micro-board open for
    /// the first move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            macroboard: [[MacroCell::Available; MICRO_SIZE]; MICRO_SIZE],
            move_number: 0,
            round_number: 0,
            status: GameStatus::Active,
        }
    }

    /// Get a cell by board coordinates.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.board[x][y]
    }

    /// Get a macro cell by macro-board coordinates.
    #[must_use]
    pub fn macro_cell(&self, macro_x: usize, macro_y: usize) -> MacroCell {
        self.macroboard[macro_x][macro_y]
    }

    /// Plies played so far.
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Full rounds completed.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Overall status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player to move. Meaningful only while the game is active.
    #[must_use]
    pub fn mover(&self) -> PlayerId {
        PlayerId::from_ply(self.move_number)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.status(), GameStatus::Active);
        assert_eq!(state.move_number(), 0);
        assert_eq!(state.round_number(), 0);
        assert_eq!(state.mover(), PlayerId::P0);

        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                assert!(state.cell(x, y).is_empty());
            }
        }
        for mx in 0..MICRO_SIZE {
            for my in 0..MICRO_SIZE {
                assert_eq!(state.macro_cell(mx, my), MacroCell::Available);
            }
        }
    }

    #[test]
    fn test_move_coordinates() {
        let mv = Move::new(4, 7);

        assert!(mv.in_range());
        assert_eq!(mv.macro_x(), 1);
        assert_eq!(mv.macro_y(), 2);
        assert_eq!(mv.local_x(), 1);
        assert_eq!(mv.local_y(), 1);
        assert_eq!(format!("{}", mv), "(4,7)");

        assert!(!Move::new(9, 0).in_range());
        assert!(!Move::new(0, 200).in_range());
    }

    #[test]
    fn test_macro_cell_predicates() {
        assert!(MacroCell::Empty.is_open());
        assert!(MacroCell::Available.is_open());
        assert!(!MacroCell::Won(PlayerId::P0).is_open());

        assert!(MacroCell::Tied.is_decided());
        assert!(MacroCell::Won(PlayerId::P1).is_decided());
        assert!(!MacroCell::Available.is_decided());
    }

    #[test]
    fn test_serialization_round_trip() {
        let state = GameState::new();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
