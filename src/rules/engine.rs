//! Move legality, state transition, and two-level win detection.
//!
//! All functions are pure with respect to their inputs: `apply_move` either
//! fully advances the state or rejects the move with no mutation. Win and tie
//! detection share one 3x3 line check, parameterized by an ownership closure
//! over block-local coordinates, and run at both granularities: first over the
//! played micro-board's cells, then over the macro-board's won statuses.

use crate::core::state::{Cell, GameState, GameStatus, MacroCell, Move, BOARD_SIZE, MICRO_SIZE};
use crate::core::PlayerId;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The game is already won or tied.
    GameFinished,
    /// A coordinate is outside `[0,8]`.
    OutOfRange,
    /// The target micro-board is not currently available for play.
    MicroBoardClosed,
    /// The target cell is already marked.
    CellOccupied,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::GameFinished => write!(f, "game is already finished"),
            MoveError::OutOfRange => write!(f, "move coordinates are off the board"),
            MoveError::MicroBoardClosed => write!(f, "target micro-board is not available"),
            MoveError::CellOccupied => write!(f, "target cell is already marked"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Check a move against the legality rules, reporting why it fails.
///
/// Legal iff the game is active, the coordinates are in range, the owning
/// micro-board's macro cell is exactly `Available`, and the cell is empty.
pub fn check_legal(state: &GameState, mv: Move) -> Result<(), MoveError> {
    if !state.status.is_active() {
        return Err(MoveError::GameFinished);
    }
    if !mv.in_range() {
        return Err(MoveError::OutOfRange);
    }
    if state.macroboard[mv.macro_x()][mv.macro_y()] != MacroCell::Available {
        return Err(MoveError::MicroBoardClosed);
    }
    if !state.board[mv.x as usize][mv.y as usize].is_empty() {
        return Err(MoveError::CellOccupied);
    }
    Ok(())
}

/// Check whether a move is legal in the given state.
#[must_use]
pub fn is_legal(state: &GameState, mv: Move) -> bool {
    check_legal(state, mv).is_ok()
}

/// Apply a move for the current mover, advancing counters, micro/macro
/// statuses, and the forced-activation pattern.
///
/// Rejects illegal moves with no mutation.
pub fn apply_move(state: &mut GameState, mv: Move) -> Result<(), MoveError> {
    check_legal(state, mv)?;

    let mover = state.mover();
    state.board[mv.x as usize][mv.y as usize] = Cell::Owned(mover);
    state.move_number += 1;
    if state.move_number % 2 == 0 {
        state.round_number += 1;
    }

    update_micro_status(state, mv, mover);
    recompute_activation(state, mv);
    update_macro_status(state, mv, mover);

    Ok(())
}

/// All legal moves, in stable x-major order for deterministic tie-breaking.
#[must_use]
pub fn available_moves(state: &GameState) -> Vec<Move> {
    if !state.status.is_active() {
        return Vec::new();
    }

    let mut moves = Vec::with_capacity(BOARD_SIZE);
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            if state.macroboard[x / MICRO_SIZE][y / MICRO_SIZE] == MacroCell::Available
                && state.board[x][y].is_empty()
            {
                moves.push(Move::new(x as u8, y as u8));
            }
        }
    }
    moves
}

/// Check whether placing `player`'s mark at `mv` would complete a line in
/// its micro-board. Used by the heuristic bots and the greedy playout to
/// spot win-now and block-now moves; it does not probe macro-level wins.
#[must_use]
pub fn is_winning_move(state: &GameState, mv: Move, player: PlayerId) -> bool {
    let base_x = mv.macro_x() * MICRO_SIZE;
    let base_y = mv.macro_y() * MICRO_SIZE;
    let (lx, ly) = (mv.local_x(), mv.local_y());

    let owned = |i: usize, j: usize| {
        (i, j) == (lx, ly) || state.board[base_x + i][base_y + j] == Cell::Owned(player)
    };
    line_through(&owned, lx, ly)
}

/// All currently legal moves that would win a micro-board for `player`.
#[must_use]
pub fn winning_moves(state: &GameState, player: PlayerId) -> Vec<Move> {
    available_moves(state)
        .into_iter()
        .filter(|&mv| is_winning_move(state, mv, player))
        .collect()
}

/// Derive the overall status from a macro-board alone, scanning all eight
/// macro lines. Used when importing an externally observed position.
#[must_use]
pub fn derive_status(macroboard: &[[MacroCell; MICRO_SIZE]; MICRO_SIZE]) -> GameStatus {
    for player in [PlayerId::P0, PlayerId::P1] {
        let owned = |i: usize, j: usize| macroboard[i][j] == MacroCell::Won(player);
        let any_line = (0..MICRO_SIZE).any(|i| (0..MICRO_SIZE).all(|j| owned(i, j)))
            || (0..MICRO_SIZE).any(|j| (0..MICRO_SIZE).all(|i| owned(i, j)))
            || (0..MICRO_SIZE).all(|i| owned(i, i))
            || (0..MICRO_SIZE).all(|i| owned(i, MICRO_SIZE - 1 - i));
        if any_line {
            return GameStatus::Won(player);
        }
    }

    let all_decided = macroboard
        .iter()
        .flatten()
        .all(|cell| cell.is_decided());
    if all_decided {
        GameStatus::Tied
    } else {
        GameStatus::Active
    }
}

/// Shared 3x3 line check restricted to lines through `(lx, ly)`.
///
/// At most one new line can complete per move, so check order is free: the
/// played cell's column, its row, and the diagonals only when the cell lies
/// on one.
fn line_through(owned: &dyn Fn(usize, usize) -> bool, lx: usize, ly: usize) -> bool {
    if (0..MICRO_SIZE).all(|j| owned(lx, j)) {
        return true;
    }
    if (0..MICRO_SIZE).all(|i| owned(i, ly)) {
        return true;
    }
    if lx == ly && (0..MICRO_SIZE).all(|i| owned(i, i)) {
        return true;
    }
    if lx + ly == MICRO_SIZE - 1 && (0..MICRO_SIZE).all(|i| owned(i, MICRO_SIZE - 1 - i)) {
        return true;
    }
    false
}

/// Recompute the just-played micro-board's macro status.
fn update_micro_status(state: &mut GameState, mv: Move, mover: PlayerId) {
    let (mx, my) = (mv.macro_x(), mv.macro_y());
    let base_x = mx * MICRO_SIZE;
    let base_y = my * MICRO_SIZE;

    let owned = |i: usize, j: usize| state.board[base_x + i][base_y + j] == Cell::Owned(mover);
    if line_through(&owned, mv.local_x(), mv.local_y()) {
        state.macroboard[mx][my] = MacroCell::Won(mover);
        return;
    }

    let full = (0..MICRO_SIZE)
        .all(|i| (0..MICRO_SIZE).all(|j| !state.board[base_x + i][base_y + j].is_empty()));
    if full {
        state.macroboard[mx][my] = MacroCell::Tied;
    }
}

/// Re-mark which micro-boards are open for the next move.
///
/// The played cell's local position names the forced target; if that board
/// is already decided, every undecided board opens instead.
fn recompute_activation(state: &mut GameState, mv: Move) {
    for row in state.macroboard.iter_mut() {
        for cell in row.iter_mut() {
            if *cell == MacroCell::Available {
                *cell = MacroCell::Empty;
            }
        }
    }

    let (tx, ty) = (mv.local_x(), mv.local_y());
    if state.macroboard[tx][ty] == MacroCell::Empty {
        state.macroboard[tx][ty] = MacroCell::Available;
    } else {
        for row in state.macroboard.iter_mut() {
            for cell in row.iter_mut() {
                if *cell == MacroCell::Empty {
                    *cell = MacroCell::Available;
                }
            }
        }
    }
}

/// Check for a macro-level win or tie created by this move.
fn update_macro_status(state: &mut GameState, mv: Move, mover: PlayerId) {
    let (mx, my) = (mv.macro_x(), mv.macro_y());

    let owned = |i: usize, j: usize| state.macroboard[i][j] == MacroCell::Won(mover);
    if line_through(&owned, mx, my) {
        state.status = GameStatus::Won(mover);
        return;
    }

    let all_decided = state
        .macroboard
        .iter()
        .flatten()
        .all(|cell| cell.is_decided());
    if all_decided {
        state.status = GameStatus::Tied;
    }
}
