//! String-sentinel board exchange with external drivers.
//!
//! Drivers represent the board as 9x9 and 3x3 grids of string tokens: player
//! marks are the player index as text, an unplayed cell or unresolved macro
//! slot is the empty sentinel, a playable macro slot is the available
//! sentinel (distinct from empty), and a drawn micro-board is the tie
//! sentinel. This module owns that vocabulary and converts both ways.

use crate::core::state::{Cell, GameState, MacroCell, BOARD_SIZE, MICRO_SIZE};
use crate::core::PlayerId;
use crate::rules::engine;

/// Unplayed cell / unresolved macro slot.
pub const EMPTY_FIELD: &str = ".";

/// Macro slot currently open for play.
pub const AVAILABLE_FIELD: &str = "-";

/// Drawn micro-board.
pub const TIE_FIELD: &str = "TIE";

/// A token that matched none of the sentinel vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WireError {
    /// Unrecognized cell token at board coordinates.
    BadCell { x: usize, y: usize, token: String },
    /// Unrecognized macro token at macro-board coordinates.
    BadMacroCell {
        macro_x: usize,
        macro_y: usize,
        token: String,
    },
}

impl std::fmt::Display for WireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireError::BadCell { x, y, token } => {
                write!(f, "unrecognized cell token {token:?} at ({x},{y})")
            }
            WireError::BadMacroCell {
                macro_x,
                macro_y,
                token,
            } => write!(
                f,
                "unrecognized macro token {token:?} at ({macro_x},{macro_y})"
            ),
        }
    }
}

impl std::error::Error for WireError {}

/// The wire mark for a player ("0" or "1").
#[must_use]
pub fn player_mark(player: PlayerId) -> &'static str {
    match player {
        PlayerId(0) => "0",
        _ => "1",
    }
}

fn cell_token(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => EMPTY_FIELD,
        Cell::Owned(player) => player_mark(player),
    }
}

fn macro_token(cell: MacroCell) -> &'static str {
    match cell {
        MacroCell::Empty => EMPTY_FIELD,
        MacroCell::Available => AVAILABLE_FIELD,
        MacroCell::Won(player) => player_mark(player),
        MacroCell::Tied => TIE_FIELD,
    }
}

fn parse_cell(token: &str) -> Option<Cell> {
    match token {
        t if t == EMPTY_FIELD => Some(Cell::Empty),
        "0" => Some(Cell::Owned(PlayerId::P0)),
        "1" => Some(Cell::Owned(PlayerId::P1)),
        _ => None,
    }
}

fn parse_macro(token: &str) -> Option<MacroCell> {
    match token {
        t if t == EMPTY_FIELD => Some(MacroCell::Empty),
        t if t == AVAILABLE_FIELD => Some(MacroCell::Available),
        t if t == TIE_FIELD => Some(MacroCell::Tied),
        "0" => Some(MacroCell::Won(PlayerId::P0)),
        "1" => Some(MacroCell::Won(PlayerId::P1)),
        _ => None,
    }
}

/// Export the cell grid as sentinel tokens, indexed `[x][y]`.
#[must_use]
pub fn export_board(state: &GameState) -> [[&'static str; BOARD_SIZE]; BOARD_SIZE] {
    let mut out = [[EMPTY_FIELD; BOARD_SIZE]; BOARD_SIZE];
    for (x, column) in out.iter_mut().enumerate() {
        for (y, token) in column.iter_mut().enumerate() {
            *token = cell_token(state.cell(x, y));
        }
    }
    out
}

/// Export the macro-board as sentinel tokens, indexed `[macro_x][macro_y]`.
#[must_use]
pub fn export_macroboard(state: &GameState) -> [[&'static str; MICRO_SIZE]; MICRO_SIZE] {
    let mut out = [[EMPTY_FIELD; MICRO_SIZE]; MICRO_SIZE];
    for (mx, column) in out.iter_mut().enumerate() {
        for (my, token) in column.iter_mut().enumerate() {
            *token = macro_token(state.macro_cell(mx, my));
        }
    }
    out
}

/// Build a `GameState` from an externally observed position.
///
/// The overall status is re-derived from the macro grid, so a position whose
/// macro-board already holds a completed line imports as finished.
pub fn import(
    board: &[[&str; BOARD_SIZE]; BOARD_SIZE],
    macroboard: &[[&str; MICRO_SIZE]; MICRO_SIZE],
    move_number: u32,
    round_number: u32,
) -> Result<GameState, WireError> {
    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (x, column) in board.iter().enumerate() {
        for (y, token) in column.iter().enumerate() {
            cells[x][y] = parse_cell(token).ok_or_else(|| WireError::BadCell {
                x,
                y,
                token: (*token).to_string(),
            })?;
        }
    }

    let mut macro_cells = [[MacroCell::Empty; MICRO_SIZE]; MICRO_SIZE];
    for (mx, column) in macroboard.iter().enumerate() {
        for (my, token) in column.iter().enumerate() {
            macro_cells[mx][my] = parse_macro(token).ok_or_else(|| WireError::BadMacroCell {
                macro_x: mx,
                macro_y: my,
                token: (*token).to_string(),
            })?;
        }
    }

    let status = engine::derive_status(&macro_cells);
    Ok(GameState {
        board: cells,
        macroboard: macro_cells,
        move_number,
        round_number,
        status,
    })
}
