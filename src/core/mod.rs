//! Core data model: players, board state, and deterministic RNG.

pub mod player;
pub mod rng;
pub mod state;

pub use player::PlayerId;
pub use rng::SearchRng;
pub use state::{Cell, GameState, GameStatus, MacroCell, Move, BOARD_SIZE, MICRO_SIZE};
