//! Game rules: legality, state transition, two-level win detection, and the
//! simulation wrapper used for both real moves and rollouts.
//!
//! The engine is a set of pure functions over `GameState`; nothing here
//! holds search state.

pub mod engine;
pub mod simulator;

pub use engine::{
    apply_move, available_moves, check_legal, derive_status, is_legal, is_winning_move,
    winning_moves, MoveError,
};
pub use simulator::Simulator;
