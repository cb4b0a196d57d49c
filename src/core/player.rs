//! Player identification for the two-player game.
//!
//! Players are indexed 0 and 1. The mover for any ply is derived from the
//! move counter (player 0 moves on even plies), so there is never a separate
//! "whose turn" field to keep in sync.

use serde::{Deserialize, Serialize};

/// Identifier for one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first.
    pub const P0: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const P1: PlayerId = PlayerId(1);

    /// Create a player ID. Only 0 and 1 are meaningful.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// The player to move at the given ply count.
    ///
    /// ```
    /// use uttt_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_ply(0), PlayerId::P0);
    /// assert_eq!(PlayerId::from_ply(1), PlayerId::P1);
    /// assert_eq!(PlayerId::from_ply(2), PlayerId::P0);
    /// ```
    #[must_use]
    pub const fn from_ply(move_number: u32) -> Self {
        Self((move_number % 2) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::P0.opponent(), PlayerId::P1);
        assert_eq!(PlayerId::P1.opponent(), PlayerId::P0);
    }

    #[test]
    fn test_from_ply_alternates() {
        for ply in 0..10 {
            let expected = if ply % 2 == 0 { PlayerId::P0 } else { PlayerId::P1 };
            assert_eq!(PlayerId::from_ply(ply), expected);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PlayerId::P1), "Player 1");
    }
}
