//! Player identification.
//!
//! ## Player
//!
//! Exactly two players ever mark the board. `X` moves first and carries the
//! legacy numeric encoding `1`; `O` carries `2`. The numeric form only exists
//! at the edges (Python bindings, board dumps); everything inside the crate
//! works with the enum so an invalid third player cannot be expressed.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First mover, drawn as a cross.
    X,
    /// Second mover, drawn as a circle.
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Get the opposing player.
    ///
    /// ```
    /// use rust_ttt::core::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Legacy numeric encoding (1 for X, 2 for O).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }

    /// Decode the legacy numeric encoding.
    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1 => Ok(Player::X),
            2 => Ok(Player::O),
            other => Err(EngineError::InvalidPlayer(other)),
        }
    }

    /// Single-character symbol used by `Board`'s text form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_number_encoding() {
        assert_eq!(Player::X.number(), 1);
        assert_eq!(Player::O.number(), 2);
        assert_eq!(Player::from_number(1).unwrap(), Player::X);
        assert_eq!(Player::from_number(2).unwrap(), Player::O);
    }

    #[test]
    fn test_invalid_number_rejected() {
        assert!(matches!(
            Player::from_number(0),
            Err(EngineError::InvalidPlayer(0))
        ));
        assert!(matches!(
            Player::from_number(3),
            Err(EngineError::InvalidPlayer(3))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::X), "X");
        assert_eq!(format!("{}", Player::O), "O");
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::O).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::O);
    }
}
