//! Move and match records.

use serde::{Deserialize, Serialize};

use crate::board::Coord;
use crate::core::Player;
use crate::rules::GameResult;

/// One committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Player who marked the cell.
    pub player: Player,

    /// Cell that was marked.
    pub coord: Coord,

    /// Move number in the game (0-indexed).
    pub move_number: usize,

    /// Whether the decision engine chose this move.
    pub by_engine: bool,
}

/// A finished engine-vs-engine game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Moves in the order they were played.
    pub moves: Vec<MoveRecord>,

    /// Final result.
    pub result: GameResult,
}

impl MatchRecord {
    /// Total number of moves in the game.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no move was played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves made by one player.
    pub fn moves_by(&self, player: Player) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter().filter(move |m| m.player == player)
    }
}
