//! Error type shared by the board, the decision engine, and the game driver.

use thiserror::Error;

use super::Player;

/// Errors reported by the engine.
///
/// Misuse that the board historically tolerated silently (marking an
/// occupied cell, asking for a move on a full board) is reported here
/// instead of corrupting state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("coordinate ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },

    #[error("invalid player number: {0} (expected 1 or 2)")]
    InvalidPlayer(u8),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("no empty cells left on the board")]
    BoardFull,

    #[error("search found no move: the board is already decided")]
    NoMoveFound,

    #[error("the game is over")]
    GameOver,

    #[error("it is not the engine's turn")]
    NotEngineTurn,

    #[error("engine plays {found}, expected {expected}")]
    PlayerMismatch { expected: Player, found: Player },
}

/// Convenience Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
