//! # rust-ttt
//!
//! Tic-tac-toe board model and decision engine.
//!
//! ## Design Principles
//!
//! 1. **Board as a value**: `Board` is a small `Copy` type. The search
//!    explores private copies and never mutates the caller's board.
//!
//! 2. **Deterministic search**: The optimal policy is exhaustive minimax
//!    with alpha-beta pruning. Among equally good moves it always returns
//!    the lowest row-major cell.
//!
//! 3. **Misuse is reported**: Marking an occupied cell or asking for a move
//!    on a full board returns an `EngineError` instead of corrupting state.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `board`: Coordinates, cells, the grid, winning lines
//! - `rules`: Game results
//! - `search`: Random and optimal policies, the decision engine
//! - `game`: Turn-taking state machine and engine-vs-engine matches
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod board;
pub mod rules;
pub mod search;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, EngineConfig, EngineError, GameConfig, GameMode, GameRng, GameRngState, Player,
    Result,
};

pub use crate::board::{Board, Cell, Coord, Line};

pub use crate::rules::GameResult;

pub use crate::search::{
    DecisionEngine, Evaluation, MinimaxPolicy, MovePolicy, RandomPolicy, Roles, SearchStats,
};

pub use crate::game::{play_match, Game, GameStatus, MatchRecord, MoveRecord};
