//! Game orchestration: whose turn it is, when the game ends, resets.
//!
//! ## States
//!
//! A game is `InProgress` until its board is terminal (a completed line
//! or a full grid), then `Over`. The only way back is `reset`, which
//! starts a fresh board but keeps the mode, the difficulty, and the
//! engine's player.
//!
//! ## Driving Loop
//!
//! The front end owns input and drawing. Per frame it forwards clicks to
//! `make_move` and, while `is_engine_turn` holds, calls
//! `play_engine_turn`:
//!
//! ```
//! use rust_ttt::board::Coord;
//! use rust_ttt::game::Game;
//! use rust_ttt::core::GameConfig;
//!
//! let mut game = Game::new(GameConfig::default());
//! game.make_move(Coord::new(0, 0).unwrap()).unwrap();
//!
//! while game.is_engine_turn() {
//!     let reply = game.play_engine_turn().unwrap();
//!     println!("engine played {}", reply);
//! }
//! assert_eq!(game.history().len(), 2);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{info, trace, warn};

use crate::board::{Board, Coord, Line};
use crate::core::{Difficulty, EngineError, GameConfig, GameMode, Player, Result};
use crate::rules::GameResult;
use crate::search::DecisionEngine;

use super::record::MoveRecord;

/// Whether play can continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// The board is terminal; only `reset` continues.
    Over(GameResult),
}

impl GameStatus {
    /// The result, once the game is over.
    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Over(result) => Some(result),
        }
    }
}

/// A game between a human and either another human or the engine.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    engine: DecisionEngine,
    current: Player,
    status: GameStatus,
    /// Persistent so snapshots of a game are O(1).
    history: Vector<MoveRecord>,
}

impl Game {
    /// Start a new game.
    pub fn new(config: GameConfig) -> Self {
        let engine = DecisionEngine::new(config.engine.clone());
        Self {
            board: Board::new(),
            engine,
            current: config.first_player,
            status: GameStatus::InProgress,
            history: Vector::new(),
            config,
        }
    }

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    /// Current configuration, including any mode or difficulty changes.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    /// Completed line to highlight, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<(Line, Player)> {
        self.board.winning_line()
    }

    /// Moves played since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The automated opponent.
    #[must_use]
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Check if the engine should move now.
    #[must_use]
    pub fn is_engine_turn(&self) -> bool {
        self.config.mode == GameMode::PlayerVsEngine
            && !self.is_over()
            && self.current == self.engine.player()
    }

    /// Mark `coord` for the current player.
    ///
    /// ## Errors
    ///
    /// - `GameOver` once the game has ended
    /// - `CellOccupied` if the cell is already marked
    pub fn make_move(&mut self, coord: Coord) -> Result<GameStatus> {
        self.commit(coord, false)
    }

    /// Let the engine choose and play its move.
    ///
    /// ## Errors
    ///
    /// `NotEngineTurn` unless `is_engine_turn` holds; otherwise whatever
    /// the engine reports.
    pub fn play_engine_turn(&mut self) -> Result<Coord> {
        if !self.is_engine_turn() {
            return Err(EngineError::NotEngineTurn);
        }
        let coord = self.engine.select_move(&self.board)?;
        self.commit(coord, true)?;
        Ok(coord)
    }

    /// Switch between human-vs-human and human-vs-engine.
    pub fn toggle_mode(&mut self) -> GameMode {
        self.config.mode = self.config.mode.toggled();
        trace!(mode = ?self.config.mode, "mode changed");
        self.config.mode
    }

    /// Change the engine's difficulty without touching the board.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.engine.difficulty = difficulty;
        self.engine.set_difficulty(difficulty);
        trace!(%difficulty, "difficulty changed");
    }

    /// Start over on an empty board.
    ///
    /// Mode, difficulty, and the engine's player carry over.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current = self.config.first_player;
        self.status = GameStatus::InProgress;
        self.history = Vector::new();
        trace!("game reset");
    }

    fn commit(&mut self, coord: Coord, by_engine: bool) -> Result<GameStatus> {
        if self.is_over() {
            warn!(%coord, "move rejected: game over");
            return Err(EngineError::GameOver);
        }

        let player = self.current;
        self.board.mark(coord, player)?;
        self.history.push_back(MoveRecord {
            player,
            coord,
            move_number: self.history.len(),
            by_engine,
        });
        trace!(%player, %coord, by_engine, "move committed");

        self.current = player.opponent();
        if let Some(result) = self.board.terminal_line() {
            info!(%result, moves = self.history.len(), "game over");
            self.status = GameStatus::Over(result);
        }
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
