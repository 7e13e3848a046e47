//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{Difficulty, EngineConfig, GameConfig, GameMode};
use crate::game::{Game, GameStatus};

use super::py_board::PyBoard;
use super::py_core::{coord, player, result_number};

/// Python wrapper for Game.
#[pyclass(name = "Game")]
pub struct PyGame(pub Game);

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - vs_engine: Play against the engine (default: True)
    /// - level: Engine level, 0 random or 1 optimal (default: 1)
    /// - engine_player: Player the engine moves for, 1 or 2 (default: 2)
    /// - seed: RNG seed for the random level (default: 42)
    /// - first_player: Player who opens every game, 1 or 2 (default: 1)
    #[new]
    #[pyo3(signature = (vs_engine = true, level = 1, engine_player = 2, seed = 42, first_player = 1))]
    fn new(
        vs_engine: bool,
        level: u8,
        engine_player: u8,
        seed: u64,
        first_player: u8,
    ) -> PyResult<Self> {
        let mode = if vs_engine {
            GameMode::PlayerVsEngine
        } else {
            GameMode::PlayerVsPlayer
        };
        let engine = EngineConfig::new()
            .with_difficulty(Difficulty::from_level(level))
            .with_player(player(engine_player)?)
            .with_seed(seed);
        let config = GameConfig::new()
            .with_mode(mode)
            .with_first_player(player(first_player)?)
            .with_engine(engine);
        Ok(Self(Game::new(config)))
    }

    /// Mark a cell for the current player. Returns True if the game ended.
    fn make_move(&mut self, row: usize, col: usize) -> PyResult<bool> {
        let status = self.0.make_move(coord(row, col)?)?;
        Ok(matches!(status, GameStatus::Over(_)))
    }

    /// Check if the engine should move now.
    fn is_engine_turn(&self) -> bool {
        self.0.is_engine_turn()
    }

    /// Let the engine move. Returns the (row, col) it played.
    fn play_engine_turn(&mut self) -> PyResult<(usize, usize)> {
        Ok(self.0.play_engine_turn()?.into())
    }

    /// Switch between two humans and human vs. engine. Returns True if the
    /// engine now plays.
    fn toggle_mode(&mut self) -> bool {
        self.0.toggle_mode() == GameMode::PlayerVsEngine
    }

    /// Change the engine level without resetting the board.
    fn set_level(&mut self, level: u8) {
        self.0.set_difficulty(Difficulty::from_level(level));
    }

    /// Start over, keeping mode and level.
    fn reset(&mut self) {
        self.0.reset();
    }

    /// Player to move (1 or 2).
    #[getter]
    fn current_player(&self) -> u8 {
        self.0.current_player().number()
    }

    fn is_over(&self) -> bool {
        self.0.is_over()
    }

    /// None while in progress, 0 for a draw, else the winner (1 or 2).
    fn result(&self) -> Option<u8> {
        self.0.status().result().map(result_number)
    }

    /// Copy of the live board.
    fn board(&self) -> PyBoard {
        PyBoard(*self.0.board())
    }

    fn __repr__(&self) -> String {
        let status = match self.0.status() {
            GameStatus::InProgress => "in progress".to_string(),
            GameStatus::Over(result) => result.to_string(),
        };
        format!(
            "Game(to_move={}, moves={}, status={})",
            self.0.current_player(),
            self.0.history().len(),
            status
        )
    }
}
