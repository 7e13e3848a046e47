//! Decision engine bindings for Python.

use pyo3::prelude::*;

use crate::core::{Difficulty, EngineConfig};
use crate::search::DecisionEngine;

use super::py_board::PyBoard;
use super::py_core::player;

/// Python wrapper for DecisionEngine.
#[pyclass(name = "DecisionEngine")]
pub struct PyDecisionEngine(pub DecisionEngine);

#[pymethods]
impl PyDecisionEngine {
    /// Create an engine.
    ///
    /// # Arguments
    /// - level: 0 for random moves, 1 for optimal play (default: 1)
    /// - player_number: Player the engine moves for, 1 or 2 (default: 2)
    /// - seed: RNG seed for the random level (default: 42)
    #[new]
    #[pyo3(signature = (level = 1, player_number = 2, seed = 42))]
    fn new(level: u8, player_number: u8, seed: u64) -> PyResult<Self> {
        let config = EngineConfig::new()
            .with_difficulty(Difficulty::from_level(level))
            .with_player(player(player_number)?)
            .with_seed(seed);
        Ok(Self(DecisionEngine::new(config)))
    }

    /// Difficulty level (0 random, 1 optimal). Can be changed at any time.
    #[getter]
    fn level(&self) -> u8 {
        self.0.difficulty().level()
    }

    #[setter]
    fn set_level(&mut self, level: u8) {
        self.0.set_difficulty(Difficulty::from_level(level));
    }

    /// Player the engine moves for (1 or 2).
    #[getter]
    fn player(&self) -> u8 {
        self.0.player().number()
    }

    /// Choose the engine's move as (row, col).
    fn select_move(&mut self, board: &PyBoard) -> PyResult<(usize, usize)> {
        Ok(self.0.select_move(&board.0)?.into())
    }

    /// Optimal search value and move: (value, (row, col) or None).
    fn evaluate(&mut self, board: &PyBoard) -> PyResult<(i8, Option<(usize, usize)>)> {
        let eval = self.0.evaluate(&board.0)?;
        Ok((eval.value, eval.best_move.map(Into::into)))
    }

    /// Positions visited by the last optimal search.
    #[getter]
    fn nodes(&self) -> u32 {
        self.0.stats().nodes
    }

    fn __repr__(&self) -> String {
        format!(
            "DecisionEngine(level={}, player={})",
            self.0.difficulty().level(),
            self.0.player().number()
        )
    }
}
