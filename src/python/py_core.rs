//! Conversions shared by the bindings.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::Coord;
use crate::core::{EngineError, Player};
use crate::rules::GameResult;

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> Self {
        PyErr::new::<PyValueError, _>(err.to_string())
    }
}

/// Coordinate from Python (row, col) arguments.
pub(crate) fn coord(row: usize, col: usize) -> PyResult<Coord> {
    Ok(Coord::new(row, col)?)
}

/// Player from the legacy 1/2 encoding.
pub(crate) fn player(number: u8) -> PyResult<Player> {
    Ok(Player::from_number(number)?)
}

/// Result in the legacy encoding: 0 for a draw, otherwise the winner's number.
pub(crate) fn result_number(result: GameResult) -> u8 {
    result.winner().map_or(0, Player::number)
}
