//! Board bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::Board;

use super::py_core::{coord, player};

/// Python wrapper for Board.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create an empty board, or parse one from nine `X`/`O`/`.` symbols.
    #[new]
    #[pyo3(signature = (cells = None))]
    fn new(cells: Option<&str>) -> PyResult<Self> {
        match cells {
            Some(text) => Ok(Self(text.parse()?)),
            None => Ok(Self(Board::new())),
        }
    }

    /// Mark a cell for player 1 or 2.
    ///
    /// Raises ValueError if the cell is taken or out of range.
    fn mark(&mut self, row: usize, col: usize, player_number: u8) -> PyResult<()> {
        self.0.mark(coord(row, col)?, player(player_number)?)?;
        Ok(())
    }

    /// Check if a cell is unmarked.
    fn is_empty_cell(&self, row: usize, col: usize) -> PyResult<bool> {
        Ok(self.0.is_empty_cell(coord(row, col)?))
    }

    /// Empty cells as (row, col) pairs in row-major order.
    fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.0.empty_cells().into_iter().map(Into::into).collect()
    }

    fn is_full(&self) -> bool {
        self.0.is_full()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of marked cells.
    #[getter]
    fn filled(&self) -> usize {
        self.0.filled()
    }

    /// Owner of the first completed line (1 or 2), or 0 if there is none.
    fn final_state(&self) -> u8 {
        self.0.winning_line().map_or(0, |(_, p)| p.number())
    }

    /// Cells of the first completed line, for highlighting.
    fn winning_cells(&self) -> Option<Vec<(usize, usize)>> {
        self.0
            .winning_line()
            .map(|(line, _)| line.cells().into_iter().map(Into::into).collect())
    }

    /// Check if the game cannot continue.
    fn is_terminal(&self) -> bool {
        self.0.is_terminal()
    }

    /// Board as a 3x3 uint8 array: 0 empty, 1 and 2 for the players.
    fn squares<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let cells: Vec<u8> = self.0.cells().iter().map(|c| c.number()).collect();
        PyArray1::from_vec_bound(py, cells)
            .reshape([3, 3])
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    /// Independent copy of the board.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        let compact: String = self.0.to_string().split_whitespace().collect::<Vec<_>>().join(" ");
        format!("Board('{}')", compact)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
