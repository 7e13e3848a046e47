//! Python bindings for the rust-ttt engine.
//!
//! Lets an existing Python front end (pygame or otherwise) keep its
//! drawing and input handling while the board model and the decision
//! engine run in Rust. Players and difficulty levels use the legacy
//! numeric encoding: player 1 is X, player 2 is O; level 0 is random,
//! level 1 is optimal.
//!
//! # Quick Start
//!
//! ```python
//! import rust_ttt as ttt
//!
//! game = ttt.Game(vs_engine=True, level=1, engine_player=2)
//! game.make_move(0, 0)
//! if game.is_engine_turn():
//!     row, col = game.play_engine_turn()
//!
//! squares = game.board().squares()   # 3x3 numpy uint8 array
//! ```

use pyo3::prelude::*;

mod py_board;
mod py_core;
mod py_engine;
mod py_game;

pub use py_board::*;
pub use py_engine::*;
pub use py_game::*;

/// rust-ttt: tic-tac-toe board model and alpha-beta decision engine.
#[pymodule]
fn rust_ttt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;
    m.add_class::<PyDecisionEngine>()?;
    m.add_class::<PyGame>()?;

    Ok(())
}
