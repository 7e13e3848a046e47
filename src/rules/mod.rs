//! Game outcomes.
//!
//! `Board::terminal_line` classifies a board into a `GameResult`; the
//! search and the game driver both consume it.

pub mod result;

pub use result::GameResult;
