//! Core types: players, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{Difficulty, EngineConfig, GameConfig, GameMode};
pub use error::{EngineError, Result};
pub use player::Player;
pub use rng::{GameRng, GameRngState};
