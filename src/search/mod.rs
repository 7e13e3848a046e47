//! Decision engine for the automated player.
//!
//! ## Overview
//!
//! - **Random**: uniform choice over the empty cells
//! - **Optimal**: exhaustive minimax with alpha-beta pruning over the full
//!   game tree (depth at most 9, so no limits or timeouts)
//! - **Deterministic tie-break**: among equally good moves the lowest
//!   row-major cell wins
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::board::Board;
//! use rust_ttt::core::{Difficulty, EngineConfig, Player};
//! use rust_ttt::search::DecisionEngine;
//!
//! let config = EngineConfig::default()
//!     .with_player(Player::O)
//!     .with_difficulty(Difficulty::Optimal);
//! let mut engine = DecisionEngine::new(config);
//!
//! let board: Board = "X.. ... ...".parse().unwrap();
//! let reply = engine.select_move(&board).unwrap();
//! println!("O plays {} after visiting {} nodes", reply, engine.stats().nodes);
//! ```

pub mod engine;
pub mod minimax;
pub mod policy;
pub mod stats;

// Re-export main types
pub use engine::DecisionEngine;
pub use minimax::{search, Evaluation, Roles, DRAW, LOSS, NEG_INF, POS_INF, WIN};
pub use policy::{MinimaxPolicy, MovePolicy, RandomPolicy};
pub use stats::SearchStats;
