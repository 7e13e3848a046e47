//! Engine and game configuration types.
//!
//! - `Difficulty`: Which policy the automated player uses
//! - `EngineConfig`: Difficulty, controlled player, RNG seed
//! - `GameMode`: Human vs. human or human vs. engine
//! - `GameConfig`: Combines all configuration for a `Game`
//!
//! All configuration is plain data with builder-style setters.

use serde::{Deserialize, Serialize};

use super::Player;

/// Policy used to pick the automated player's move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform choice over empty cells.
    Random,
    /// Exhaustive minimax with alpha-beta pruning.
    #[default]
    Optimal,
}

impl Difficulty {
    /// Legacy numeric level (0 = random, 1 = optimal).
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Difficulty::Random => 0,
            Difficulty::Optimal => 1,
        }
    }

    /// Decode a legacy level. Anything non-zero selects `Optimal`.
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        if level == 0 {
            Difficulty::Random
        } else {
            Difficulty::Optimal
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Random => write!(f, "random"),
            Difficulty::Optimal => write!(f, "optimal"),
        }
    }
}

/// Decision engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Policy used by `select_move`.
    pub difficulty: Difficulty,

    /// Player the engine moves for.
    pub player: Player,

    /// Seed for the random policy.
    /// Same seed produces the same sequence of random moves.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Optimal,
            player: Player::O,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Create a new engine config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the player the engine controls.
    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Who plays against whom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the board; the engine never moves.
    PlayerVsPlayer,
    /// A human plays against the decision engine.
    #[default]
    PlayerVsEngine,
}

impl GameMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            GameMode::PlayerVsPlayer => GameMode::PlayerVsEngine,
            GameMode::PlayerVsEngine => GameMode::PlayerVsPlayer,
        }
    }
}

/// Configuration for a `Game`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Game mode.
    pub mode: GameMode,

    /// Player who moves first after creation or reset.
    pub first_player: Player,

    /// Configuration of the automated opponent.
    pub engine: EngineConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsEngine,
            first_player: Player::X,
            engine: EngineConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a new game config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the player who moves first.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Set the engine configuration.
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}
