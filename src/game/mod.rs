//! Game orchestration and engine matches.
//!
//! - **Game**: the `InProgress`/`Over` state machine a front end drives
//! - **MoveRecord / MatchRecord**: what was played
//! - **play_match**: engine-vs-engine games

pub mod record;
pub mod self_play;
pub mod session;

// Re-export main types
pub use record::{MatchRecord, MoveRecord};
pub use self_play::{play_match, play_match_from};
pub use session::{Game, GameStatus};
