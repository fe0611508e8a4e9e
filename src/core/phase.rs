//! Round phases.

use serde::{Deserialize, Serialize};

/// The phase a session is in.
///
/// Rounds cycle AcquireTile, PlayTiles, PrepareNextRound; after the final
/// round PrepareNextRound hands off to GameOver instead of a new acquisition
/// phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    AcquireTile,
    PlayTiles,
    PrepareNextRound,
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::AcquireTile => "AcquireTile",
            Phase::PlayTiles => "PlayTiles",
            Phase::PrepareNextRound => "PrepareNextRound",
            Phase::GameOver => "GameOver",
        };
        f.write_str(name)
    }
}
