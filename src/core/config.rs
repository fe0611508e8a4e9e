//! Session configuration and fixed game constants.
//!
//! Everything player-count-dependent is resolved here once, at construction.
//! An out-of-range player count is a configuration error before any state
//! exists.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Tiles of each color in the game.
pub const TILES_PER_COLOR: u8 = 22;

/// Total tiles across all colors.
pub const TOTAL_TILES: u16 = TILES_PER_COLOR as u16 * 6;

/// Tiles a factory display is filled to each round.
pub const FACTORY_DISPLAY_CAP: u8 = 4;

/// Tiles the supply is refilled to each round.
pub const SUPPLY_CAP: u8 = 10;

/// Rounds in a full game.
pub const ROUNDS_PER_GAME: u8 = 6;

/// Starting score for every player.
pub const INITIAL_SCORE: u16 = 5;

/// Cost slots per star.
pub const SLOTS_PER_STAR: u8 = 6;

/// Factory displays for a given player count: 2 -> 5, 3 -> 7, 4 -> 9.
#[must_use]
pub fn displays_for(player_count: usize) -> Option<u8> {
    match player_count {
        2 => Some(5),
        3 => Some(7),
        4 => Some(9),
        _ => None,
    }
}

/// Validated session parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    player_count: u8,
    displays: u8,
    seed: u64,
}

impl SessionConfig {
    /// Create a config for `player_count` players with the default seed 0.
    ///
    /// The seed default is fixed, never drawn from a non-deterministic
    /// source, so an unseeded session is still reproducible.
    pub fn new(player_count: usize) -> Result<Self, EngineError> {
        let displays = displays_for(player_count).ok_or_else(|| {
            EngineError::Configuration(format!(
                "{player_count} players is invalid, must be 2, 3, or 4"
            ))
        })?;
        Ok(Self {
            player_count: player_count as u8,
            displays,
            seed: 0,
        })
    }

    /// Replace the seed (builder style).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of players at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count as usize
    }

    /// Number of factory displays in play.
    #[must_use]
    pub fn displays(&self) -> u8 {
        self.displays
    }

    /// The session seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
