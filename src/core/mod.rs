//! Core engine types: colors, tile counts, players, phases, RNG, errors,
//! configuration.
//!
//! These are the fundamental building blocks the ledger, board, and session
//! modules are assembled from.

pub mod color;
pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod tiles;

pub use color::{StarColor, TileColor, WILD_ROUND_ORDER};
pub use config::{
    displays_for, SessionConfig, FACTORY_DISPLAY_CAP, INITIAL_SCORE, ROUNDS_PER_GAME,
    SLOTS_PER_STAR, SUPPLY_CAP, TILES_PER_COLOR, TOTAL_TILES,
};
pub use error::EngineError;
pub use phase::Phase;
pub use player::{PlayerId, PlayerMap};
pub use rng::{DrawRng, DrawRngState};
pub use tiles::TileCount;
