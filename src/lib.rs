//! # pavilion-engine
//!
//! A deterministic rules engine for a multiplayer tile-drafting,
//! tile-placement board game, consumed by an external driver that supplies
//! per-turn decisions.
//!
//! ## Design Principles
//!
//! 1. **Exact conservation**: a fixed 132-tile pool moves between named
//!    zones through one audited ledger operation. Every reachable state
//!    holds 22 tiles of each color, nothing clamped, nothing lost.
//!
//! 2. **Deterministic replay**: all randomness flows through one seeded draw
//!    service. The same seed and the same choice sequence reproduce the
//!    event log byte for byte.
//!
//! 3. **Queue-driven sequencing**: phases advance by dispatching tagged
//!    actions through FIFO queues against a registry validated at
//!    construction. Handlers enqueue, never call each other, so the
//!    dispatch history stays flat and inspectable.
//!
//! ## Modules
//!
//! - `core`: colors, tile count vectors, players, phases, RNG, errors,
//!   configuration
//! - `ledger`: zones and the conservation matrix
//! - `board`: placement grids, adjacency scoring, bonus spaces
//! - `moves`: eager legal-move enumeration
//! - `dispatch`: actions, events, queues, the handler registry
//! - `session`: the aggregate, the play loop, and reference agents

pub mod board;
pub mod core;
pub mod dispatch;
pub mod ledger;
pub mod moves;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    DrawRng, DrawRngState, EngineError, Phase, PlayerId, PlayerMap, SessionConfig, StarColor,
    TileColor, TileCount, WILD_ROUND_ORDER,
};

pub use crate::ledger::{Ledger, Zone, ZoneLayout};

pub use crate::board::{BonusGroup, BonusKind, BonusTracker, PlayerBoard};

pub use crate::moves::{
    acquire_draws, board_placements, placement_moves, BoardPlacement, DrawPosition, DrawSource,
    LegalMoves, PlacementMove,
};

pub use crate::dispatch::{
    Action, ActionHandler, Event, EventHandler, EventRecord, EventSink, EventTag, HandlerRegistry,
    MessageQueue,
};

pub use crate::session::{Agent, FirstChoice, GameState, RandomChoice, Session, TurnContext};
