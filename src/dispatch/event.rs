//! Game events.
//!
//! An event is a fact that occurred, recorded as plain data. The ordered
//! event log is the session's observable output and is sufficient to
//! reconstruct the full play-by-play. Events are immutable once created and
//! serializable for external consumers.

use serde::{Deserialize, Serialize};

use crate::board::BonusKind;
use crate::core::{Phase, PlayerId, StarColor, TileColor, TileCount};
use crate::moves::DrawSource;

/// Something that happened during a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A session began with this table size and seed.
    GameStarted { players: u8, seed: u64 },
    /// A round was prepared; `wild` is its wild color.
    RoundPrepared { round: u8, wild: TileColor },
    /// The phase machine moved to a new phase.
    PhaseAdvanced { phase: Phase },
    /// The Supply was topped up with `tiles`.
    SupplyFilled { tiles: TileCount },
    /// A factory display was topped up with `tiles`.
    FactoryDisplayFilled { display: u8, tiles: TileCount },
    /// The Bag ran dry and reclaimed the Tower's discards.
    BagRefilledFromTower { tiles: TileCount },
    /// A player drafted `tiles` from `source` into hand.
    TilesAcquired {
        player: PlayerId,
        source: DrawSource,
        tiles: TileCount,
    },
    /// The round's first table-center draw: `player` starts next round and
    /// paid `penalty` points.
    StartPlayerClaimed { player: PlayerId, penalty: u16 },
    /// Tiles left in a drafted display moved to the table center.
    DisplayRemainderDiscarded { display: u8, tiles: TileCount },
    /// A tile was placed, paying `cost` from hand and scoring `points`.
    TilePlaced {
        player: PlayerId,
        star: StarColor,
        slot: u8,
        color: TileColor,
        points: u16,
        cost: TileCount,
    },
    /// A surrounded bonus space granted `tiles` from the Supply.
    BonusClaimed {
        player: PlayerId,
        kind: BonusKind,
        tiles: TileCount,
    },
    /// A player passed, discarding `discarded` for `penalty` points.
    PlayerPassed {
        player: PlayerId,
        discarded: TileCount,
        penalty: u16,
    },
    /// One player's end-of-game scoring breakdown.
    FinalScoring {
        player: PlayerId,
        star_bonus: u16,
        coverage_bonus: u16,
        leftover_penalty: u16,
        total: u16,
    },
    /// The session finished; `scores` is indexed by player ordinal.
    GameEnded { winner: PlayerId, scores: Vec<u16> },
}

impl Event {
    /// The tag this event dispatches under.
    #[must_use]
    pub fn tag(&self) -> EventTag {
        match self {
            Event::GameStarted { .. } => EventTag::GameStarted,
            Event::RoundPrepared { .. } => EventTag::RoundPrepared,
            Event::PhaseAdvanced { .. } => EventTag::PhaseAdvanced,
            Event::SupplyFilled { .. } => EventTag::SupplyFilled,
            Event::FactoryDisplayFilled { .. } => EventTag::FactoryDisplayFilled,
            Event::BagRefilledFromTower { .. } => EventTag::BagRefilledFromTower,
            Event::TilesAcquired { .. } => EventTag::TilesAcquired,
            Event::StartPlayerClaimed { .. } => EventTag::StartPlayerClaimed,
            Event::DisplayRemainderDiscarded { .. } => EventTag::DisplayRemainderDiscarded,
            Event::TilePlaced { .. } => EventTag::TilePlaced,
            Event::BonusClaimed { .. } => EventTag::BonusClaimed,
            Event::PlayerPassed { .. } => EventTag::PlayerPassed,
            Event::FinalScoring { .. } => EventTag::FinalScoring,
            Event::GameEnded { .. } => EventTag::GameEnded,
        }
    }
}

/// Fieldless event discriminant, the registry key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTag {
    GameStarted,
    RoundPrepared,
    PhaseAdvanced,
    SupplyFilled,
    FactoryDisplayFilled,
    BagRefilledFromTower,
    TilesAcquired,
    StartPlayerClaimed,
    DisplayRemainderDiscarded,
    TilePlaced,
    BonusClaimed,
    PlayerPassed,
    FinalScoring,
    GameEnded,
}

impl EventTag {
    /// Every event tag, for registry validation.
    pub const ALL: [EventTag; 14] = [
        EventTag::GameStarted,
        EventTag::RoundPrepared,
        EventTag::PhaseAdvanced,
        EventTag::SupplyFilled,
        EventTag::FactoryDisplayFilled,
        EventTag::BagRefilledFromTower,
        EventTag::TilesAcquired,
        EventTag::StartPlayerClaimed,
        EventTag::DisplayRemainderDiscarded,
        EventTag::TilePlaced,
        EventTag::BonusClaimed,
        EventTag::PlayerPassed,
        EventTag::FinalScoring,
        EventTag::GameEnded,
    ];
}

/// An event with its position in the session's ordered log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// 0-based position in the log.
    pub seq: u32,
    /// The recorded event.
    pub event: Event,
}

impl EventRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(seq: u32, event: Event) -> Self {
        Self { seq, event }
    }
}
