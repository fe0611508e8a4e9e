//! Engine error vocabulary.
//!
//! Errors fall into two classes:
//!
//! - **Fatal**: a broken invariant (conservation, configuration). The session
//!   aborts immediately; the event log up to that point stays readable.
//! - **Caller errors**: an illegal index or placement target. Rejected back to
//!   the caller without mutating state, never silently corrected.
//!
//! Running out of tiles is not an error. A draw against an exhausted Bag and
//! Tower under-fills its destination, and callers inspect the result.

use thiserror::Error;

use super::color::{StarColor, TileColor};
use crate::ledger::Zone;

/// All failures the engine can report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A color no longer sums to its fixed total across the whole ledger.
    #[error("conservation violated: {color} totals {found} across the ledger, expected {expected}")]
    Conservation {
        color: TileColor,
        found: u16,
        expected: u16,
    },

    /// A move asked a zone for more tiles than it holds.
    #[error("{zone} holds too few {color} tiles for this move")]
    ZoneUnderflow { zone: Zone, color: TileColor },

    /// A move overflowed a zone's count, which implies a conservation defect.
    #[error("{zone} overflowed its {color} count")]
    ZoneOverflow { zone: Zone, color: TileColor },

    /// The targeted board cell is occupied or out of range.
    #[error("cannot place on {star} slot {slot}")]
    InvalidPlacement { star: StarColor, slot: u8 },

    /// The color is already on the Wild star, which admits each color once.
    #[error("{color} is already placed on the Wild star")]
    WildStarRepeat { color: TileColor },

    /// A chosen index fell outside the legal move list.
    #[error("chosen index {index} is outside the {len} legal moves")]
    InvalidMove { index: usize, len: usize },

    /// Invalid session setup, detected before the first dispatch.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl EngineError {
    /// True for defects that abort the session.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EngineError::Conservation { .. }
                | EngineError::ZoneUnderflow { .. }
                | EngineError::ZoneOverflow { .. }
                | EngineError::Configuration(_)
        )
    }
}
