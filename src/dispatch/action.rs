//! Game actions.
//!
//! An action describes an intended mutation of session state. Actions carry
//! no payload: every handler reads the context it needs from the game state,
//! which keeps the queue history flat and replayable. Dispatch is tag
//! matching against the registry; the action itself is the tag.

use serde::{Deserialize, Serialize};

/// An intended state mutation, dispatched through the action queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Initialize round 1 and queue the opening fills.
    StartGame,
    /// Refill the Supply to its cap from the Bag.
    FillSupply,
    /// Refill every factory display to its cap from the Bag.
    FillFactoryDisplays,
    /// Run one acquisition turn, or hand off once displays and center empty.
    AcquireTurn,
    /// Enter the placement phase with all players active.
    BeginPlacementPhase,
    /// Run one placement turn, or hand off once every player has passed.
    PlacementTurn,
    /// Advance wild color and round, or hand off to scoring after the last.
    PrepareNextRound,
    /// Score the finished game and declare the winner.
    EndGame,
}

impl Action {
    /// Every action tag, for registry validation.
    pub const ALL: [Action; 8] = [
        Action::StartGame,
        Action::FillSupply,
        Action::FillFactoryDisplays,
        Action::AcquireTurn,
        Action::BeginPlacementPhase,
        Action::PlacementTurn,
        Action::PrepareNextRound,
        Action::EndGame,
    ];
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::StartGame => "StartGame",
            Action::FillSupply => "FillSupply",
            Action::FillFactoryDisplays => "FillFactoryDisplays",
            Action::AcquireTurn => "AcquireTurn",
            Action::BeginPlacementPhase => "BeginPlacementPhase",
            Action::PlacementTurn => "PlacementTurn",
            Action::PrepareNextRound => "PrepareNextRound",
            Action::EndGame => "EndGame",
        };
        f.write_str(name)
    }
}
