//! Bonus spaces: pillars, statues, and windows.
//!
//! Each board carries eighteen fixed adjacency groups. When every cell of a
//! group is occupied the group fires, granting a draw from the Supply, and
//! is removed from further detection: a group fires at most once per board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::PlayerBoard;
use crate::core::{StarColor, TileColor};

/// The three bonus space shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    /// Two star cells plus two Wild-star cells; grants 1 tile.
    Pillar,
    /// Two cells on each of two adjacent stars; grants 2 tiles.
    Statue,
    /// Two cells on a single star; grants 3 tiles.
    Window,
}

impl BonusKind {
    /// Tiles drawn from the Supply when a group of this kind fires.
    #[must_use]
    pub const fn grant(self) -> u8 {
        match self {
            BonusKind::Pillar => 1,
            BonusKind::Statue => 2,
            BonusKind::Window => 3,
        }
    }
}

impl std::fmt::Display for BonusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BonusKind::Pillar => "Pillar",
            BonusKind::Statue => "Statue",
            BonusKind::Window => "Window",
        };
        f.write_str(name)
    }
}

/// One adjacency group of board cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusGroup {
    /// The group's shape, which fixes its grant.
    pub kind: BonusKind,
    /// The cells that must all be occupied, as (star, slot) pairs.
    pub cells: SmallVec<[(StarColor, u8); 4]>,
}

impl BonusGroup {
    /// Tiles drawn when this group fires.
    #[must_use]
    pub fn grant(&self) -> u8 {
        self.kind.grant()
    }

    /// True when every cell of the group is occupied.
    #[must_use]
    pub fn is_surrounded(&self, board: &PlayerBoard) -> bool {
        self.cells
            .iter()
            .all(|&(star, slot)| board.is_occupied(star, slot))
    }
}

/// Wild-star slots flanking each color's pillar, in color order.
const PILLAR_WILD_SLOTS: [(u8, u8); 6] = [(6, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)];

/// The eighteen groups of a standard board.
#[must_use]
pub fn standard_groups() -> Vec<BonusGroup> {
    let mut groups = Vec::with_capacity(18);

    for color in TileColor::ALL {
        let star = color.star();
        let (wild_a, wild_b) = PILLAR_WILD_SLOTS[color.index()];
        groups.push(BonusGroup {
            kind: BonusKind::Pillar,
            cells: SmallVec::from_slice(&[
                (star, 2),
                (star, 3),
                (StarColor::Wild, wild_a),
                (StarColor::Wild, wild_b),
            ]),
        });
    }

    for color in TileColor::ALL {
        let star = color.star();
        let next = TileColor::ALL[(color.index() + 1) % 6].star();
        groups.push(BonusGroup {
            kind: BonusKind::Statue,
            cells: SmallVec::from_slice(&[(star, 1), (star, 2), (next, 3), (next, 4)]),
        });
    }

    for color in TileColor::ALL {
        let star = color.star();
        groups.push(BonusGroup {
            kind: BonusKind::Window,
            cells: SmallVec::from_slice(&[(star, 5), (star, 6)]),
        });
    }

    groups
}

/// Per-board fire-once tracker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTracker {
    remaining: Vec<BonusGroup>,
}

impl BonusTracker {
    /// Tracker with all eighteen standard groups armed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            remaining: standard_groups(),
        }
    }

    /// Groups that have not fired yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Remove and return every group the board now surrounds.
    pub fn claim_surrounded(&mut self, board: &PlayerBoard) -> Vec<BonusGroup> {
        let mut fired = Vec::new();
        self.remaining.retain(|group| {
            if group.is_surrounded(board) {
                fired.push(group.clone());
                false
            } else {
                true
            }
        });
        fired
    }
}

impl Default for BonusTracker {
    fn default() -> Self {
        Self::new()
    }
}
